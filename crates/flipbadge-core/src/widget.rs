//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle driven by the host:
//!
//! 1. **Measure**: Compute intrinsic size given constraints
//! 2. **Layout**: Accept the bounds the host allocated
//! 3. **Paint**: Generate draw commands for rendering
//!
//! Input arrives through [`Widget::event`], animation progress through
//! [`Widget::animate`]. Whole-widget rotation and opacity are reported by
//! [`Widget::visual`] and applied by the host around `paint`, never inside it.
//!
//! # Examples
//!
//! ```
//! use flipbadge_core::{TypeId, Visual};
//!
//! let string_type = TypeId::of::<String>();
//! assert_ne!(string_type, TypeId::of::<i32>());
//!
//! let visual = Visual::default();
//! assert_eq!(visual.rotation, 0.0);
//! assert_eq!(visual.opacity, 1.0);
//! ```

use crate::animation::{Animator, TimelineEvent};
use crate::bitmap::Bitmap;
use crate::constraints::Constraints;
use crate::draw::Transform2D;
use crate::event::Event;
use crate::geometry::{Point, Rect, Size};
use crate::Color;
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Whole-widget rotation and opacity, applied by the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Visual {
    /// Rotation in degrees around the widget center
    pub rotation: f32,
    /// Opacity in [0.0, 1.0]
    pub opacity: f32,
}

impl Default for Visual {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Visual {
    /// No rotation, fully opaque.
    pub const IDENTITY: Self = Self {
        rotation: 0.0,
        opacity: 1.0,
    };

    /// Transform rotating `bounds` around its center.
    #[must_use]
    pub fn transform(&self, bounds: Rect) -> Transform2D {
        if self.rotation == 0.0 {
            Transform2D::identity()
        } else {
            Transform2D::rotate_about(self.rotation, bounds.center())
        }
    }
}

/// A message emitted by a widget.
pub type Message = Box<dyn Any + Send>;

/// Core widget trait.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Accept allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Generate draw commands for rendering.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle input events. Widgets that animate start sequences on `animator`.
    fn event(&mut self, event: &Event, animator: &mut dyn Animator) -> Option<Message>;

    /// Handle a timeline event. Widgets ignore sequences they do not own.
    fn animate(&mut self, _event: &TimelineEvent) -> Option<Message> {
        None
    }

    /// Current whole-widget rotation and opacity.
    fn visual(&self) -> Visual {
        Visual::IDENTITY
    }

    /// Return and clear the pending redraw request.
    fn take_redraw(&mut self) -> bool {
        false
    }

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Canvas trait for paint operations.
///
/// This is a minimal abstraction over the rendering backend.
pub trait Canvas {
    /// Draw a filled, anti-aliased circle.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color);

    /// Draw a bitmap unscaled with its top-left corner at `position`.
    fn draw_bitmap(&mut self, bitmap: Bitmap, position: Point);

    /// Push a transform.
    fn push_transform(&mut self, transform: Transform2D);

    /// Pop the transform.
    fn pop_transform(&mut self);

    /// Push a group opacity.
    fn push_opacity(&mut self, alpha: f32);

    /// Pop the group opacity.
    fn pop_opacity(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visual_identity_transform() {
        let t = Visual::IDENTITY.transform(Rect::new(0.0, 0.0, 48.0, 48.0));
        assert!(t.is_identity());
    }

    #[test]
    fn test_visual_rotation_pivots_on_center() {
        let bounds = Rect::new(10.0, 10.0, 40.0, 40.0);
        let visual = Visual {
            rotation: 90.0,
            opacity: 0.5,
        };
        let center = visual.transform(bounds).apply(bounds.center());
        assert!((center.x - 30.0).abs() < 1e-4);
        assert!((center.y - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_layout_result_default() {
        assert_eq!(LayoutResult::default().size, Size::ZERO);
    }
}
