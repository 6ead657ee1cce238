//! Animated toggle badge widget.
//!
//! A circular badge showing one of two bitmaps over a colored disc. Toggling
//! plays a flip: the badge rotates edge-on, swaps its image, and rotates back
//! while fading through 30% opacity and blending its color to the other
//! state's color. The checked state only changes once the flip completes.

use crate::config::ToggleBadgeConfig;
use flipbadge_core::{
    Animator, Bitmap, BitmapStore, Canvas, Color, Constraints, Easing, Event, LayoutResult,
    Message, Point, Property, Rect, Segment, SequenceHandle, Size, TimelineEvent, Track, TypeId,
    Visual, Widget,
};
use std::time::Duration;

/// Default flip duration.
pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

/// Lowest opacity reached halfway through a flip.
const FLIP_MIN_OPACITY: f32 = 0.3;

/// Message emitted when a flip completes and the checked state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeToggled {
    /// The new checked state
    pub checked: bool,
}

/// Animation state of a badge.
#[derive(Debug, Clone, Default)]
pub enum BadgeState {
    /// Showing the resting look of the current checked state.
    #[default]
    Resting,
    /// Flipping toward the opposite state.
    Animating {
        /// Handle to the running flip
        handle: SequenceHandle,
    },
}

impl BadgeState {
    /// Whether a flip is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        matches!(self, Self::Animating { .. })
    }
}

/// Two-state badge with a flip animation.
#[derive(Debug, Clone)]
pub struct ToggleBadge {
    checked: bool,
    state: BadgeState,
    checked_image: Option<Bitmap>,
    unchecked_image: Option<Bitmap>,
    checked_color: Color,
    unchecked_color: Color,
    /// Disc color; the flip's color track is the only thing that changes it mid-flight
    badge_color: Color,
    displayed_image: Option<Bitmap>,
    visual: Visual,
    duration: Duration,
    needs_redraw: bool,
    test_id_value: Option<String>,
    bounds: Rect,
}

impl Default for ToggleBadge {
    fn default() -> Self {
        Self {
            checked: false,
            state: BadgeState::Resting,
            checked_image: None,
            unchecked_image: None,
            checked_color: Color::TRANSPARENT,
            unchecked_color: Color::TRANSPARENT,
            badge_color: Color::TRANSPARENT,
            displayed_image: None,
            visual: Visual::IDENTITY,
            duration: DEFAULT_DURATION,
            needs_redraw: false,
            test_id_value: None,
            bounds: Rect::default(),
        }
    }
}

impl ToggleBadge {
    /// Create an unchecked badge with no images and transparent colors.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a badge from configuration, resolving image names in `store`.
    ///
    /// Unknown image names resolve to no image.
    #[must_use]
    pub fn from_config(config: &ToggleBadgeConfig, store: &BitmapStore) -> Self {
        Self::new()
            .checked_image(store.resolve(config.checked_image.as_deref()))
            .unchecked_image(store.resolve(config.unchecked_image.as_deref()))
            .checked_color(config.checked_color)
            .unchecked_color(config.unchecked_color)
            .duration(config.duration())
            .checked(config.checked)
    }

    /// Set the image shown while checked.
    #[must_use]
    pub fn checked_image(mut self, image: impl Into<Option<Bitmap>>) -> Self {
        self.checked_image = image.into();
        self.settle();
        self
    }

    /// Set the image shown while unchecked.
    #[must_use]
    pub fn unchecked_image(mut self, image: impl Into<Option<Bitmap>>) -> Self {
        self.unchecked_image = image.into();
        self.settle();
        self
    }

    /// Set the disc color while checked.
    #[must_use]
    pub fn checked_color(mut self, color: Color) -> Self {
        self.checked_color = color;
        self.settle();
        self
    }

    /// Set the disc color while unchecked.
    #[must_use]
    pub fn unchecked_color(mut self, color: Color) -> Self {
        self.unchecked_color = color;
        self.settle();
        self
    }

    /// Set the initial checked state (no animation).
    #[must_use]
    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self.settle();
        self
    }

    /// Set the total flip duration.
    #[must_use]
    pub const fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Get the checked state. A running flip does not change it until it completes.
    #[must_use]
    pub const fn is_checked(&self) -> bool {
        self.checked
    }

    /// Whether a flip is running.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Current animation state.
    #[must_use]
    pub const fn state(&self) -> &BadgeState {
        &self.state
    }

    /// Current disc color.
    #[must_use]
    pub const fn badge_color(&self) -> Color {
        self.badge_color
    }

    /// Bitmap currently drawn, if any.
    #[must_use]
    pub const fn displayed_image(&self) -> Option<Bitmap> {
        self.displayed_image
    }

    /// Total flip duration.
    #[must_use]
    pub const fn get_duration(&self) -> Duration {
        self.duration
    }

    /// Resting disc color for a checked state.
    #[must_use]
    pub const fn resting_color(&self, checked: bool) -> Color {
        if checked {
            self.checked_color
        } else {
            self.unchecked_color
        }
    }

    /// Image for a checked state.
    #[must_use]
    pub const fn image_for(&self, checked: bool) -> Option<Bitmap> {
        if checked {
            self.checked_image
        } else {
            self.unchecked_image
        }
    }

    /// Set the checked state immediately, showing its resting look.
    ///
    /// A running flip is abandoned without completing.
    pub fn set_checked(&mut self, checked: bool) {
        self.abandon_flip();
        self.checked = checked;
        self.settle();
    }

    /// Return to unchecked and idle, cancelling any running flip.
    ///
    /// Call when the badge is recycled or leaves the screen.
    pub fn reset(&mut self) {
        self.abandon_flip();
        self.checked = false;
        self.settle();
        tracing::debug!("badge reset");
    }

    /// Start a flip toward the opposite state.
    ///
    /// Returns `false` and does nothing while a flip is already running.
    pub fn toggle(&mut self, animator: &mut dyn Animator) -> bool {
        if self.is_animating() {
            tracing::trace!("toggle ignored, flip in progress");
            return false;
        }
        let handle = animator.run_sequence(self.flip_tracks());
        tracing::debug!(
            sequence = handle.id().0,
            from = self.checked,
            "badge flip started"
        );
        self.state = BadgeState::Animating { handle };
        true
    }

    /// Tracks making up one flip from the current state.
    ///
    /// Rotation runs 0°→90° accelerating, then 270°→360° decelerating, each
    /// over half the duration. Opacity dips to 30% and back. The color blends
    /// linearly from the current resting color to the opposite one.
    #[must_use]
    pub fn flip_tracks(&self) -> Vec<Track> {
        let half = self.duration / 2;
        let rotation = Track::new(Property::Rotation)
            .then(Segment::scalar(0.0, 90.0, half, Easing::EaseIn))
            .then(Segment::scalar(270.0, 360.0, half, Easing::EaseOut));
        let opacity = Track::keyframes(
            Property::Opacity,
            &[1.0, FLIP_MIN_OPACITY, 1.0],
            self.duration,
            Easing::Linear,
        );
        let color = Track::new(Property::BackgroundColor).then(Segment::color(
            self.resting_color(self.checked),
            self.resting_color(!self.checked),
            self.duration,
            Easing::Linear,
        ));
        vec![rotation, opacity, color]
    }

    fn settle(&mut self) {
        self.badge_color = self.resting_color(self.checked);
        self.displayed_image = self.image_for(self.checked);
        self.visual = Visual::IDENTITY;
        self.needs_redraw = true;
    }

    fn abandon_flip(&mut self) {
        if let BadgeState::Animating { handle } = std::mem::take(&mut self.state) {
            handle.cancel();
            tracing::debug!(sequence = handle.id().0, "badge flip cancelled");
        }
    }

    fn complete_flip(&mut self) -> BadgeToggled {
        self.state = BadgeState::Resting;
        self.checked = !self.checked;
        self.settle();
        tracing::debug!(checked = self.checked, "badge flip complete");
        BadgeToggled {
            checked: self.checked,
        }
    }
}

impl Widget for ToggleBadge {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let preferred = [self.checked_image, self.unchecked_image]
            .into_iter()
            .flatten()
            .fold(Size::ZERO, |acc, bitmap| acc.max(&bitmap.size()));
        constraints.constrain(preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let Some(bitmap) = self.displayed_image else {
            return;
        };
        let size = self.bounds.size();
        if size.is_empty() {
            return;
        }

        let origin = self.bounds.origin();
        let radius = size.min_side() / 2.0;
        let center = origin + Point::new(size.width / 2.0, size.height / 2.0);
        canvas.fill_circle(center, radius, self.badge_color);

        let image = bitmap.size();
        let offset = Point::new(
            (size.width - image.width) / 2.0,
            (size.height - image.height) / 2.0,
        );
        canvas.draw_bitmap(bitmap, origin + offset);
    }

    fn event(&mut self, event: &Event, animator: &mut dyn Animator) -> Option<Message> {
        let point = event.activation_point()?;
        if self.bounds.contains_point(&point) {
            self.toggle(animator);
        }
        None
    }

    fn animate(&mut self, event: &TimelineEvent) -> Option<Message> {
        let BadgeState::Animating { handle } = &self.state else {
            return None;
        };
        if event.sequence() != handle.id() {
            return None;
        }

        match *event {
            TimelineEvent::Update {
                property, value, ..
            } => match property {
                Property::Rotation => {
                    if let Some(degrees) = value.as_scalar() {
                        self.visual.rotation = degrees;
                    }
                }
                Property::Opacity => {
                    if let Some(alpha) = value.as_scalar() {
                        self.visual.opacity = alpha;
                    }
                }
                Property::BackgroundColor => {
                    if let Some(color) = value.as_color() {
                        self.badge_color = color;
                        self.needs_redraw = true;
                    }
                }
            },
            // Edge-on: show the image of the state being flipped to.
            TimelineEvent::SegmentEnd {
                property: Property::Rotation,
                segment: 0,
                ..
            } => {
                self.displayed_image = self.image_for(!self.checked);
                self.needs_redraw = true;
            }
            TimelineEvent::SegmentEnd { .. } => {}
            TimelineEvent::Complete { .. } => {
                return Some(Box::new(self.complete_flip()));
            }
        }
        None
    }

    fn visual(&self) -> Visual {
        self.visual
    }

    fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
