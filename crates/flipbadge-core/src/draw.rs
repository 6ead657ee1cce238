//! Draw commands produced by painting.
//!
//! All rendering reduces to these primitives.

use crate::bitmap::Bitmap;
use crate::{Color, Point};
use serde::{Deserialize, Serialize};

/// Fill paint for shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paint {
    /// Fill color
    pub color: Color,
    /// Whether edges are anti-aliased
    pub anti_alias: bool,
}

impl Paint {
    /// Anti-aliased fill with `color`.
    #[must_use]
    pub const fn fill(color: Color) -> Self {
        Self {
            color,
            anti_alias: true,
        }
    }
}

/// 2D transformation matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    /// Matrix elements [a, b, c, d, e, f]
    /// | a c e |
    /// | b d f |
    /// | 0 0 1 |
    pub matrix: [f32; 6],
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    /// Identity transformation.
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
        }
    }

    /// Create a translation transform.
    #[must_use]
    pub const fn translate(x: f32, y: f32) -> Self {
        Self {
            matrix: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Create a rotation transform (radians, clockwise in screen space).
    #[must_use]
    pub fn rotate(angle: f32) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self {
            matrix: [cos, sin, -sin, cos, 0.0, 0.0],
        }
    }

    /// Rotation by `degrees` around `pivot`.
    #[must_use]
    pub fn rotate_about(degrees: f32, pivot: Point) -> Self {
        Self::translate(-pivot.x, -pivot.y)
            .then(&Self::rotate(degrees.to_radians()))
            .then(&Self::translate(pivot.x, pivot.y))
    }

    /// Chain transforms: first apply self, then apply other.
    ///
    /// For point p: `a.then(b).apply(p)` == `b.apply(a.apply(p))`
    #[must_use]
    pub fn then(&self, other: &Self) -> Self {
        let a = other.matrix;
        let b = self.matrix;
        Self {
            matrix: [
                a[0].mul_add(b[0], a[2] * b[1]),
                a[1].mul_add(b[0], a[3] * b[1]),
                a[0].mul_add(b[2], a[2] * b[3]),
                a[1].mul_add(b[2], a[3] * b[3]),
                a[0].mul_add(b[4], a[2].mul_add(b[5], a[4])),
                a[1].mul_add(b[4], a[3].mul_add(b[5], a[5])),
            ],
        }
    }

    /// Transform a point.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let m = self.matrix;
        Point::new(
            m[0].mul_add(point.x, m[2].mul_add(point.y, m[4])),
            m[1].mul_add(point.x, m[3].mul_add(point.y, m[5])),
        )
    }

    /// Whether this is the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}

/// Drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled circle
    Circle {
        /// Center point
        center: Point,
        /// Radius
        radius: f32,
        /// Fill paint
        paint: Paint,
    },

    /// Bitmap drawn unscaled with its top-left corner at `position`
    Bitmap {
        /// Bitmap handle
        bitmap: Bitmap,
        /// Top-left corner
        position: Point,
    },

    /// Group of commands with transform
    Group {
        /// Child commands
        children: Vec<DrawCommand>,
        /// Transform to apply
        transform: Transform2D,
    },

    /// Apply opacity
    Opacity {
        /// Alpha value (0.0 - 1.0)
        alpha: f32,
        /// Child command
        child: Box<DrawCommand>,
    },
}

impl DrawCommand {
    /// Create a filled, anti-aliased circle.
    #[must_use]
    pub const fn filled_circle(center: Point, radius: f32, color: Color) -> Self {
        Self::Circle {
            center,
            radius,
            paint: Paint::fill(color),
        }
    }

    /// Create a bitmap draw.
    #[must_use]
    pub const fn bitmap(bitmap: Bitmap, position: Point) -> Self {
        Self::Bitmap { bitmap, position }
    }

    /// Wrap in a group with transform.
    #[must_use]
    pub fn with_transform(self, transform: Transform2D) -> Self {
        Self::Group {
            children: vec![self],
            transform,
        }
    }

    /// Wrap with opacity.
    #[must_use]
    pub fn with_opacity(self, alpha: f32) -> Self {
        Self::Opacity {
            alpha,
            child: Box::new(self),
        }
    }

    /// The innermost primitive, skipping group and opacity wrappers.
    ///
    /// Groups with more than one child have no single primitive and return
    /// themselves.
    #[must_use]
    pub fn primitive(&self) -> &Self {
        match self {
            Self::Opacity { child, .. } => child.primitive(),
            Self::Group { children, .. } if children.len() == 1 => children[0].primitive(),
            _ => self,
        }
    }
}
