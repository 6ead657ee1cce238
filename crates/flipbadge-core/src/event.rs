//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
}

impl Event {
    /// A left click at `position`.
    #[must_use]
    pub const fn click(position: Point) -> Self {
        Self::MouseDown {
            position,
            button: MouseButton::Left,
        }
    }

    /// Whether this event is a primary activation (left click or touch start)
    /// and where it happened.
    #[must_use]
    pub const fn activation_point(&self) -> Option<Point> {
        match self {
            Self::MouseDown {
                position,
                button: MouseButton::Left,
            }
            | Self::TouchStart { position, .. } => Some(*position),
            _ => None,
        }
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Primary button
    Left,
    /// Secondary button
    Right,
    /// Wheel button
    Middle,
}

/// Identifier of an active touch point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TouchId(pub u32);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_is_left_mouse_down() {
        let e = Event::click(Point::new(4.0, 5.0));
        assert_eq!(
            e,
            Event::MouseDown {
                position: Point::new(4.0, 5.0),
                button: MouseButton::Left,
            }
        );
    }

    #[test]
    fn test_activation_point_left_click() {
        let e = Event::click(Point::new(1.0, 2.0));
        assert_eq!(e.activation_point(), Some(Point::new(1.0, 2.0)));
    }

    #[test]
    fn test_activation_point_touch_start() {
        let e = Event::TouchStart {
            id: TouchId(7),
            position: Point::new(10.0, 10.0),
        };
        assert_eq!(e.activation_point(), Some(Point::new(10.0, 10.0)));
    }

    #[test]
    fn test_activation_point_ignores_other_events() {
        let right = Event::MouseDown {
            position: Point::ORIGIN,
            button: MouseButton::Right,
        };
        let up = Event::MouseUp {
            position: Point::ORIGIN,
            button: MouseButton::Left,
        };
        let moved = Event::MouseMove {
            position: Point::ORIGIN,
        };
        let lifted = Event::TouchEnd {
            id: TouchId(1),
            position: Point::ORIGIN,
        };
        assert_eq!(right.activation_point(), None);
        assert_eq!(up.activation_point(), None);
        assert_eq!(moved.activation_point(), None);
        assert_eq!(lifted.activation_point(), None);
    }
}
