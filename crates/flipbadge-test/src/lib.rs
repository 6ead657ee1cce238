//! Testing harness for flipbadge widgets.
//!
//! The [`Harness`] owns a widget and a [`Timeline`](flipbadge_core::Timeline)
//! and plays the host's part: it lays the widget out, delivers input, advances
//! time in frames, routes timeline events, and renders [`Frame`]s through a
//! recording canvas.
//!
//! ```
//! use flipbadge_core::{BitmapStore, Color, Size};
//! use flipbadge_test::Harness;
//! use flipbadge_widgets::ToggleBadge;
//!
//! let mut store = BitmapStore::new();
//! let badge = ToggleBadge::new()
//!     .checked_image(store.insert("on", 24, 24))
//!     .unchecked_image(store.insert("off", 24, 24))
//!     .checked_color(Color::from_argb(0xFF00_FF00));
//!
//! let mut harness = Harness::new(badge, Size::new(48.0, 48.0));
//! harness.tap();
//! harness.run_until_idle(100);
//! assert!(harness.widget().is_checked());
//! ```

mod harness;

pub use harness::{Frame, Harness, DEFAULT_FRAME_INTERVAL};
