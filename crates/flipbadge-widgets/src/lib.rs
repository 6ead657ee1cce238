//! Widget implementations for flipbadge.
//!
//! The centerpiece is [`ToggleBadge`], a two-state badge that flips between
//! its checked and unchecked look. Badges can be built in code or from a
//! [`BadgeManifest`] written in YAML or TOML.

pub mod config;
pub mod error;
pub mod toggle_badge;

pub use config::{BadgeManifest, ImageSpec, ToggleBadgeConfig};
pub use error::ConfigError;
pub use toggle_badge::{BadgeState, BadgeToggled, ToggleBadge, DEFAULT_DURATION};
