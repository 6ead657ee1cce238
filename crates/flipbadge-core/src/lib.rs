//! Core types and traits for the flipbadge toggle widget.
//!
//! This crate provides the foundation the widget is built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color representation: [`Color`] with packed ARGB conversion
//! - Layout constraints: [`Constraints`]
//! - Input events: [`Event`]
//! - Painting: [`Canvas`], [`RecordingCanvas`], [`DrawCommand`]
//! - Animation: [`Timeline`], [`Track`], [`Easing`]

pub mod animation;
mod bitmap;
mod canvas;
pub mod color;
mod constraints;
pub mod draw;
mod event;
mod geometry;
pub mod widget;

pub use animation::{
    AnimatedValue, Animator, Easing, Interpolate, Property, Segment, SequenceHandle, SequenceId,
    Timeline, TimelineEvent, Track,
};
pub use bitmap::{Bitmap, BitmapId, BitmapStore};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::{DrawCommand, Paint, Transform2D};
pub use event::{Event, MouseButton, TouchId};
pub use geometry::{Point, Rect, Size};
pub use widget::{Canvas, LayoutResult, Message, TypeId, Visual, Widget};
