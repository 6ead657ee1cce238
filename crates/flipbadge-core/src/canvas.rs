//! Canvas implementations for rendering.

use crate::bitmap::Bitmap;
use crate::draw::{DrawCommand, Transform2D};
use crate::widget::Canvas;
use crate::{Color, Point};

/// A Canvas implementation that records draw operations as `DrawCommand`s.
///
/// Commands drawn while a transform or opacity is pushed are recorded wrapped
/// in [`DrawCommand::Group`] / [`DrawCommand::Opacity`], so a recording fully
/// describes what the host would put on screen.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    transform_stack: Vec<Transform2D>,
    opacity_stack: Vec<f32>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clear all recorded commands and state stacks.
    pub fn clear(&mut self) {
        self.commands.clear();
        self.transform_stack.clear();
        self.opacity_stack.clear();
    }

    /// Get the current transform (identity if no transforms pushed).
    #[must_use]
    pub fn current_transform(&self) -> Transform2D {
        self.transform_stack
            .last()
            .copied()
            .unwrap_or_else(Transform2D::identity)
    }

    /// Get the current effective opacity (1.0 if none pushed).
    #[must_use]
    pub fn current_opacity(&self) -> f32 {
        self.opacity_stack.last().copied().unwrap_or(1.0)
    }

    /// Get the transform stack depth.
    #[must_use]
    pub fn transform_depth(&self) -> usize {
        self.transform_stack.len()
    }

    fn record(&mut self, command: DrawCommand) {
        let transform = self.current_transform();
        let command = if transform.is_identity() {
            command
        } else {
            command.with_transform(transform)
        };
        let alpha = self.current_opacity();
        let command = if alpha < 1.0 {
            command.with_opacity(alpha)
        } else {
            command
        };
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        self.record(DrawCommand::filled_circle(center, radius, color));
    }

    fn draw_bitmap(&mut self, bitmap: Bitmap, position: Point) {
        self.record(DrawCommand::bitmap(bitmap, position));
    }

    fn push_transform(&mut self, transform: Transform2D) {
        // Nested transforms compose: the inner one applies first.
        let combined = transform.then(&self.current_transform());
        self.transform_stack.push(combined);
    }

    fn pop_transform(&mut self) {
        self.transform_stack.pop();
    }

    fn push_opacity(&mut self, alpha: f32) {
        let combined = self.current_opacity() * alpha.clamp(0.0, 1.0);
        self.opacity_stack.push(combined);
    }

    fn pop_opacity(&mut self) {
        self.opacity_stack.pop();
    }
}
