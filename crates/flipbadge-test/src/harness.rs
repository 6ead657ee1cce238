//! Frame-stepping host for a single widget.

use flipbadge_core::{
    Bitmap, Canvas, Color, DrawCommand, Event, Message, MouseButton, Point, RecordingCanvas, Rect,
    Size, Timeline, Visual, Widget,
};
use flipbadge_widgets::ToggleBadge;
use serde::Serialize;
use std::any::Any;
use std::time::Duration;

/// Frame interval of a 60 Hz display, rounded down to whole milliseconds.
pub const DEFAULT_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// One rendered frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Frame {
    /// Time since the harness was created
    pub elapsed: Duration,
    /// Whole-widget rotation and opacity applied around paint
    pub visual: Visual,
    /// Recorded draw commands
    pub commands: Vec<DrawCommand>,
}

impl Frame {
    /// Whether nothing was drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Fill color of the first circle drawn.
    #[must_use]
    pub fn circle_color(&self) -> Option<Color> {
        self.commands.iter().find_map(|c| match c.primitive() {
            DrawCommand::Circle { paint, .. } => Some(paint.color),
            _ => None,
        })
    }

    /// First bitmap drawn.
    #[must_use]
    pub fn bitmap(&self) -> Option<Bitmap> {
        self.commands.iter().find_map(|c| match c.primitive() {
            DrawCommand::Bitmap { bitmap, .. } => Some(*bitmap),
            _ => None,
        })
    }
}

/// Test harness hosting one widget and its animation timeline.
pub struct Harness<W: Widget> {
    widget: W,
    timeline: Timeline,
    bounds: Rect,
    frame_interval: Duration,
    elapsed: Duration,
    messages: Vec<Message>,
    redraws: usize,
}

impl<W: Widget> Harness<W> {
    /// Create a harness laying `widget` out at the origin with `size`.
    pub fn new(mut widget: W, size: Size) -> Self {
        let bounds = Rect::from_size(size);
        widget.layout(bounds);
        // Construction-time redraw requests are not counted.
        widget.take_redraw();
        Self {
            widget,
            timeline: Timeline::new(),
            bounds,
            frame_interval: DEFAULT_FRAME_INTERVAL,
            elapsed: Duration::ZERO,
            messages: Vec::new(),
            redraws: 0,
        }
    }

    /// Set the frame interval used by [`step`](Self::step).
    #[must_use]
    pub fn frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    // === Input ===

    /// Click the center of the widget.
    pub fn tap(&mut self) -> &mut Self {
        self.tap_at(self.bounds.center())
    }

    /// Click at `position`.
    pub fn tap_at(&mut self, position: Point) -> &mut Self {
        self.dispatch(&Event::MouseMove { position });
        self.dispatch(&Event::MouseDown {
            position,
            button: MouseButton::Left,
        });
        self.dispatch(&Event::MouseUp {
            position,
            button: MouseButton::Left,
        })
    }

    /// Deliver one input event.
    pub fn dispatch(&mut self, event: &Event) -> &mut Self {
        if let Some(message) = self.widget.event(event, &mut self.timeline) {
            self.messages.push(message);
        }
        self.collect_redraw();
        self
    }

    // === Time ===

    /// Advance time by `dt`, routing every timeline event to the widget.
    pub fn advance(&mut self, dt: Duration) -> &mut Self {
        self.elapsed += dt;
        for event in self.timeline.advance(dt) {
            if let Some(message) = self.widget.animate(&event) {
                self.messages.push(message);
            }
        }
        self.collect_redraw();
        self
    }

    /// Advance one frame.
    pub fn step(&mut self) -> &mut Self {
        self.advance(self.frame_interval)
    }

    /// Step frames until no animation is running, returning the frame count.
    pub fn run_until_idle(&mut self, max_frames: usize) -> usize {
        let mut frames = 0;
        while !self.timeline.is_idle() && frames < max_frames {
            self.step();
            frames += 1;
        }
        if !self.timeline.is_idle() {
            tracing::warn!(max_frames, "animation still running after frame limit");
        }
        frames
    }

    // === Rendering ===

    /// Paint the widget the way a host would, with its visual applied.
    #[must_use]
    pub fn render(&self) -> Frame {
        let visual = self.widget.visual();
        let mut canvas = RecordingCanvas::new();
        canvas.push_transform(visual.transform(self.bounds));
        canvas.push_opacity(visual.opacity);
        self.widget.paint(&mut canvas);
        canvas.pop_opacity();
        canvas.pop_transform();
        Frame {
            elapsed: self.elapsed,
            visual,
            commands: canvas.take_commands(),
        }
    }

    // === Inspection ===

    /// Take every message emitted so far.
    pub fn drain_messages(&mut self) -> Vec<Message> {
        std::mem::take(&mut self.messages)
    }

    /// Take the messages of type `T`, dropping all others.
    pub fn drain_messages_of<T: Any>(&mut self) -> Vec<T> {
        self.drain_messages()
            .into_iter()
            .filter_map(|m| m.downcast::<T>().ok().map(|m| *m))
            .collect()
    }

    /// Number of input or timeline batches after which the widget asked to be redrawn.
    #[must_use]
    pub const fn redraw_count(&self) -> usize {
        self.redraws
    }

    /// Time advanced so far.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Laid-out bounds.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// The hosted widget.
    #[must_use]
    pub const fn widget(&self) -> &W {
        &self.widget
    }

    /// The hosted widget, mutably.
    ///
    /// Redraw requests made through this reference are counted on the next
    /// input or time step.
    pub fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    /// The animation timeline.
    #[must_use]
    pub const fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    fn collect_redraw(&mut self) {
        if self.widget.take_redraw() {
            self.redraws += 1;
        }
    }
}

impl Harness<ToggleBadge> {
    /// Reset the badge as a host does when recycling it.
    pub fn reset_widget(&mut self) -> &mut Self {
        self.widget.reset();
        self.collect_redraw();
        self
    }

    /// Tap and run the flip to completion, returning the frames rendered
    /// along the way (including the final resting frame).
    pub fn flip(&mut self, max_frames: usize) -> Vec<Frame> {
        self.tap();
        let mut frames = vec![self.render()];
        for _ in 0..max_frames {
            if self.timeline.is_idle() {
                break;
            }
            self.step();
            frames.push(self.render());
        }
        frames
    }
}
