//! Animation timeline with easing, multi-segment tracks and cancellable
//! sequences.
//!
//! A sequence is a set of [`Track`]s started together. Each track animates
//! one [`Property`] through ordered [`Segment`]s. The host owns a
//! [`Timeline`], advances it once per frame, and routes the returned
//! [`TimelineEvent`]s to widgets. Widgets only see the narrow [`Animator`]
//! interface for starting sequences.
//!
//! # Cancellation
//!
//! [`SequenceHandle::cancel`] takes effect immediately: the timeline drops a
//! cancelled sequence before emitting anything else for it.

use crate::Color;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

// =============================================================================
// Easing
// =============================================================================

/// Standard easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Quadratic ease in (accelerating, `t²`)
    EaseIn,
    /// Quadratic ease out (decelerating, `1 - (1 - t)²`)
    EaseOut,
    /// Quadratic ease in and out
    EaseInOut,
    /// Cubic ease in
    CubicIn,
    /// Cubic ease out
    CubicOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
            Self::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0f64).mul_add(t, 2.0).powi(2) / 2.0
                }
            }
            Self::CubicIn => t * t * t,
            Self::CubicOut => 1.0 - (1.0 - t).powi(3),
        }
    }
}

// =============================================================================
// Interpolate
// =============================================================================

/// Trait for types that can be interpolated.
pub trait Interpolate {
    /// Interpolate between two values.
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self;
}

impl Interpolate for f32 {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        (*to - *from).mul_add(t as Self, *from)
    }
}

impl Interpolate for Color {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        from.lerp(to, t as f32)
    }
}

/// A value produced by a track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum AnimatedValue {
    /// Plain number (degrees, opacity, ...)
    Scalar(f32),
    /// Color
    Color(Color),
}

impl AnimatedValue {
    /// The scalar payload, if any.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f32> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Color(_) => None,
        }
    }

    /// The color payload, if any.
    #[must_use]
    pub const fn as_color(&self) -> Option<Color> {
        match self {
            Self::Color(c) => Some(*c),
            Self::Scalar(_) => None,
        }
    }
}

impl Interpolate for AnimatedValue {
    fn interpolate(from: &Self, to: &Self, t: f64) -> Self {
        match (from, to) {
            (Self::Scalar(a), Self::Scalar(b)) => Self::Scalar(f32::interpolate(a, b, t)),
            (Self::Color(a), Self::Color(b)) => Self::Color(Color::interpolate(a, b, t)),
            // Segments are built with matching kinds; a mismatch snaps.
            _ => *to,
        }
    }
}

// =============================================================================
// Tracks
// =============================================================================

/// The widget property a track drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Property {
    /// Whole-widget rotation in degrees
    Rotation,
    /// Whole-widget opacity
    Opacity,
    /// Background fill color
    BackgroundColor,
}

/// One interpolation from `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    from: AnimatedValue,
    to: AnimatedValue,
    duration: Duration,
    easing: Easing,
}

impl Segment {
    /// Scalar segment.
    #[must_use]
    pub const fn scalar(from: f32, to: f32, duration: Duration, easing: Easing) -> Self {
        Self {
            from: AnimatedValue::Scalar(from),
            to: AnimatedValue::Scalar(to),
            duration,
            easing,
        }
    }

    /// Color segment.
    #[must_use]
    pub const fn color(from: Color, to: Color, duration: Duration, easing: Easing) -> Self {
        Self {
            from: AnimatedValue::Color(from),
            to: AnimatedValue::Color(to),
            duration,
            easing,
        }
    }

    /// Segment duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// End value.
    #[must_use]
    pub const fn end_value(&self) -> AnimatedValue {
        self.to
    }

    /// Value after `elapsed` time into this segment.
    #[must_use]
    pub fn value_at(&self, elapsed: Duration) -> AnimatedValue {
        let t = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        };
        AnimatedValue::interpolate(&self.from, &self.to, self.easing.apply(t))
    }
}

/// Ordered segments animating a single property.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    property: Property,
    segments: Vec<Segment>,
}

impl Track {
    /// Create an empty track.
    #[must_use]
    pub const fn new(property: Property) -> Self {
        Self {
            property,
            segments: Vec::new(),
        }
    }

    /// Append a segment (builder).
    #[must_use]
    pub fn then(mut self, segment: Segment) -> Self {
        self.segments.push(segment);
        self
    }

    /// Evenly spaced scalar keyframes over `duration`.
    ///
    /// `[1.0, 0.3, 1.0]` over 200ms yields two 100ms segments. Fewer than two
    /// values produce an empty track.
    #[must_use]
    pub fn keyframes(property: Property, values: &[f32], duration: Duration, easing: Easing) -> Self {
        let mut track = Self::new(property);
        if values.len() < 2 {
            return track;
        }
        let step = duration / (values.len() as u32 - 1);
        for pair in values.windows(2) {
            track = track.then(Segment::scalar(pair[0], pair[1], step, easing));
        }
        track
    }

    /// Animated property.
    #[must_use]
    pub const fn property(&self) -> Property {
        self.property
    }

    /// Segments in play order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Total duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.segments.iter().map(Segment::duration).sum()
    }
}

// =============================================================================
// Sequences
// =============================================================================

/// Unique, never reused identifier of a started sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SequenceId(pub u64);

/// Owner's handle to a running sequence.
///
/// Clones share the same cancel flag.
#[derive(Debug, Clone)]
pub struct SequenceHandle {
    id: SequenceId,
    cancelled: Arc<AtomicBool>,
}

impl SequenceHandle {
    fn new(id: SequenceId) -> Self {
        Self {
            id,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Sequence identifier carried by every event of this sequence.
    #[must_use]
    pub const fn id(&self) -> SequenceId {
        self.id
    }

    /// Cancel the sequence. No further events are emitted for it.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether [`cancel`](Self::cancel) was called.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Event emitted while advancing a timeline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimelineEvent {
    /// A property took a new value this frame.
    Update {
        /// Owning sequence
        sequence: SequenceId,
        /// Animated property
        property: Property,
        /// New value
        value: AnimatedValue,
    },
    /// A segment of a track finished.
    SegmentEnd {
        /// Owning sequence
        sequence: SequenceId,
        /// Animated property
        property: Property,
        /// Index of the finished segment
        segment: usize,
    },
    /// Every track of the sequence finished.
    Complete {
        /// Finished sequence
        sequence: SequenceId,
    },
}

impl TimelineEvent {
    /// Sequence the event belongs to.
    #[must_use]
    pub const fn sequence(&self) -> SequenceId {
        match self {
            Self::Update { sequence, .. }
            | Self::SegmentEnd { sequence, .. }
            | Self::Complete { sequence } => *sequence,
        }
    }
}

/// Capability to start animation sequences.
pub trait Animator {
    /// Start all `tracks` together as one sequence.
    fn run_sequence(&mut self, tracks: Vec<Track>) -> SequenceHandle;
}

#[derive(Debug)]
struct RunningTrack {
    track: Track,
    index: usize,
    elapsed: Duration,
}

impl RunningTrack {
    const fn new(track: Track) -> Self {
        Self {
            track,
            index: 0,
            elapsed: Duration::ZERO,
        }
    }

    fn is_done(&self) -> bool {
        self.index >= self.track.segments.len()
    }

    /// Advance by `dt`, pushing events. Returns whether the track is done.
    fn advance(&mut self, dt: Duration, sequence: SequenceId, events: &mut Vec<TimelineEvent>) -> bool {
        let property = self.track.property;
        let mut remaining = dt;
        let mut crossed = false;

        while let Some(segment) = self.track.segments.get(self.index) {
            let left = segment.duration.saturating_sub(self.elapsed);
            if remaining < left {
                self.elapsed += remaining;
                break;
            }
            remaining -= left;
            events.push(TimelineEvent::Update {
                sequence,
                property,
                value: segment.to,
            });
            events.push(TimelineEvent::SegmentEnd {
                sequence,
                property,
                segment: self.index,
            });
            self.index += 1;
            self.elapsed = Duration::ZERO;
            crossed = true;
        }

        if let Some(segment) = self.track.segments.get(self.index) {
            // A segment entered exactly on this frame has not moved yet.
            if !crossed || !self.elapsed.is_zero() {
                events.push(TimelineEvent::Update {
                    sequence,
                    property,
                    value: segment.value_at(self.elapsed),
                });
            }
            false
        } else {
            true
        }
    }
}

#[derive(Debug)]
struct RunningSequence {
    handle: SequenceHandle,
    tracks: Vec<RunningTrack>,
}

/// Frame-driven animation engine.
#[derive(Debug)]
pub struct Timeline {
    sequences: Vec<RunningSequence>,
    next_id: u64,
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

impl Timeline {
    /// Create an idle timeline.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sequences: Vec::new(),
            next_id: 1,
        }
    }

    /// Number of live sequences (cancelled ones count until the next advance).
    #[must_use]
    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    /// Whether no sequence is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    /// Whether nothing would be emitted by the next advance.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.sequences.iter().all(|s| s.handle.is_cancelled())
    }

    /// Whether `handle`'s sequence is still running.
    #[must_use]
    pub fn is_running(&self, handle: &SequenceHandle) -> bool {
        !handle.is_cancelled() && self.sequences.iter().any(|s| s.handle.id == handle.id)
    }

    /// Cancel and drop a sequence right away.
    pub fn cancel(&mut self, handle: &SequenceHandle) {
        handle.cancel();
        self.purge_cancelled();
    }

    /// Advance every live sequence by `dt` and collect the resulting events.
    ///
    /// Within a frame, events are ordered by sequence start, then track
    /// order; a sequence's `Complete` follows all of its track events.
    pub fn advance(&mut self, dt: Duration) -> Vec<TimelineEvent> {
        self.purge_cancelled();

        let mut events = Vec::new();
        self.sequences.retain_mut(|running| {
            let id = running.handle.id;
            let mut all_done = true;
            for track in &mut running.tracks {
                if !track.is_done() && !track.advance(dt, id, &mut events) {
                    all_done = false;
                }
            }
            if all_done {
                tracing::debug!(sequence = id.0, "sequence complete");
                events.push(TimelineEvent::Complete { sequence: id });
            }
            !all_done
        });
        events
    }

    fn purge_cancelled(&mut self) {
        self.sequences.retain(|s| {
            let cancelled = s.handle.is_cancelled();
            if cancelled {
                tracing::debug!(sequence = s.handle.id.0, "sequence cancelled");
            }
            !cancelled
        });
    }
}

impl Animator for Timeline {
    fn run_sequence(&mut self, tracks: Vec<Track>) -> SequenceHandle {
        let handle = SequenceHandle::new(SequenceId(self.next_id));
        self.next_id += 1;
        tracing::debug!(
            sequence = handle.id.0,
            tracks = tracks.len(),
            "sequence started"
        );
        self.sequences.push(RunningSequence {
            handle: handle.clone(),
            tracks: tracks.into_iter().map(RunningTrack::new).collect(),
        });
        handle
    }
}

// =============================================================================
// Tests
// =============================================================================
