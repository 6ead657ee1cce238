//! Integration tests for flipbadge-core.
//!
//! These tests verify the public API works correctly end-to-end.

use flipbadge_core::{
    Animator, BitmapStore, Canvas, Color, Constraints, DrawCommand, Easing, Event, Point,
    Property, RecordingCanvas, Rect, Segment, Size, Timeline, TimelineEvent, Track, Visual,
};
use std::time::Duration;

// =============================================================================
// Color Integration Tests
// =============================================================================

#[test]
fn test_color_argb_hex_roundtrip() {
    let original = Color::from_argb(0xFF33_66CC);
    let parsed = Color::from_argb_hex(&original.to_argb_hex()).expect("valid hex");
    assert_eq!(parsed.to_argb(), 0xFF33_66CC);
}

#[test]
fn test_color_lerp_red_to_green() {
    let red = Color::from_argb(0xFFFF_0000);
    let green = Color::from_argb(0xFF00_FF00);

    let steps: Vec<Color> = (0..=10).map(|i| red.lerp(&green, i as f32 / 10.0)).collect();
    assert_eq!(steps[0], red);
    assert_eq!(steps[10].to_argb(), green.to_argb());

    let mid = &steps[5];
    assert!(mid.r > 0.4 && mid.r < 0.6);
    assert!(mid.g > 0.4 && mid.g < 0.6);
}

// =============================================================================
// Geometry / Layout Integration Tests
// =============================================================================

#[test]
fn test_constraints_and_rect_center() {
    let size = Constraints::loose(Size::new(40.0, 40.0)).constrain(Size::new(48.0, 24.0));
    assert_eq!(size, Size::new(40.0, 24.0));

    let rect = Rect::new(8.0, 8.0, size.width, size.height);
    assert_eq!(rect.center(), Point::new(28.0, 20.0));
    assert!(rect.contains_point(&Point::new(10.0, 10.0)));
}

#[test]
fn test_click_activation_point() {
    let event = Event::click(Point::new(3.0, 4.0));
    assert_eq!(event.activation_point(), Some(Point::new(3.0, 4.0)));
}

// =============================================================================
// Canvas Integration Tests
// =============================================================================

#[test]
fn test_visual_applied_around_paint() {
    let mut store = BitmapStore::new();
    let icon = store.insert("icon", 16, 16);
    let bounds = Rect::new(0.0, 0.0, 48.0, 48.0);
    let visual = Visual {
        rotation: 90.0,
        opacity: 0.3,
    };

    let mut canvas = RecordingCanvas::new();
    canvas.push_transform(visual.transform(bounds));
    canvas.push_opacity(visual.opacity);
    canvas.fill_circle(bounds.center(), 24.0, Color::WHITE);
    canvas.draw_bitmap(icon, Point::new(16.0, 16.0));
    canvas.pop_opacity();
    canvas.pop_transform();

    assert_eq!(canvas.command_count(), 2);
    for command in canvas.commands() {
        assert!(matches!(command, DrawCommand::Opacity { alpha, .. } if (*alpha - 0.3).abs() < 1e-6));
    }
    assert_eq!(
        canvas.commands()[1].primitive(),
        &DrawCommand::bitmap(icon, Point::new(16.0, 16.0))
    );
}

// =============================================================================
// Timeline Integration Tests
// =============================================================================

#[test]
fn test_flip_sequence_at_60fps() {
    let half = Duration::from_millis(100);
    let mut timeline = Timeline::new();
    let handle = timeline.run_sequence(vec![
        Track::new(Property::Rotation)
            .then(Segment::scalar(0.0, 90.0, half, Easing::EaseIn))
            .then(Segment::scalar(270.0, 360.0, half, Easing::EaseOut)),
        Track::keyframes(
            Property::Opacity,
            &[1.0, 0.3, 1.0],
            Duration::from_millis(200),
            Easing::Linear,
        ),
    ]);

    let mut events = Vec::new();
    let mut frames = 0;
    while !timeline.is_empty() {
        events.extend(timeline.advance(Duration::from_millis(16)));
        frames += 1;
        assert!(frames < 100, "sequence never completed");
    }
    assert_eq!(frames, 13);

    let rotations: Vec<f32> = events
        .iter()
        .filter_map(|e| match e {
            TimelineEvent::Update {
                property: Property::Rotation,
                value,
                ..
            } => value.as_scalar(),
            _ => None,
        })
        .collect();
    // Rotation only ever sits in [0, 90] or [270, 360].
    assert!(rotations
        .iter()
        .all(|r| (0.0..=90.0).contains(r) || (270.0..=360.0).contains(r)));
    assert_eq!(rotations.last(), Some(&360.0));
    assert_eq!(
        events.last(),
        Some(&TimelineEvent::Complete {
            sequence: handle.id()
        })
    );
}
