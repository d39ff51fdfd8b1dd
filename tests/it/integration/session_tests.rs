//! Full measurement session walkthroughs against the fake map host.

use crate::helpers::*;
use mapmeasure::map::CursorStyle;

/// A=(0,0), B=(0,0.01°), C=(0,0.02°): consecutive equator points ~1113 m
/// apart on the fake map's sphere.
fn abc() -> (mapmeasure::GeoPoint, mapmeasure::GeoPoint, mapmeasure::GeoPoint) {
    (point(0.0, 0.0), point(0.0, 0.01), point(0.0, 0.02))
}

#[test]
fn test_start_then_immediate_end_leaves_nothing() {
    init_tracing();
    let map = FakeMap::new();
    let mut tool = new_tool(&map);

    tool.start();
    tool.end();

    assert_nothing_alive(&map);
    assert_eq!(map.active_listeners(), 0);
    assert_eq!(map.cursor(), CursorStyle::Default);
}

#[test]
fn test_full_measurement_walkthrough() {
    init_tracing();
    let map = FakeMap::new();
    let mut tool = new_tool(&map);
    let (a, b, c) = abc();

    tool.start();
    assert_eq!(map.active_listeners(), 4);

    // Before any commit the preview label invites picking a start point.
    move_cursor(&map, point(0.0, 0.005));
    assert_eq!(map.cursor(), CursorStyle::Crosshair);
    assert_eq!(map.label_text(0), "click to choose start point");

    // First committed point: marker plus "start point" label, no segment.
    click(&map, a);
    assert_eq!(map.markers_alive(), 1);
    assert_eq!(map.marker_position(0), Some(a));
    assert_eq!(map.label_text(1), "start point");
    assert_eq!(map.label_offset(1), (15, 0));
    assert_eq!(map.polylines_alive(), 1); // the (hidden) preview segment only

    // Second committed point: cumulative distance label plus solid segment.
    click(&map, b);
    assert_eq!(map.markers_alive(), 2);
    assert_eq!(map.label_text(2), "1.113km");
    assert_eq!(map.polylines_alive(), 2);

    // Live readout at C counts the committed path plus the dangling leg.
    move_cursor(&map, c);
    assert_eq!(
        map.label_text(0),
        "current 2.226km\nclick to continue, double-click or right-click to finish"
    );
    assert_eq!(map.label_position(0), Some(c));
    assert_eq!(map.dashed_polylines_alive(), 1);
    assert_eq!(map.polyline_path(0), vec![b, c]);
    assert!(map.polyline_visible(0));

    // Right-click finishes: preview gone, final label promoted to an
    // annotation carrying the distance through B (C was never committed).
    right_click(&map, c);
    assert_eq!(map.active_listeners(), 0);
    assert_eq!(map.cursor(), CursorStyle::Default);
    assert_eq!(map.overlays_alive(), 1);
    assert_eq!(map.annotation_text().as_deref(), Some("1.113km"));
    assert_eq!(map.annotation_anchor(), Some((b, (15, 0))));
    assert_eq!(map.attached_label_texts(), vec!["start point".to_string()]);
    assert_eq!(map.markers_alive(), 2);
    assert_eq!(map.dashed_polylines_alive(), 0);
    assert_eq!(map.polylines_alive(), 1);

    // Deleting the annotation removes the whole remaining path.
    map.click_annotation_delete();
    assert_nothing_alive(&map);
}

#[test]
fn test_restart_with_single_point_abandons_path() {
    init_tracing();
    let map = FakeMap::new();
    let mut tool = new_tool(&map);
    let (a, b, _) = abc();

    tool.start();
    click(&map, a);
    assert_eq!(map.markers_alive(), 1);

    // start() again with exactly one committed point tears the half-built
    // path down like a user delete, then reactivates.
    tool.start();
    assert_eq!(map.markers_alive(), 0);
    assert_eq!(map.overlays_alive(), 0);
    assert_eq!(map.active_listeners(), 4);

    // The fresh session measures from scratch.
    click(&map, b);
    assert_eq!(map.markers_alive(), 1);
    assert_eq!(map.attached_label_texts().last().map(String::as_str), Some("start point"));
}

#[test]
fn test_double_start_is_noop_without_single_point() {
    let map = FakeMap::new();
    let mut tool = new_tool(&map);
    let (a, b, _) = abc();

    // Zero committed points: second start changes nothing.
    tool.start();
    tool.start();
    assert_eq!(map.active_listeners(), 4);
    assert_eq!(map.labels_alive(), 1); // a single preview label

    // Two committed points: still a no-op.
    click(&map, a);
    click(&map, b);
    tool.start();
    assert_eq!(map.active_listeners(), 4);
    assert_eq!(map.markers_alive(), 2);
}

#[test]
fn test_end_is_idempotent_and_safe_before_start() {
    let map = FakeMap::new();
    let mut tool = new_tool(&map);

    tool.end(); // never started

    tool.start();
    tool.end();
    tool.end();

    assert_nothing_alive(&map);
    assert_eq!(map.listeners_registered(), map.listeners_removed());
}

#[test]
fn test_single_point_session_keeps_no_path() {
    let map = FakeMap::new();
    let mut tool = new_tool(&map);
    let (a, _, _) = abc();

    tool.start();
    move_cursor(&map, a);
    click(&map, a);
    tool.end();

    // One committed point is not a path: marker, label, and preview are all
    // destroyed and no annotation is left behind.
    assert_nothing_alive(&map);
}

#[test]
fn test_measuring_again_after_gesture_finish() {
    let map = FakeMap::new();
    let mut tool = new_tool(&map);
    let (a, b, c) = abc();

    tool.start();
    click(&map, a);
    click(&map, b);
    right_click(&map, b);
    assert_eq!(map.overlays_alive(), 1);

    // The finished path stays on the map while a new session measures.
    tool.start();
    click(&map, c);
    assert_eq!(map.markers_alive(), 3);
    assert_eq!(map.overlays_alive(), 1);
    assert_eq!(map.active_listeners(), 4);
}
