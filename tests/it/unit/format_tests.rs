//! Distance formatting against the public display rule.

use mapmeasure::constants::{MSG_CONTINUE, MSG_PICK_START, MSG_START_POINT};
use mapmeasure::render::format::{format_distance, preview_text};

#[test]
fn snapshot_distance_formatting() {
    insta::assert_snapshot!(format_distance(0.0), @"0m");
    insta::assert_snapshot!(format_distance(999.0), @"999m");
    insta::assert_snapshot!(format_distance(1113.19), @"1.113km");
    insta::assert_snapshot!(format_distance(25_500.0), @"25.500km");
}

#[test]
fn test_exact_kilometer_boundary() {
    // Exactly 1000 m is kilometers, never "1000m".
    assert_eq!(format_distance(1000.0), "1.000km");
    assert_eq!(format_distance(999.0), "999m");
}

#[test]
fn test_preview_text_layout() {
    assert_eq!(
        preview_text(420.0),
        format!("current 420m\n{MSG_CONTINUE}")
    );
    assert_eq!(
        preview_text(2226.4),
        format!("current 2.226km\n{MSG_CONTINUE}")
    );
}

#[test]
fn snapshot_instruction_strings() {
    insta::assert_snapshot!(MSG_START_POINT, @"start point");
    insta::assert_snapshot!(MSG_PICK_START, @"click to choose start point");
    insta::assert_snapshot!(MSG_CONTINUE, @"click to continue, double-click or right-click to finish");
}
