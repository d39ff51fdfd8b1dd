//! Distance and label text formatting.

use crate::constants::{KILOMETER_THRESHOLD_METERS, MSG_CONTINUE};

/// Format a distance in meters per the display rule: integer meters with an
/// `m` suffix below one kilometer, otherwise kilometers with three decimals
/// and a `km` suffix. Exactly 1000 m is "1.000km".
pub fn format_distance(meters: f64) -> String {
    if meters < KILOMETER_THRESHOLD_METERS {
        format!("{meters:.0}m")
    } else {
        format!("{:.3}km", meters / 1000.0)
    }
}

/// The two-line preview label: live running total plus the continue/finish
/// instruction.
pub fn preview_text(total_meters: f64) -> String {
    format!("current {}\n{}", format_distance(total_meters), MSG_CONTINUE)
}
