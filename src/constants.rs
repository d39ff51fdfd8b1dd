//! Crate-wide constants.
//!
//! Centralizes timing values, display strings, and default styling so the
//! rest of the crate never carries magic numbers.

// ============================================================================
// Timing
// ============================================================================

/// Delay before the map's double-click zoom is re-enabled after a session
/// ends. The delay must outlast the double-click event that triggered the
/// teardown, otherwise the second click of the gesture would still zoom.
pub const DOUBLE_CLICK_ZOOM_RESTORE_DELAY_MS: u64 = 200;

// ============================================================================
// Distance formatting
// ============================================================================

/// Distances at or above this many meters are shown in kilometers.
pub const KILOMETER_THRESHOLD_METERS: f64 = 1000.0;

// ============================================================================
// Display strings
// ============================================================================

/// Label text for the first committed point.
pub const MSG_START_POINT: &str = "start point";

/// Preview label text before any point has been committed.
pub const MSG_PICK_START: &str = "click to choose start point";

/// Instruction line shown under the live distance readout.
pub const MSG_CONTINUE: &str = "click to continue, double-click or right-click to finish";

// ============================================================================
// Default styling
// ============================================================================

/// Stroke color of segments between committed points.
pub const DEFAULT_COMMITTED_STROKE_COLOR: &str = "#00FF00";

/// Stroke color of the dashed cursor-preview segment.
pub const DEFAULT_PREVIEW_STROKE_COLOR: &str = "#FF0000";

/// Stroke weight for both committed and preview segments.
pub const DEFAULT_STROKE_WEIGHT: f32 = 3.0;

/// Pixel offset of labels and annotations from their anchor point,
/// (right, down). Keeps text clear of the marker icon.
pub const DEFAULT_LABEL_OFFSET: (i32, i32) = (15, 0);
