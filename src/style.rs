//! Measurement styling.
//!
//! The defaults reproduce the stock look: solid green segments between
//! committed points, a dashed red preview segment following the cursor, and
//! labels offset 15 px to the right of their anchor. Host applications can
//! persist a customized style; both types are serde round-trippable.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_COMMITTED_STROKE_COLOR, DEFAULT_LABEL_OFFSET, DEFAULT_PREVIEW_STROKE_COLOR,
    DEFAULT_STROKE_WEIGHT,
};
use crate::error::{MeasureError, MeasureResult};

/// Stroke appearance of one polyline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    /// `#RRGGBB` hex color
    pub color: String,
    /// Line width in pixels
    pub weight: f32,
    /// Dashed instead of solid
    pub dashed: bool,
}

impl StrokeStyle {
    fn validate(&self) -> MeasureResult<()> {
        if !is_hex_color(&self.color) {
            return Err(MeasureError::InvalidStrokeColor(self.color.clone()));
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(MeasureError::InvalidStrokeWeight(self.weight));
        }
        Ok(())
    }
}

/// Visual configuration for one measurement tool instance.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeasureStyle {
    /// Segments between committed points
    pub committed_stroke: StrokeStyle,
    /// The cursor-following preview segment
    pub preview_stroke: StrokeStyle,
    /// Pixel offset of labels and annotations from their anchor, (right, down)
    pub label_offset: (i32, i32),
}

impl Default for MeasureStyle {
    fn default() -> Self {
        Self {
            committed_stroke: StrokeStyle {
                color: DEFAULT_COMMITTED_STROKE_COLOR.to_string(),
                weight: DEFAULT_STROKE_WEIGHT,
                dashed: false,
            },
            preview_stroke: StrokeStyle {
                color: DEFAULT_PREVIEW_STROKE_COLOR.to_string(),
                weight: DEFAULT_STROKE_WEIGHT,
                dashed: true,
            },
            label_offset: DEFAULT_LABEL_OFFSET,
        }
    }
}

impl MeasureStyle {
    /// Check every field. Called once at tool construction so a bad style
    /// fails before any session can leave orphaned display objects behind.
    pub fn validate(&self) -> MeasureResult<()> {
        self.committed_stroke.validate()?;
        self.preview_stroke.validate()?;
        Ok(())
    }
}

fn is_hex_color(s: &str) -> bool {
    let Some(digits) = s.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}
