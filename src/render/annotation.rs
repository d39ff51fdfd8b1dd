//! The deletable summary overlay left behind by a completed measurement.

use crate::map::{Drawable, OverlaySurface};
use crate::types::GeoPoint;

/// Replaces the final committed point's label once a session with two or
/// more points ends. Carries the cumulative-distance string and a delete
/// affordance; activating the affordance tears down the whole path.
pub struct Annotation {
    position: GeoPoint,
    text: String,
    offset: (i32, i32),
    on_delete: Option<Box<dyn FnMut()>>,
}

impl Annotation {
    pub fn new(position: GeoPoint, text: impl Into<String>, offset: (i32, i32)) -> Self {
        Self {
            position,
            text: text.into(),
            offset,
            on_delete: None,
        }
    }

    /// Install the deletion callback. Handed to the host surface during
    /// `construct`, which is the only moment the affordance can be wired.
    pub fn set_on_delete(&mut self, callback: Box<dyn FnMut()>) {
        self.on_delete = Some(callback);
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Drawable for Annotation {
    fn construct(&mut self, surface: &mut dyn OverlaySurface) {
        surface.set_anchor(self.position, self.offset);
        surface.set_text(&self.text);
        if let Some(callback) = self.on_delete.take() {
            surface.set_on_delete(callback);
        }
    }

    fn draw(&mut self, surface: &mut dyn OverlaySurface) {
        surface.set_anchor(self.position, self.offset);
    }

    fn destroy(&mut self, _surface: &mut dyn OverlaySurface) {}
}
