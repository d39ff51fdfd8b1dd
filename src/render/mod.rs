//! Incremental rendering of the measurement path.
//!
//! [`RenderManager`] turns the committed point sequence plus the live
//! cursor position into map drawables:
//!
//! - one [`DisplayGroup`] per committed point, created on insert and never
//!   touched again until teardown;
//! - one [`PreviewGroup`] that follows the cursor with a dashed segment and
//!   a running-total label;
//! - at session end, the 0/1/≥2-point teardown split, including promoting
//!   the final label into a deletable [`Annotation`];
//! - the deferred re-enable of the map's double-click zoom.

pub mod annotation;
pub mod format;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use crate::constants::{DOUBLE_CLICK_ZOOM_RESTORE_DELAY_MS, MSG_PICK_START, MSG_START_POINT};
use crate::map::{CursorStyle, Label, MapApi, Marker, OverlayHandle, Polyline};
use crate::render::annotation::Annotation;
use crate::render::format::{format_distance, preview_text};
use crate::style::MeasureStyle;
use crate::types::GeoPoint;

// ============================================================================
// Display groups
// ============================================================================

/// The drawables for one committed point: a marker, a text label, and the
/// solid segment back to the previous point. The first point of a path has
/// no incoming segment.
pub struct DisplayGroup {
    position: GeoPoint,
    marker: Box<dyn Marker>,
    label: Box<dyn Label>,
    segment: Option<Box<dyn Polyline>>,
}

impl DisplayGroup {
    /// Detach every drawable in the group from the map.
    fn remove(&mut self) {
        self.marker.remove();
        self.label.remove();
        if let Some(segment) = self.segment.as_mut() {
            segment.remove();
        }
    }
}

/// The cursor-following label plus dashed segment. The segment exists from
/// session start but stays hidden until a first point is committed.
struct PreviewGroup {
    label: Box<dyn Label>,
    segment: Box<dyn Polyline>,
}

impl PreviewGroup {
    fn remove(&mut self) {
        self.label.remove();
        self.segment.remove();
    }
}

// ============================================================================
// RenderManager
// ============================================================================

/// Owns all session drawables and the teardown logic.
pub struct RenderManager {
    map: Rc<dyn MapApi>,
    style: MeasureStyle,
    /// Shared with the annotation's delete callback, which outlives the
    /// session (and this manager) when a completed path is left behind.
    groups: Rc<RefCell<Vec<DisplayGroup>>>,
    preview: Option<PreviewGroup>,
    /// Label text of the most recently committed point; becomes the
    /// annotation text when the session ends with two or more points.
    last_label_text: String,
    crosshair_applied: bool,
}

impl RenderManager {
    pub fn new(map: Rc<dyn MapApi>, style: MeasureStyle) -> Self {
        let label = map.create_label(style.label_offset);
        let mut segment = map.create_polyline(&style.preview_stroke);
        segment.set_visible(false);
        Self {
            map,
            style,
            groups: Rc::new(RefCell::new(Vec::new())),
            preview: Some(PreviewGroup { label, segment }),
            last_label_text: String::new(),
            crosshair_applied: false,
        }
    }

    /// A point was committed at `index`. Renders its group immediately;
    /// earlier groups are left untouched.
    pub fn insert_at(&mut self, points: &[GeoPoint], index: usize) {
        let point = points[index];

        let mut marker = self.map.create_marker();
        marker.set_position(point);

        let text = if index == 0 {
            MSG_START_POINT.to_string()
        } else {
            format_distance(self.map.path_length(&points[..=index]))
        };
        let mut label = self.map.create_label(self.style.label_offset);
        label.set_position(point);
        label.set_text(&text);

        let segment = (index > 0).then(|| {
            let mut segment = self.map.create_polyline(&self.style.committed_stroke);
            segment.set_path(&points[index - 1..=index]);
            segment
        });

        self.last_label_text = text;
        self.groups.borrow_mut().push(DisplayGroup {
            position: point,
            marker,
            label,
            segment,
        });
        tracing::debug!(index, ?point, "committed point rendered");
    }

    /// The cursor moved while the session is active. Moves the preview
    /// label, refreshes the dashed segment, and recomputes the readout.
    pub fn cursor_moved(&mut self, position: GeoPoint, committed: &[GeoPoint]) {
        if !self.crosshair_applied {
            self.map.set_cursor(CursorStyle::Crosshair);
            self.crosshair_applied = true;
        }
        let Some(preview) = self.preview.as_mut() else {
            return;
        };
        preview.label.set_position(position);

        match committed.last() {
            None => preview.label.set_text(MSG_PICK_START),
            Some(&last) => {
                preview.segment.set_path(&[last, position]);
                preview.segment.set_visible(true);
                let total = self.map.path_length(committed)
                    + self.map.distance_between(last, position);
                preview.label.set_text(&preview_text(total));
            }
        }
    }

    /// The session is ending. What survives depends on how many points were
    /// committed:
    ///
    /// - 0: nothing was measured; only the preview exists and is destroyed.
    /// - 1: no path existed; the sole group and the preview are destroyed.
    /// - ≥2: the preview is destroyed and the final label is replaced by a
    ///   deletable [`Annotation`] carrying the cumulative distance.
    ///
    /// In every case the double-click zoom suppressed by a finish gesture is
    /// re-enabled after [`DOUBLE_CLICK_ZOOM_RESTORE_DELAY_MS`].
    pub fn end(&mut self) {
        if let Some(mut preview) = self.preview.take() {
            preview.remove();
        }

        let committed = self.groups.borrow().len();
        match committed {
            0 => {}
            1 => {
                if let Some(mut group) = self.groups.borrow_mut().pop() {
                    group.remove();
                }
            }
            _ => self.substitute(),
        }
        tracing::info!(committed, "measurement rendering ended");

        // Scheduled on the host loop without cancellation; re-enabling an
        // already-enabled option is harmless if a new session has started
        // in the meantime.
        let map = Rc::clone(&self.map);
        self.map.defer(
            Duration::from_millis(DOUBLE_CLICK_ZOOM_RESTORE_DELAY_MS),
            Box::new(move || map.set_double_click_zoom(true)),
        );
    }

    /// Swap the final committed point's label for a deletable annotation
    /// showing the full-path distance. The annotation's delete callback
    /// captures the group list, so a completed path can be removed long
    /// after the session (and this manager) are gone.
    fn substitute(&mut self) {
        let anchor = {
            let mut groups = self.groups.borrow_mut();
            let Some(group) = groups.last_mut() else {
                return;
            };
            group.label.remove();
            group.position
        };

        let mut annotation =
            Annotation::new(anchor, self.last_label_text.clone(), self.style.label_offset);

        let handle_cell: Rc<Cell<Option<OverlayHandle>>> = Rc::new(Cell::new(None));
        annotation.set_on_delete(Box::new({
            let groups = Rc::clone(&self.groups);
            let map = Rc::clone(&self.map);
            let handle_cell = Rc::clone(&handle_cell);
            move || {
                for mut group in groups.borrow_mut().drain(..) {
                    group.remove();
                }
                if let Some(handle) = handle_cell.get() {
                    map.detach_overlay(handle);
                }
                tracing::info!("measured path deleted");
            }
        }));

        let handle = self.map.attach_overlay(Rc::new(RefCell::new(annotation)));
        handle_cell.set(Some(handle));
    }
}
