//! Core data types: geographic points and the committed point sequence.

use serde::{Deserialize, Serialize};

// ============================================================================
// GeoPoint
// ============================================================================

/// An immutable (latitude, longitude) pair in degrees.
///
/// Produced by the host map's click-to-coordinate projection; consumed by
/// the host's geometry primitives and by rendering. Carries no lifecycle of
/// its own.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

// ============================================================================
// PointSequence
// ============================================================================

/// Callback fired after every append with the full committed slice and the
/// index of the point that was just inserted.
pub type InsertObserver = Box<dyn FnMut(&[GeoPoint], usize)>;

/// The ordered list of committed measurement points.
///
/// Append-only while a session is active; [`PointSequence::freeze`] is
/// flipped at session end, after which the sequence is read-only until it
/// is discarded. Indices are never reused or reordered within a session.
#[derive(Default)]
pub struct PointSequence {
    points: Vec<GeoPoint>,
    observer: Option<InsertObserver>,
    frozen: bool,
}

impl PointSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the single insert observer. Replaces any previous one.
    pub fn set_observer(&mut self, observer: InsertObserver) {
        self.observer = Some(observer);
    }

    /// Append a point and notify the observer with `(points, index)`.
    ///
    /// Appending to a frozen sequence is a caller bug; it is logged and
    /// ignored rather than propagated, since it can only happen if the host
    /// delivers an event after teardown.
    pub fn push(&mut self, point: GeoPoint) {
        if self.frozen {
            tracing::warn!(?point, "append to frozen point sequence ignored");
            return;
        }
        self.points.push(point);
        let index = self.points.len() - 1;
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.points, index);
        }
    }

    /// Make the sequence read-only. Idempotent.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }

    /// The committed points in commit order.
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }
}
