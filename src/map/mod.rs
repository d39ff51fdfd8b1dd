//! Host map capability surface.
//!
//! The tool never talks to a concrete map widget. Everything it needs from
//! the host (interaction events, drawable primitives, map options,
//! spherical geometry, and deferred execution) is expressed as the
//! [`MapApi`] trait, implemented by the embedding application or by a test
//! double. All of it is single-threaded: callbacks run on whatever event
//! dispatch the host owns, and no method blocks.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::style::StrokeStyle;
use crate::types::GeoPoint;

// ============================================================================
// Interaction events
// ============================================================================

/// Raw interaction events the tool subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MapEvent {
    /// Left click; commits a measurement point
    PrimaryClick,
    /// Cursor motion over the map
    PointerMove,
    /// Right click; finishes the path
    SecondaryClick,
    /// Double click; finishes the path
    DoubleClick,
}

/// Opaque id for a registered listener. Every handle returned by
/// [`MapApi::add_listener`] must eventually be passed back to
/// [`MapApi::remove_listener`]; the pairing is an invariant the tests
/// check explicitly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerHandle(pub u64);

/// Listener callback. Every event carries the coordinate at the cursor;
/// the finish gestures ignore it.
pub type EventCallback = Box<dyn FnMut(GeoPoint)>;

// ============================================================================
// Map options
// ============================================================================

/// Cursor styles the tool switches between.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorStyle {
    #[default]
    Default,
    Crosshair,
}

// ============================================================================
// Drawable primitives
// ============================================================================
//
// Handles returned by the factory methods stay attached to the map until
// `remove` is called; dropping a handle must NOT detach the drawable, since
// a finished path outlives the session that created it. Removing an
// already-removed drawable is a no-op.

/// A point icon on the map.
pub trait Marker {
    fn set_position(&mut self, position: GeoPoint);
    /// Detach from the map. Idempotent.
    fn remove(&mut self);
}

/// A text box anchored to a coordinate.
pub trait Label {
    fn set_position(&mut self, position: GeoPoint);
    fn set_text(&mut self, text: &str);
    /// Detach from the map. Idempotent.
    fn remove(&mut self);
}

/// A polyline over map coordinates.
pub trait Polyline {
    fn set_path(&mut self, path: &[GeoPoint]);
    fn set_visible(&mut self, visible: bool);
    /// Detach from the map. Idempotent.
    fn remove(&mut self);
}

// ============================================================================
// Custom overlays
// ============================================================================

/// Host-owned drawing surface handed to [`Drawable`] hooks.
pub trait OverlaySurface {
    /// Anchor the overlay to a coordinate, shifted by a pixel offset.
    fn set_anchor(&mut self, position: GeoPoint, offset: (i32, i32));
    /// Replace the overlay's text content.
    fn set_text(&mut self, text: &str);
    /// Wire the overlay's delete affordance to `callback`. The host invokes
    /// it when the user activates the affordance.
    fn set_on_delete(&mut self, callback: Box<dyn FnMut()>);
}

/// Hooks the host invokes on a custom overlay.
///
/// `construct` runs once right after [`MapApi::attach_overlay`], `draw` on
/// every projection change, and `destroy` when the overlay is detached.
pub trait Drawable {
    fn construct(&mut self, surface: &mut dyn OverlaySurface);
    fn draw(&mut self, surface: &mut dyn OverlaySurface);
    fn destroy(&mut self, surface: &mut dyn OverlaySurface);
}

/// Opaque id for an attached custom overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OverlayHandle(pub u64);

// ============================================================================
// The capability trait
// ============================================================================

/// Everything the measurement tool consumes from the host map widget.
///
/// Methods take `&self`; hosts interior-mutate, and the tool shares one
/// instance as `Rc<dyn MapApi>`. Option setters are last-write-wins with no
/// transaction semantics.
pub trait MapApi {
    // --- events ---
    fn add_listener(&self, event: MapEvent, callback: EventCallback) -> ListenerHandle;
    fn remove_listener(&self, handle: ListenerHandle);

    // --- drawables ---
    fn create_marker(&self) -> Box<dyn Marker>;
    fn create_label(&self, offset: (i32, i32)) -> Box<dyn Label>;
    fn create_polyline(&self, stroke: &StrokeStyle) -> Box<dyn Polyline>;
    fn attach_overlay(&self, overlay: Rc<RefCell<dyn Drawable>>) -> OverlayHandle;
    fn detach_overlay(&self, handle: OverlayHandle);

    // --- options ---
    fn set_cursor(&self, cursor: CursorStyle);
    fn set_double_click_zoom(&self, enabled: bool);

    // --- spherical geometry ---
    /// Great-circle distance between two points, in meters.
    fn distance_between(&self, a: GeoPoint, b: GeoPoint) -> f64;
    /// Sum of consecutive great-circle distances over `path`, in meters.
    fn path_length(&self, path: &[GeoPoint]) -> f64;

    // --- deferred execution ---
    /// Run `callback` once after `delay` on the host event loop. There is
    /// no cancellation; callers must only schedule idempotent work.
    fn defer(&self, delay: Duration, callback: Box<dyn FnOnce()>);
}
