//! mapmeasure: interactive distance measurement for third-party map widgets.
//!
//! The host application hands [`MeasureDistance`] a map instance (anything
//! implementing [`map::MapApi`]) and calls [`MeasureDistance::start`]. The
//! user clicks out a path on the map; the tool renders a marker, label, and
//! connecting segment per committed point, follows the cursor with a live
//! running-total readout, and finishes on a right-click or double-click,
//! leaving a deletable distance annotation on the final point.
//!
//! ## Modules
//!
//! - `session` - the orchestrating tool object and session lifecycle
//! - `input` - raw map events translated into semantic measurement events
//! - `render` - incremental display groups, preview, teardown, annotation
//! - `map` - the capability trait the host map implements
//! - `style` - stroke/label styling with validation
//! - `types` - geographic points and the committed point sequence
//!
//! Everything is single-threaded and event-driven: the tool reacts inside
//! the host's event callbacks and never blocks or polls.

pub mod constants;
pub mod error;
pub mod input;
pub mod map;
pub mod render;
pub mod session;
pub mod style;
pub mod types;

// Public re-exports for a compact external API
pub use error::{MeasureError, MeasureResult};
pub use session::MeasureDistance;
pub use style::{MeasureStyle, StrokeStyle};
pub use types::GeoPoint;
