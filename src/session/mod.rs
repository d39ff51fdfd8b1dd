//! Session orchestration.
//!
//! [`MeasureDistance`] is the only public entry point of the crate: one
//! instance per map, two idempotent operations. `start()` allocates the
//! point sequence, render manager, and input controller and wires them
//! together; `end()` (or a finish gesture) tears everything down. At most
//! one session is active per instance at any time.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::error::MeasureResult;
use crate::input::{InputController, InputEvents};
use crate::map::{CursorStyle, MapApi};
use crate::render::RenderManager;
use crate::style::MeasureStyle;
use crate::types::PointSequence;

/// Interactive distance measurement over one host map.
pub struct MeasureDistance {
    map: Rc<dyn MapApi>,
    style: MeasureStyle,
    /// Shared with the `sessionEnded` closure, which flips it to idle when
    /// a finish gesture tears the session down from inside a map callback.
    active: Rc<Cell<bool>>,
    parts: Option<SessionParts>,
}

/// Everything owned by one active session.
struct SessionParts {
    points: Rc<RefCell<PointSequence>>,
    renderer: Rc<RefCell<RenderManager>>,
    input: InputController,
}

impl MeasureDistance {
    /// Build a tool with the stock styling.
    pub fn new(map: Rc<dyn MapApi>) -> MeasureResult<Self> {
        Self::with_style(map, MeasureStyle::default())
    }

    /// Build a tool with a custom [`MeasureStyle`]. The style is validated
    /// here so a bad configuration fails before any session can leave
    /// orphaned drawables behind.
    pub fn with_style(map: Rc<dyn MapApi>, style: MeasureStyle) -> MeasureResult<Self> {
        style.validate()?;
        Ok(Self {
            map,
            style,
            active: Rc::new(Cell::new(false)),
            parts: None,
        })
    }

    /// Begin a measurement session.
    ///
    /// Idempotent while a session is active, with one exception: if exactly
    /// one point has been committed and the path was never finished, the
    /// half-built path is abandoned (torn down exactly like a user delete)
    /// and a fresh session starts in its place.
    pub fn start(&mut self) {
        if self.active.get() {
            let single_point = self
                .parts
                .as_ref()
                .is_some_and(|parts| parts.points.borrow().len() == 1);
            if !single_point {
                tracing::debug!("measurement already active");
                return;
            }
            tracing::info!("abandoning single-point path");
            self.teardown();
        }

        let points = Rc::new(RefCell::new(PointSequence::new()));
        let renderer = Rc::new(RefCell::new(RenderManager::new(
            Rc::clone(&self.map),
            self.style.clone(),
        )));

        // Render each committed point the moment it lands in the sequence.
        points.borrow_mut().set_observer(Box::new({
            let renderer = Rc::clone(&renderer);
            move |points, index| renderer.borrow_mut().insert_at(points, index)
        }));

        let input = InputController::new(Rc::clone(&self.map));
        input.start(InputEvents {
            on_point_added: Box::new({
                let points = Rc::clone(&points);
                move |point| points.borrow_mut().push(point)
            }),
            on_cursor_moved: Box::new({
                let points = Rc::clone(&points);
                let renderer = Rc::clone(&renderer);
                move |position| {
                    let points = points.borrow();
                    renderer.borrow_mut().cursor_moved(position, points.points());
                }
            }),
            on_session_ended: Box::new({
                let active = Rc::clone(&self.active);
                let points = Rc::clone(&points);
                let renderer = Rc::clone(&renderer);
                move || {
                    active.set(false);
                    points.borrow_mut().freeze();
                    renderer.borrow_mut().end();
                }
            }),
        });

        self.parts = Some(SessionParts {
            points,
            renderer,
            input,
        });
        self.active.set(true);
        tracing::info!("measurement started");
    }

    /// End the active session, restoring the default cursor and releasing
    /// every listener registered by `start()`. Idempotent when idle.
    pub fn end(&mut self) {
        if !self.active.get() {
            return;
        }
        self.map.set_cursor(CursorStyle::Default);
        self.teardown();
        tracing::info!("measurement ended");
    }

    /// Release input listeners, run render teardown, freeze the sequence,
    /// and drop the session parts.
    fn teardown(&mut self) {
        if let Some(parts) = self.parts.take() {
            parts.input.end();
            parts.points.borrow_mut().freeze();
            parts.renderer.borrow_mut().end();
        }
        self.active.set(false);
    }
}
