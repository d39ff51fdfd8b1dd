//! Raw-input translation for the measurement session.
//!
//! [`InputController`] subscribes to the four raw map events and turns them
//! into three semantic events: `pointAdded`, `cursorMoved`, `sessionEnded`.
//! It owns nothing about distance or rendering; the session installs the
//! [`InputEvents`] callbacks and reacts.
//!
//! The two finish gestures differ only in how they leave the map's
//! double-click zoom option: a right-click makes sure it is enabled, a
//! double-click suppresses it (the gesture meant "finish", not "zoom") and
//! relies on the render teardown to re-enable it after a short delay.

use std::cell::RefCell;
use std::rc::Rc;

use crate::map::{CursorStyle, EventCallback, ListenerHandle, MapApi, MapEvent};
use crate::types::GeoPoint;

/// The three semantic events a session subscribes to.
pub struct InputEvents {
    /// A click committed a new measurement point.
    pub on_point_added: Box<dyn FnMut(GeoPoint)>,
    /// The cursor moved; the preview should follow.
    pub on_cursor_moved: Box<dyn FnMut(GeoPoint)>,
    /// The user finished the path with a right-click or double-click.
    pub on_session_ended: Box<dyn FnMut()>,
}

struct InputCore {
    map: Rc<dyn MapApi>,
    handles: Vec<ListenerHandle>,
    events: Option<InputEvents>,
}

impl InputCore {
    fn unsubscribe_all(&mut self) {
        for handle in self.handles.drain(..) {
            self.map.remove_listener(handle);
        }
    }
}

/// Translates raw map events into semantic measurement events.
pub struct InputController {
    core: Rc<RefCell<InputCore>>,
}

impl InputController {
    pub fn new(map: Rc<dyn MapApi>) -> Self {
        Self {
            core: Rc::new(RefCell::new(InputCore {
                map,
                handles: Vec::new(),
                events: None,
            })),
        }
    }

    /// Subscribe to the four raw events. Listener handles are stored for
    /// disposal by [`InputController::end`] or by a finish gesture.
    pub fn start(&self, events: InputEvents) {
        let map = Rc::clone(&self.core.borrow().map);
        self.core.borrow_mut().events = Some(events);

        let handles = vec![
            map.add_listener(MapEvent::PrimaryClick, self.forwarder(SemanticEvent::PointAdded)),
            map.add_listener(MapEvent::PointerMove, self.forwarder(SemanticEvent::CursorMoved)),
            map.add_listener(MapEvent::SecondaryClick, self.finisher(FinishGesture::SecondaryClick)),
            map.add_listener(MapEvent::DoubleClick, self.finisher(FinishGesture::DoubleClick)),
        ];
        self.core.borrow_mut().handles = handles;
        tracing::debug!("input listeners registered");
    }

    /// Drop all raw listeners and the event sinks. Emits nothing; callers
    /// of this path already know the session is over. Safe to call without
    /// a prior `start` and safe to call repeatedly.
    pub fn end(&self) {
        let mut core = self.core.borrow_mut();
        core.unsubscribe_all();
        core.events = None;
        tracing::debug!("input listeners released");
    }

    /// Build a raw callback that forwards the coordinate to one semantic
    /// event slot. The events are taken out of the core around the call so
    /// the slot never runs while the core is borrowed.
    fn forwarder(&self, semantic: SemanticEvent) -> EventCallback {
        let weak = Rc::downgrade(&self.core);
        Box::new(move |point| {
            let Some(core) = weak.upgrade() else { return };
            let taken = core.borrow_mut().events.take();
            if let Some(mut events) = taken {
                match semantic {
                    SemanticEvent::PointAdded => (events.on_point_added)(point),
                    SemanticEvent::CursorMoved => (events.on_cursor_moved)(point),
                }
                core.borrow_mut().events = Some(events);
            }
        })
    }

    /// Build the raw callback for one of the two finish gestures.
    fn finisher(&self, gesture: FinishGesture) -> EventCallback {
        let weak = Rc::downgrade(&self.core);
        Box::new(move |_point| {
            let Some(core) = weak.upgrade() else { return };
            finish(&core, gesture);
        })
    }
}

#[derive(Clone, Copy, Debug)]
enum SemanticEvent {
    PointAdded,
    CursorMoved,
}

#[derive(Clone, Copy, Debug)]
enum FinishGesture {
    SecondaryClick,
    DoubleClick,
}

/// Shared tail of both finish gestures: restore the cursor, settle the
/// double-click zoom option, unsubscribe, then emit `sessionEnded` exactly
/// once with the core borrow released.
fn finish(core: &Rc<RefCell<InputCore>>, gesture: FinishGesture) {
    let events = {
        let mut core = core.borrow_mut();
        core.map.set_cursor(CursorStyle::Default);
        match gesture {
            FinishGesture::SecondaryClick => core.map.set_double_click_zoom(true),
            FinishGesture::DoubleClick => core.map.set_double_click_zoom(false),
        }
        core.unsubscribe_all();
        core.events.take()
    };
    if let Some(mut events) = events {
        tracing::debug!(?gesture, "measurement finished by gesture");
        (events.on_session_ended)();
    }
}
