//! Thread-shareable gamepad handle
//!
//! The controller itself has no locking. When input arrives on one thread and
//! rendering happens on another, share a [`SharedGamepad`] and do each frame's
//! work inside a single [`SharedGamepad::frame`] call so dispatch, queries and
//! render observe one consistent state.

use parking_lot::Mutex;
use std::sync::Arc;

use super::controller::GamepadController;
use crate::input::touch::TouchEvent;

#[derive(Debug, Clone)]
pub struct SharedGamepad {
    inner: Arc<Mutex<GamepadController>>,
}

impl SharedGamepad {
    pub fn new(controller: GamepadController) -> Self {
        Self { inner: Arc::new(Mutex::new(controller)) }
    }

    /// Run `f` with exclusive access for the duration of a frame
    pub fn frame<T>(&self, f: impl FnOnce(&mut GamepadController) -> T) -> T {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    /// Forward one event, holding the lock only for that event
    pub fn dispatch_event(&self, event: &TouchEvent) {
        self.inner.lock().dispatch_event(event);
    }
}
