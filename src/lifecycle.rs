// Frame loop ownership and page lifecycle decisions.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// A pagehide into the back/forward cache keeps the slider alive so a
/// restored page resumes where it left off.
#[inline]
pub fn should_teardown_on_pagehide(persisted: bool) -> bool {
    !persisted
}

/// Shared state of a self-rescheduling frame callback.
///
/// The callback holds a clone of its own loop, which is a reference cycle;
/// `stop` breaks it by dropping the callback, releasing everything it captured.
/// `stop` must be called from outside the callback.
pub struct FrameLoop<C> {
    callback: Rc<RefCell<Option<C>>>,
    running: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
}

impl<C> Clone for FrameLoop<C> {
    fn clone(&self) -> Self {
        Self {
            callback: self.callback.clone(),
            running: self.running.clone(),
            pending: self.pending.clone(),
        }
    }
}

impl<C> Default for FrameLoop<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> FrameLoop<C> {
    pub fn new() -> Self {
        Self {
            callback: Rc::new(RefCell::new(None)),
            running: Rc::new(Cell::new(true)),
            pending: Rc::new(Cell::new(None)),
        }
    }

    pub fn install(&self, callback: C) {
        *self.callback.borrow_mut() = Some(callback);
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Id of the outstanding frame request, if any.
    pub fn set_pending(&self, id: Option<i32>) {
        self.pending.set(id);
    }

    /// Run `f` against the installed callback; `None` once stopped.
    pub fn with_callback<R>(&self, f: impl FnOnce(&C) -> R) -> Option<R> {
        self.callback.borrow().as_ref().map(f)
    }

    /// Stop scheduling, cancel the outstanding request, then drop the callback.
    pub fn stop(&self, cancel: impl FnOnce(i32)) {
        self.running.set(false);
        if let Some(id) = self.pending.take() {
            cancel(id);
        }
        let callback = self.callback.borrow_mut().take();
        drop(callback);
    }
}
