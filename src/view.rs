//! The open menu surface.
//!
//! A [`ViewHandle`] is a cheap, clonable handle to the user-facing menu
//! instance. The view is closable once; closing an already-closed view is
//! a no-op. Handles are `Rc`-based because dispatch is single-threaded
//! (see the crate docs on the concurrency model).

use std::cell::Cell;
use std::rc::Rc;

/// Handle to the open, user-facing menu view.
#[derive(Debug, Clone)]
pub struct ViewHandle {
    open: Rc<Cell<bool>>,
}

impl ViewHandle {
    /// Create a handle to a freshly opened view.
    pub fn new() -> Self {
        Self {
            open: Rc::new(Cell::new(true)),
        }
    }

    /// Whether the view is still open.
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// Close the view. Idempotent.
    pub fn close(&self) {
        if self.open.replace(false) {
            tracing::debug!("view closed");
        }
    }
}

impl Default for ViewHandle {
    fn default() -> Self {
        Self::new()
    }
}
