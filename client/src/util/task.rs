//! Abortable async work tied to a component's lifetime.
//!
//! A `TaskScope` hands out `Abortable` wrappers and remembers their handles.
//! Components call `cancel_all` from `on_cleanup`, so a response that lands
//! after unmount is dropped before it can touch disposed state.

#[cfg(test)]
#[path = "task_test.rs"]
mod task_test;

use std::future::Future;
use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, Abortable};

#[derive(Clone, Debug, Default)]
pub struct TaskScope {
    handles: Arc<Mutex<Vec<AbortHandle>>>,
}

impl TaskScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap `fut` so that a later `cancel_all` stops it at its next poll.
    pub fn wrap<F: Future>(&self, fut: F) -> Abortable<F> {
        let (handle, registration) = AbortHandle::new_pair();
        if let Ok(mut handles) = self.handles.lock() {
            handles.push(handle);
        }
        Abortable::new(fut, registration)
    }

    /// Abort every task handed out so far.
    pub fn cancel_all(&self) {
        if let Ok(mut handles) = self.handles.lock() {
            for handle in handles.drain(..) {
                handle.abort();
            }
        }
    }
}
