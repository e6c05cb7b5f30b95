//! Next-tick task scheduling.
//!
//! Buttons that need to act outside the click they were triggered by hand
//! a zero-argument closure to the [`TickScheduler`]. The host drains the
//! queue once per tick of its event loop. Enqueueing never blocks, and an
//! enqueued task cannot be cancelled.
//!
//! After [`TickScheduler::shutdown`] the scheduler refuses new tasks;
//! callers treat the refusal as a benign no-op (the host is going away
//! anyway).

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::Rc;

type Task = Box<dyn FnOnce()>;

struct SchedulerInner {
    queue: RefCell<VecDeque<Task>>,
    accepting: Cell<bool>,
}

/// A single-threaded next-tick task queue.
///
/// Clones share the same queue, so a handle can be stored in a context and
/// drained by the host's event loop.
#[derive(Clone)]
pub struct TickScheduler {
    inner: Rc<SchedulerInner>,
}

impl TickScheduler {
    /// Create an empty, accepting scheduler.
    pub fn new() -> Self {
        Self {
            inner: Rc::new(SchedulerInner {
                queue: RefCell::new(VecDeque::new()),
                accepting: Cell::new(true),
            }),
        }
    }

    /// Enqueue a task for the next tick.
    ///
    /// Returns `false` if the scheduler has been shut down; the task is
    /// dropped in that case.
    pub fn schedule_next_tick(&self, task: impl FnOnce() + 'static) -> bool {
        if !self.inner.accepting.get() {
            tracing::debug!("task rejected, scheduler is shut down");
            return false;
        }
        self.inner.queue.borrow_mut().push_back(Box::new(task));
        true
    }

    /// Run one tick: every task enqueued before this call, in order.
    ///
    /// Tasks that schedule further tasks see those run on the next tick,
    /// not this one. Returns the number of tasks run.
    pub fn run_tick(&self) -> usize {
        let tasks: Vec<Task> = self.inner.queue.borrow_mut().drain(..).collect();
        let count = tasks.len();
        for task in tasks {
            task();
        }
        if count > 0 {
            tracing::debug!(tasks = count, "tick complete");
        }
        count
    }

    /// Number of tasks waiting for the next tick.
    pub fn pending(&self) -> usize {
        self.inner.queue.borrow().len()
    }

    /// Stop accepting new tasks. Already-enqueued tasks stay queued and
    /// run if the host still ticks.
    pub fn shutdown(&self) {
        self.inner.accepting.set(false);
    }

    /// Whether the scheduler still accepts tasks.
    pub fn is_accepting(&self) -> bool {
        self.inner.accepting.get()
    }
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TickScheduler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickScheduler")
            .field("pending", &self.pending())
            .field("accepting", &self.is_accepting())
            .finish()
    }
}
