/*!
Cooperative, single-threaded scheduling.

A [`Scheduler`] runs a zero-argument callback after a delay, on the same
thread that drives everything else. [`RunLoop`] is the stock
implementation: a deadline-ordered queue drained by [`RunLoop::run`].

Callbacks never run concurrently with each other. A callback scheduled
from inside another callback is queued, never run inline.
*/

use std::cell::{Cell, RefCell};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt;
use std::thread;
use std::time::{Duration, Instant};

/// Deferred callback.
pub type Task = Box<dyn FnOnce()>;

/// Host-provided deferred execution.
pub trait Scheduler {
  /// Run `task` once, `delay` from now.
  fn schedule(&self, delay: Duration, task: Task);
}

struct Entry {
  deadline: Instant,
  /// Insertion order, breaks deadline ties (FIFO).
  seq: u64,
  task: Task,
}

impl PartialEq for Entry {
  fn eq(&self, other: &Self) -> bool {
    self.deadline == other.deadline && self.seq == other.seq
  }
}

impl Eq for Entry {}

impl PartialOrd for Entry {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl Ord for Entry {
  // Reversed: BinaryHeap is a max-heap, we want the earliest deadline on top.
  fn cmp(&self, other: &Self) -> Ordering {
    other
      .deadline
      .cmp(&self.deadline)
      .then_with(|| other.seq.cmp(&self.seq))
  }
}

/// Single-threaded deferred-callback loop.
///
/// Delays are measured from the moment `schedule` is called, so a task
/// that re-arms itself drifts by however late it ran.
#[derive(Default)]
pub struct RunLoop {
  queue: RefCell<BinaryHeap<Entry>>,
  next_seq: Cell<u64>,
  stopped: Cell<bool>,
}

impl RunLoop {
  /// Create an empty loop.
  pub fn new() -> Self {
    Self::default()
  }

  /// Number of tasks waiting to run.
  pub fn pending(&self) -> usize {
    self.queue.borrow().len()
  }

  /// Make the current (or next) [`run`](Self::run) return after the
  /// running task. Queued tasks are kept.
  pub fn stop(&self) {
    self.stopped.set(true);
  }

  /// Run tasks in deadline order until the queue is empty or
  /// [`stop`](Self::stop) is called. Sleeps between deadlines.
  pub fn run(&self) {
    self.stopped.set(false);
    while !self.stopped.get() {
      if !self.run_next() {
        break;
      }
    }
    log::trace!("Run loop exited with {} pending task(s)", self.pending());
  }

  /// Wait for the earliest task and run it. Returns false if the queue
  /// was empty.
  pub fn run_next(&self) -> bool {
    // Borrow released before the task runs so it can schedule more work.
    let Some(entry) = self.queue.borrow_mut().pop() else {
      return false;
    };
    let now = Instant::now();
    if entry.deadline > now {
      thread::sleep(entry.deadline - now);
    }
    (entry.task)();
    true
  }
}

impl Scheduler for RunLoop {
  fn schedule(&self, delay: Duration, task: Task) {
    let seq = self.next_seq.get();
    self.next_seq.set(seq + 1);
    self.queue.borrow_mut().push(Entry {
      deadline: Instant::now() + delay,
      seq,
      task,
    });
  }
}

impl fmt::Debug for RunLoop {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("RunLoop")
      .field("pending", &self.pending())
      .field("stopped", &self.stopped.get())
      .finish()
  }
}
