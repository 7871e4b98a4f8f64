/*!
Single-shot countdown timer.

```ignore
let run_loop = Rc::new(RunLoop::new());
let timer = CountdownTimer::new(30.0_f64.minutes(), run_loop.clone());
timer.set_delegate(&host);
timer.start();   // host.timer_tick() fires now with 1800.0
run_loop.run();  // ... 1799.0, ..., 1.0, then host.timer_expired()
drop(timer);     // cancels: pending ticks become no-ops
```

## Ticks

`start` reports the full timeout immediately, then each tick subtracts
exactly one second and reports again. When less than one second would
be left the timer expires instead: one `timer_expired`, no more ticks.
A timeout of `T` whole seconds gives `T` ticks and one expiration.

Each tick is scheduled one interval after the previous one ran, not
against a fixed start time. Scheduling latency accumulates; the reported
values only depend on how many ticks fired.

## Ownership

The host owns the timer (`Rc`). Scheduled ticks hold a `Weak` and do
nothing once the host lets go, which is the only way to cancel. The
delegate is held weakly too.
*/

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::scheduler::Scheduler;

/// Slack for the one-second boundary.
pub const EXPIRY_TOLERANCE: f64 = 1e-6;

/// Delay between ticks.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Lifecycle of a [`CountdownTimer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
  /// Not started yet.
  Created,
  /// Ticking.
  Running,
  /// Ran out. Terminal.
  Expired,
}

/// Receives timer notifications, synchronously, on the scheduler's thread.
pub trait TimerDelegate {
  /// Called on start and after every elapsed second.
  fn timer_tick(&self, timer: &CountdownTimer);

  /// Called once, when the countdown runs out. No tick accompanies it.
  fn timer_expired(&self, timer: &CountdownTimer);
}

/// Countdown that ticks once per interval until it runs out.
pub struct CountdownTimer {
  total_timeout: f64,
  time_left: Cell<f64>,
  state: Cell<TimerState>,
  tick_interval: Duration,
  delegate: RefCell<Option<Weak<dyn TimerDelegate>>>,
  scheduler: Rc<dyn Scheduler>,
}

impl CountdownTimer {
  /// Create a timer for `timeout` seconds. Does not start it.
  pub fn new(timeout: f64, scheduler: Rc<dyn Scheduler>) -> Rc<Self> {
    Self::with_tick_interval(timeout, TICK_INTERVAL, scheduler)
  }

  /// Like [`new`](Self::new) with a custom delay between ticks. Each tick
  /// still counts as one second.
  pub fn with_tick_interval(
    timeout: f64,
    tick_interval: Duration,
    scheduler: Rc<dyn Scheduler>,
  ) -> Rc<Self> {
    assert!(
      timeout.is_finite() && timeout > 0.0,
      "timeout must be positive, got {timeout}"
    );
    Rc::new(Self {
      total_timeout: timeout,
      time_left: Cell::new(timeout),
      state: Cell::new(TimerState::Created),
      tick_interval,
      delegate: RefCell::new(None),
      scheduler,
    })
  }

  /// Set the notification target. Held weakly.
  pub fn set_delegate<D: TimerDelegate + 'static>(&self, delegate: &Rc<D>) {
    let weak = Rc::downgrade(delegate);
    let weak: Weak<dyn TimerDelegate> = weak;
    *self.delegate.borrow_mut() = Some(weak);
  }

  /// Timeout the timer was created with, in seconds.
  pub const fn total_timeout(&self) -> f64 {
    self.total_timeout
  }

  /// Seconds left.
  pub fn time_left(&self) -> f64 {
    self.time_left.get()
  }

  /// Current lifecycle state.
  pub fn state(&self) -> TimerState {
    self.state.get()
  }

  /// Report the full timeout and schedule the first tick.
  ///
  /// # Panics
  ///
  /// If the timer was already started, or has less than one second left.
  /// Exactly one second is accepted: a one-second timer ticks once at 1
  /// and then expires, rather than being rejected as "one second or less".
  pub fn start(self: &Rc<Self>) {
    assert!(
      self.state.get() == TimerState::Created,
      "timer started twice"
    );
    assert!(
      self.time_left.get() > 1.0 - EXPIRY_TOLERANCE,
      "timer started with less than one second left"
    );
    log::info!("Timer started: {} seconds", self.total_timeout);
    self.state.set(TimerState::Running);
    self.notify_tick();
    self.schedule_next_tick();
  }

  fn schedule_next_tick(self: &Rc<Self>) {
    let timer = Rc::downgrade(self);
    self.scheduler.schedule(
      self.tick_interval,
      Box::new(move || {
        if let Some(timer) = timer.upgrade() {
          timer.tick();
        }
      }),
    );
  }

  fn tick(self: &Rc<Self>) {
    if self.state.get() != TimerState::Running {
      return;
    }
    let left = self.time_left.get() - 1.0;
    if left > 1.0 - EXPIRY_TOLERANCE {
      self.time_left.set(left);
      self.notify_tick();
      self.schedule_next_tick();
    } else {
      self.time_left.set(left.max(0.0));
      self.state.set(TimerState::Expired);
      log::info!("Timer expired");
      if let Some(delegate) = self.delegate() {
        delegate.timer_expired(self);
      }
    }
  }

  fn notify_tick(&self) {
    log::trace!("Timer tick: {} seconds left", self.time_left.get());
    if let Some(delegate) = self.delegate() {
      delegate.timer_tick(self);
    }
  }

  fn delegate(&self) -> Option<Rc<dyn TimerDelegate>> {
    self.delegate.borrow().as_ref()?.upgrade()
  }
}

impl fmt::Debug for CountdownTimer {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("CountdownTimer")
      .field("total_timeout", &self.total_timeout)
      .field("time_left", &self.time_left.get())
      .field("state", &self.state.get())
      .finish_non_exhaustive()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::scheduler::{RunLoop, Task};
  use proptest::prelude::*;
  use std::collections::VecDeque;

  /// Virtual-time scheduler: tasks run only when the test says so.
  #[derive(Default)]
  struct ManualScheduler {
    pending: RefCell<VecDeque<(Duration, Task)>>,
  }

  impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
      self.pending.borrow_mut().push_back((delay, task));
    }
  }

  impl ManualScheduler {
    fn pending(&self) -> usize {
      self.pending.borrow().len()
    }

    fn run_next(&self) -> bool {
      let next = self.pending.borrow_mut().pop_front();
      match next {
        Some((_, task)) => {
          task();
          true
        }
        None => false,
      }
    }

    fn run_all(&self) -> usize {
      let mut ran = 0;
      while self.run_next() {
        ran += 1;
      }
      ran
    }
  }

  #[derive(Debug, Clone, Copy, PartialEq)]
  enum Note {
    Tick(f64),
    Expired(f64),
  }

  #[derive(Default)]
  struct Recorder {
    notes: RefCell<Vec<Note>>,
  }

  impl TimerDelegate for Recorder {
    fn timer_tick(&self, timer: &CountdownTimer) {
      self.notes.borrow_mut().push(Note::Tick(timer.time_left()));
    }

    fn timer_expired(&self, timer: &CountdownTimer) {
      self.notes.borrow_mut().push(Note::Expired(timer.time_left()));
    }
  }

  impl Recorder {
    fn notes(&self) -> Vec<Note> {
      self.notes.borrow().clone()
    }
  }

  fn setup(timeout: f64) -> (Rc<ManualScheduler>, Rc<CountdownTimer>, Rc<Recorder>) {
    let scheduler = Rc::new(ManualScheduler::default());
    let timer = CountdownTimer::new(timeout, scheduler.clone());
    let recorder = Rc::new(Recorder::default());
    timer.set_delegate(&recorder);
    (scheduler, timer, recorder)
  }

  mod start_tests {
    use super::*;

    #[test]
    fn start_reports_full_timeout_immediately() {
      let (scheduler, timer, recorder) = setup(5.0);
      timer.start();
      assert_eq!(recorder.notes(), vec![Note::Tick(5.0)]);
      assert_eq!(timer.state(), TimerState::Running);
      assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn ticks_are_one_interval_apart() {
      let (scheduler, timer, _recorder) = setup(5.0);
      timer.start();
      let (delay, _) = scheduler.pending.borrow_mut().pop_front().unwrap();
      assert_eq!(delay, TICK_INTERVAL);
    }

    #[test]
    #[should_panic(expected = "timer started twice")]
    fn starting_twice_panics() {
      let (_scheduler, timer, _recorder) = setup(5.0);
      timer.start();
      timer.start();
    }

    #[test]
    #[should_panic(expected = "timer started twice")]
    fn starting_expired_timer_panics() {
      let (scheduler, timer, _recorder) = setup(2.0);
      timer.start();
      scheduler.run_all();
      assert_eq!(timer.state(), TimerState::Expired);
      timer.start();
    }

    #[test]
    #[should_panic(expected = "less than one second")]
    fn starting_sub_second_timer_panics() {
      let (_scheduler, timer, _recorder) = setup(0.5);
      timer.start();
    }

    #[test]
    #[should_panic(expected = "timeout must be positive")]
    fn zero_timeout_is_rejected() {
      let _timer = CountdownTimer::new(0.0, Rc::new(ManualScheduler::default()));
    }
  }

  mod countdown_tests {
    use super::*;

    #[test]
    fn counts_down_to_expiration() {
      let (scheduler, timer, recorder) = setup(3.0);
      timer.start();
      scheduler.run_all();
      assert_eq!(
        recorder.notes(),
        vec![
          Note::Tick(3.0),
          Note::Tick(2.0),
          Note::Tick(1.0),
          Note::Expired(0.0)
        ]
      );
      assert_eq!(timer.state(), TimerState::Expired);
      assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn one_second_timer_ticks_once_then_expires() {
      let (scheduler, timer, recorder) = setup(1.0);
      timer.start();
      scheduler.run_all();
      assert_eq!(recorder.notes(), vec![Note::Tick(1.0), Note::Expired(0.0)]);
    }

    #[test]
    fn fractional_timeout_never_goes_negative() {
      let (scheduler, timer, recorder) = setup(2.5);
      timer.start();
      scheduler.run_all();
      assert_eq!(
        recorder.notes(),
        vec![Note::Tick(2.5), Note::Tick(1.5), Note::Expired(0.5)]
      );
      assert!(timer.time_left() >= 0.0);
    }

    #[test]
    fn tolerance_absorbs_float_error() {
      // A hair under 3 seconds still shows three ticks
      let (scheduler, timer, recorder) = setup(2.999_999_9);
      timer.start();
      scheduler.run_all();
      let ticks = recorder
        .notes()
        .iter()
        .filter(|n| matches!(n, Note::Tick(_)))
        .count();
      assert_eq!(ticks, 3);
    }

    #[test]
    fn total_timeout_is_fixed() {
      let (scheduler, timer, _recorder) = setup(4.0);
      timer.start();
      scheduler.run_next();
      assert_eq!(timer.total_timeout(), 4.0);
      assert_eq!(timer.time_left(), 3.0);
    }
  }

  mod cancellation_tests {
    use super::*;

    #[test]
    fn dropping_timer_silences_pending_ticks() {
      let (scheduler, timer, recorder) = setup(10.0);
      timer.start();
      scheduler.run_next();
      drop(timer);
      assert_eq!(scheduler.pending(), 1);
      scheduler.run_all();
      assert_eq!(recorder.notes(), vec![Note::Tick(10.0), Note::Tick(9.0)]);
    }

    #[test]
    fn dropped_delegate_is_skipped() {
      let (scheduler, timer, recorder) = setup(3.0);
      timer.start();
      drop(recorder);
      scheduler.run_all();
      assert_eq!(timer.state(), TimerState::Expired);
    }

    /// Host that releases its timer from inside the expiration callback.
    #[derive(Default)]
    struct Host {
      timer: RefCell<Option<Rc<CountdownTimer>>>,
      expirations: Cell<u32>,
    }

    impl TimerDelegate for Host {
      fn timer_tick(&self, _timer: &CountdownTimer) {}

      fn timer_expired(&self, _timer: &CountdownTimer) {
        self.expirations.set(self.expirations.get() + 1);
        self.timer.borrow_mut().take();
      }
    }

    #[test]
    fn host_can_release_timer_on_expiration() {
      let scheduler = Rc::new(ManualScheduler::default());
      let host = Rc::new(Host::default());
      let timer = CountdownTimer::new(2.0, scheduler.clone());
      timer.set_delegate(&host);
      timer.start();
      let weak = Rc::downgrade(&timer);
      *host.timer.borrow_mut() = Some(timer);

      scheduler.run_all();
      assert_eq!(host.expirations.get(), 1);
      assert!(weak.upgrade().is_none(), "timer should be gone");
    }

    /// Host that releases its timer on the first tick after start.
    #[derive(Default)]
    struct CancelOnTick {
      timer: RefCell<Option<Rc<CountdownTimer>>>,
      ticks: Cell<u32>,
    }

    impl TimerDelegate for CancelOnTick {
      fn timer_tick(&self, _timer: &CountdownTimer) {
        self.ticks.set(self.ticks.get() + 1);
        if self.ticks.get() == 2 {
          self.timer.borrow_mut().take();
        }
      }

      fn timer_expired(&self, _timer: &CountdownTimer) {
        panic!("cancelled timer must not expire");
      }
    }

    #[test]
    fn release_during_tick_stops_the_countdown() {
      let scheduler = Rc::new(ManualScheduler::default());
      let host = Rc::new(CancelOnTick::default());
      let timer = CountdownTimer::new(5.0, scheduler.clone());
      timer.set_delegate(&host);
      timer.start();
      *host.timer.borrow_mut() = Some(timer);

      scheduler.run_all();
      assert_eq!(host.ticks.get(), 2);
    }
  }

  #[test]
  fn runs_on_a_real_run_loop() {
    let run_loop = Rc::new(RunLoop::new());
    let timer = CountdownTimer::with_tick_interval(3.0, Duration::from_millis(1), run_loop.clone());
    let recorder = Rc::new(Recorder::default());
    timer.set_delegate(&recorder);
    timer.start();
    run_loop.run();
    assert_eq!(recorder.notes().len(), 4);
    assert_eq!(recorder.notes().last(), Some(&Note::Expired(0.0)));
  }

  proptest! {
    #[test]
    fn whole_seconds_give_one_notification_per_second_plus_expiration(secs in 1u32..400) {
      let (scheduler, timer, recorder) = setup(f64::from(secs));
      timer.start();
      scheduler.run_all();
      let notes = recorder.notes();

      prop_assert_eq!(notes.len(), secs as usize + 1);
      prop_assert_eq!(notes.last().copied(), Some(Note::Expired(0.0)));
      for (i, note) in notes.iter().take(secs as usize).enumerate() {
        prop_assert_eq!(*note, Note::Tick(f64::from(secs) - i as f64));
      }
      prop_assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn dropping_at_any_point_stops_notifications(secs in 2u32..100, after in 0u32..100) {
      let (scheduler, timer, recorder) = setup(f64::from(secs));
      timer.start();
      for _ in 0..after.min(secs - 1) {
        scheduler.run_next();
      }
      let seen = recorder.notes().len();
      drop(timer);
      scheduler.run_all();
      prop_assert_eq!(recorder.notes().len(), seen);
    }
  }
}
