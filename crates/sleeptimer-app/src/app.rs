//! The host: owns at most one timer and acts on the target app when it expires.

use std::cell::RefCell;
use std::marker::PhantomData;
use std::rc::Rc;
use std::time::Duration;

use sleeptimer::platform::Platform;
use sleeptimer::{
  status_text, Application, Config, CountdownTimer, RunLoop, TimerDelegate, IDLE_STATUS,
  TICK_INTERVAL,
};

/// Sleep timer host for platform `P`.
pub(crate) struct SleepApp<P> {
  config: Config,
  run_loop: Rc<RunLoop>,
  tick_interval: Duration,
  timer: RefCell<Option<Rc<CountdownTimer>>>,
  status: RefCell<String>,
  _platform: PhantomData<P>,
}

impl<P: Platform + 'static> SleepApp<P> {
  pub(crate) fn new(config: Config, run_loop: Rc<RunLoop>) -> Rc<Self> {
    Self::with_tick_interval(config, run_loop, TICK_INTERVAL)
  }

  fn with_tick_interval(config: Config, run_loop: Rc<RunLoop>, tick_interval: Duration) -> Rc<Self> {
    Rc::new(Self {
      config,
      run_loop,
      tick_interval,
      timer: RefCell::new(None),
      status: RefCell::new(IDLE_STATUS.to_string()),
      _platform: PhantomData,
    })
  }

  /// Replace any running timer with a new one for `timeout` seconds.
  pub(crate) fn set_timer(self: &Rc<Self>, timeout: f64) {
    let timer =
      CountdownTimer::with_tick_interval(timeout, self.tick_interval, self.run_loop.clone());
    timer.set_delegate(self);
    timer.start();
    *self.timer.borrow_mut() = Some(timer);
  }

  /// Cancel the running timer, if any.
  pub(crate) fn disable_timer(&self) {
    if self.timer.borrow_mut().take().is_some() {
      log::info!("Timer disabled");
    }
    *self.status.borrow_mut() = IDLE_STATUS.to_string();
  }

  pub(crate) fn is_running(&self) -> bool {
    self.timer.borrow().is_some()
  }

  pub(crate) fn status(&self) -> String {
    self.status.borrow().clone()
  }
}

impl<P: Platform + 'static> TimerDelegate for SleepApp<P> {
  fn timer_tick(&self, timer: &CountdownTimer) {
    let text = status_text(timer.time_left());
    log::info!("{text}");
    *self.status.borrow_mut() = text;
  }

  fn timer_expired(&self, _timer: &CountdownTimer) {
    self.disable_timer();
    let target = Application::find::<P>(&self.config.bundle_id);
    if target.is_running() {
      log::info!(
        "Pressing {} in {}",
        self.config.menu_path.join(" > "),
        self.config.bundle_id
      );
    } else {
      log::info!("{} is not running, nothing to do", self.config.bundle_id);
    }
    target.press_menu_item(&self.config.menu_path);
    self.run_loop.stop();
  }
}
