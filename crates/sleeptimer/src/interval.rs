/*! Time interval helpers. Intervals are plain `f64` seconds. */

/// Seconds in a minute.
const MINUTE: f64 = 60.0;

/// Build intervals from literals: `5.0_f64.minutes()`.
pub trait TimeIntervalExt {
  /// This many seconds.
  fn seconds(self) -> f64;
  /// This many minutes, in seconds.
  fn minutes(self) -> f64;
}

impl TimeIntervalExt for f64 {
  fn seconds(self) -> f64 {
    self
  }

  fn minutes(self) -> f64 {
    self * MINUTE
  }
}

/// Above this many seconds the status shows minutes.
const MINUTES_DISPLAY_THRESHOLD: i64 = 2 * 60;

/// Status line for a running timer: `"25 minutes left"`, `"90 seconds left"`.
#[allow(clippy::cast_possible_truncation)] // whole seconds are what is shown
pub fn status_text(time_left: f64) -> String {
  let secs = time_left as i64;
  if secs > MINUTES_DISPLAY_THRESHOLD {
    format!("{} minutes left", secs / 60)
  } else {
    format!("{secs} seconds left")
  }
}

/// Status line when no timer is running.
pub const IDLE_STATUS: &str = "Timer is not running";
