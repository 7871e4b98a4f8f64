/*!
Sleeptimer - countdown that presses a menu item in another app when it runs out

```ignore
use sleeptimer::{Application, CountdownTimer, RunLoop, TimerDelegate};
use sleeptimer::platform::CurrentPlatform;

let run_loop = Rc::new(RunLoop::new());
let timer = CountdownTimer::new(30.0 * 60.0, run_loop.clone());
timer.set_delegate(&host); // host: Rc<impl TimerDelegate>
timer.start();
run_loop.run();

// In host.timer_expired():
let music = Application::find::<CurrentPlatform>("com.apple.Music");
music.press_menu_item(&["Controls", "Pause"]); // no-op if not running
```

Two independent pieces: a cooperative [`CountdownTimer`], and
[`press_menu_item`], which finds a menu item in another application's
accessibility tree by title path and presses it.
*/

pub mod a11y;
pub mod platform;

mod application;
mod config;
mod element;
mod interval;
mod menu;
mod scheduler;
mod timer;

#[cfg(test)]
mod test_support;

mod types;
pub use types::*;

pub use crate::application::Application;
pub use crate::config::{parse_menu_path, validate_timeout, Config, Preset};
pub use crate::element::{FromRawValue, UiElement};
pub use crate::interval::{status_text, TimeIntervalExt, IDLE_STATUS};
pub use crate::menu::press_menu_item;
pub use crate::scheduler::{RunLoop, Scheduler, Task};
pub use crate::timer::{
  CountdownTimer, TimerDelegate, TimerState, EXPIRY_TOLERANCE, TICK_INTERVAL,
};
