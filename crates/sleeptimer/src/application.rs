/*!
A target application, resolved by bundle identifier.

Resolution happens once, at construction. If the application is not
running there is no root element, and every operation is a no-op.
*/

use crate::element::UiElement;
use crate::menu;
use crate::platform::{ElementRef, Platform};
use crate::types::ProcessId;

/// Another running application whose menus can be pressed.
#[derive(Debug, Clone)]
pub struct Application<H> {
  pid: Option<ProcessId>,
  root: Option<UiElement<H>>,
}

impl<H: ElementRef> Application<H> {
  /// Look up the first running application with `bundle_id` on platform `P`.
  pub fn find<P: Platform<Handle = H>>(bundle_id: &str) -> Self {
    let pid = P::find_process(bundle_id);
    let root = pid.and_then(P::app_element).map(UiElement::new);
    if let Some(pid) = pid {
      log::debug!("Resolved {bundle_id} to pid {pid}");
    }
    Self { pid, root }
  }

  /// Wrap an already-resolved root element.
  pub const fn from_root(pid: Option<ProcessId>, root: Option<UiElement<H>>) -> Self {
    Self { pid, root }
  }

  /// Whether a running process was found.
  pub const fn is_running(&self) -> bool {
    self.root.is_some()
  }

  /// PID of the resolved process.
  pub const fn pid(&self) -> Option<ProcessId> {
    self.pid
  }

  /// The application's menu bar.
  pub fn menu_bar(&self) -> Option<UiElement<H>> {
    self.root.as_ref()?.menu_bar()
  }

  /// Press a menu item by title path, starting at the menu bar
  /// (e.g. `["Controls", "Pause"]`).
  ///
  /// Silent no-op when the app is not running, has no menu bar, or has no
  /// such item. See [`menu::press_menu_item`].
  pub fn press_menu_item<S: AsRef<str>>(&self, path: &[S]) {
    let Some(menu_bar) = self.menu_bar() else {
      log::debug!("No menu bar available (running: {})", self.is_running());
      return;
    };
    menu::press_menu_item(&menu_bar, path);
  }
}
