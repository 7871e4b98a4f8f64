/*! Running-application lookup via `NSRunningApplication`. */

#![allow(unused_unsafe)]

use crate::types::ProcessId;
use objc2_app_kit::NSRunningApplication;
use objc2_foundation::NSString;

/// PID of the first running application with this bundle identifier.
pub(super) fn find_by_bundle_id(bundle_id: &str) -> Option<ProcessId> {
  let identifier = NSString::from_str(bundle_id);
  let apps = unsafe { NSRunningApplication::runningApplicationsWithBundleIdentifier(&identifier) };
  let Some(app) = apps.firstObject() else {
    log::debug!("No running application with bundle id {bundle_id}");
    return None;
  };
  let pid = unsafe { app.processIdentifier() };
  if pid <= 0 {
    // -1 for apps that are not backed by a process yet
    return None;
  }
  Some(ProcessId(pid))
}
