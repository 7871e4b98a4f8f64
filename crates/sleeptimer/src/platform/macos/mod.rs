/*!
macOS backend over `AXUIElement`.

All platform-specific unsafe code lives under this module.
*/

#![allow(unsafe_code)]

mod handles;
mod mapping;
mod process;

pub use handles::ElementHandle;

use super::Platform;
use crate::types::ProcessId;
use objc2_application_services::{AXIsProcessTrusted, AXUIElement};

/// The macOS accessibility platform.
#[derive(Debug, Clone, Copy)]
pub struct MacOS;

impl Platform for MacOS {
  type Handle = ElementHandle;

  fn has_permissions() -> bool {
    unsafe { AXIsProcessTrusted() }
  }

  fn find_process(bundle_id: &str) -> Option<ProcessId> {
    process::find_by_bundle_id(bundle_id)
  }

  fn app_element(pid: ProcessId) -> Option<Self::Handle> {
    let element = unsafe { AXUIElement::new_application(pid.0) };
    Some(ElementHandle::new(element))
  }
}
