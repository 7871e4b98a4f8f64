/*! Fallback platform for targets without an accessibility backend. */

use super::{ElementRef, Platform, RawValue};
use crate::a11y::{Action, Attribute, AxErrorCode};
use crate::types::ProcessId;

/// Platform with no accessibility API. No process is ever found.
#[derive(Debug, Clone, Copy)]
pub struct Unsupported;

/// Handle type of [`Unsupported`]. Uninhabited: no element can exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnsupportedHandle {}

impl ElementRef for UnsupportedHandle {
  fn copy_attribute(&self, _attribute: Attribute) -> Result<RawValue<Self>, AxErrorCode> {
    match *self {}
  }

  fn perform_action(&self, _action: Action) -> Result<(), AxErrorCode> {
    match *self {}
  }

  fn attribute_names(&self) -> Vec<String> {
    match *self {}
  }

  fn action_names(&self) -> Vec<String> {
    match *self {}
  }
}

impl Platform for Unsupported {
  type Handle = UnsupportedHandle;

  fn has_permissions() -> bool {
    false
  }

  fn find_process(bundle_id: &str) -> Option<ProcessId> {
    log::debug!("No accessibility backend on this platform, {bundle_id} treated as not running");
    None
  }

  fn app_element(_pid: ProcessId) -> Option<Self::Handle> {
    None
  }
}
