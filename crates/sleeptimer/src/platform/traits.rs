/*!
Platform abstraction traits.

These traits define the contract between core code and platform implementations.
Platform-specific code (e.g., macOS) implements these traits.
Core code only uses these traits - never platform-specific types directly.

Handles are live views into a tree owned by another process. Nothing here
caches: every call is a round trip and may observe a different tree.
*/

use crate::a11y::{Action, Attribute, AxErrorCode};
use crate::types::ProcessId;

/// Raw attribute value as decoded from the platform.
///
/// Generic over handle type so element-valued attributes stay typed.
#[derive(Debug, Clone)]
pub enum RawValue<H> {
  /// String value (titles, text, roles).
  String(String),
  /// Numeric value.
  Number(f64),
  /// Boolean value.
  Boolean(bool),
  /// A single element (e.g. the menu bar of an application).
  Element(H),
  /// An ordered array of elements (e.g. children).
  Elements(Vec<H>),
  /// Anything the core has no mapping for.
  Other,
}

/// Per-element operations against the external accessibility API.
///
/// Clone is expected to be cheap (reference-counted).
pub trait ElementRef: Clone {
  /// Read one attribute. `Err` carries the platform's raw code untouched;
  /// classification happens in [`crate::UiElement`].
  fn copy_attribute(&self, attribute: Attribute) -> Result<RawValue<Self>, AxErrorCode>;

  /// Perform an action. Blocks until the target process answers.
  fn perform_action(&self, action: Action) -> Result<(), AxErrorCode>;

  /// Platform attribute names supported by this element (diagnostics only).
  fn attribute_names(&self) -> Vec<String>;

  /// Platform action names supported by this element (diagnostics only).
  fn action_names(&self) -> Vec<String>;
}

/// Platform-global operations.
pub trait Platform {
  /// Element handle type for this platform.
  type Handle: ElementRef;

  /// Check if accessibility permissions are granted.
  fn has_permissions() -> bool;

  /// Find a running process by bundle identifier. First match wins.
  fn find_process(bundle_id: &str) -> Option<ProcessId>;

  /// Get the root application element for a process, if one can be made.
  fn app_element(pid: ProcessId) -> Option<Self::Handle>;
}
