/*! Opaque `AXUIElement` handle implementing [`ElementRef`].

Reads return the raw `AXError` untouched. Deciding what a code means is
left to `UiElement`.
*/

#![allow(unsafe_code)]
#![allow(
  clippy::expect_used, // NonNull::new on stack pointers - never null
)]

use super::mapping::{action_to_macos, attribute_to_macos};
use crate::a11y::{Action, Attribute, AxErrorCode};
use crate::platform::{ElementRef, RawValue};
use objc2_application_services::{AXError, AXUIElement};
use objc2_core_foundation::{CFArray, CFBoolean, CFNumber, CFRetained, CFString, CFType};
use std::fmt;
use std::ptr::NonNull;

/// Opaque handle to a UI element. Clone is cheap (reference counted).
#[derive(Clone)]
pub struct ElementHandle {
  inner: CFRetained<AXUIElement>,
}

impl ElementHandle {
  pub(in crate::platform) const fn new(element: CFRetained<AXUIElement>) -> Self {
    Self { inner: element }
  }

  /// Fetch raw `CFType` attribute, keeping the `AXError` on failure.
  fn copy_raw(&self, attr: &CFString) -> Result<CFRetained<CFType>, AxErrorCode> {
    unsafe {
      let mut value: *const CFType = std::ptr::null();
      let result = self
        .inner
        .copy_attribute_value(attr, NonNull::new(&raw mut value).expect("value ptr"));
      if result != AXError::Success {
        return Err(AxErrorCode(result.0));
      }
      if value.is_null() {
        // Success with nothing written: same as kAXErrorNoValue
        return Err(AxErrorCode::NO_VALUE);
      }
      Ok(CFRetained::from_raw(NonNull::new_unchecked(
        value.cast_mut(),
      )))
    }
  }

  fn decode(value: CFRetained<CFType>) -> RawValue<Self> {
    if let Some(s) = value.downcast_ref::<CFString>() {
      return RawValue::String(s.to_string());
    }
    if let Some(b) = value.downcast_ref::<CFBoolean>() {
      return RawValue::Boolean(b.as_bool());
    }
    if let Some(n) = value.downcast_ref::<CFNumber>() {
      return n.as_f64().map_or(RawValue::Other, RawValue::Number);
    }
    let value = match value.downcast::<AXUIElement>() {
      Ok(element) => return RawValue::Element(Self::new(element)),
      Err(value) => value,
    };
    let Ok(array) = value.downcast::<CFArray>() else {
      return RawValue::Other;
    };
    // SAFETY: every CFArray element is a CFType
    let array: CFRetained<CFArray<CFType>> = unsafe { CFRetained::cast_unchecked(array) };
    let len = array.len();
    let mut elements = Vec::with_capacity(len);
    for i in 0..len {
      if let Some(item) = array.get(i) {
        if let Ok(element) = item.downcast::<AXUIElement>() {
          elements.push(Self::new(element));
        }
      }
    }
    RawValue::Elements(elements)
  }

  fn string_array(array_ref: *const CFArray<CFString>) -> Vec<String> {
    if array_ref.is_null() {
      return Vec::new();
    }
    let names =
      unsafe { CFRetained::<CFArray<CFString>>::from_raw(NonNull::new_unchecked(array_ref.cast_mut())) };
    let len = names.len();
    let mut result = Vec::with_capacity(len);
    for i in 0..len {
      if let Some(s) = names.get(i) {
        result.push(s.to_string());
      }
    }
    result
  }
}

impl ElementRef for ElementHandle {
  fn copy_attribute(&self, attribute: Attribute) -> Result<RawValue<Self>, AxErrorCode> {
    let name = CFString::from_static_str(attribute_to_macos(attribute));
    self.copy_raw(&name).map(Self::decode)
  }

  fn perform_action(&self, action: Action) -> Result<(), AxErrorCode> {
    let action_name = CFString::from_static_str(action_to_macos(action));
    let result = unsafe { self.inner.perform_action(&action_name) };
    if result == AXError::Success {
      Ok(())
    } else {
      Err(AxErrorCode(result.0))
    }
  }

  fn attribute_names(&self) -> Vec<String> {
    unsafe {
      let mut names_ref: *const CFArray<CFString> = std::ptr::null();
      let result = self.inner.copy_attribute_names(
        NonNull::new((&raw mut names_ref).cast::<*const CFArray>()).expect("names ptr"),
      );
      if result != AXError::Success {
        return Vec::new();
      }
      Self::string_array(names_ref)
    }
  }

  fn action_names(&self) -> Vec<String> {
    unsafe {
      let mut actions_ref: *const CFArray<CFString> = std::ptr::null();
      let result = self.inner.copy_action_names(
        NonNull::new((&raw mut actions_ref).cast::<*const CFArray>()).expect("actions ptr"),
      );
      if result != AXError::Success {
        return Vec::new();
      }
      Self::string_array(actions_ref)
    }
  }
}

impl fmt::Debug for ElementHandle {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ElementHandle").finish_non_exhaustive()
  }
}
