//! Raw accessibility error codes and their classification.

use std::fmt;

/// Raw error code returned by the accessibility API.
///
/// Values follow the macOS `AXError` numbering, which is the only
/// backend. Unknown codes are kept as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxErrorCode(pub i32);

#[allow(missing_docs)]
impl AxErrorCode {
  pub const SUCCESS: Self = Self(0);
  pub const FAILURE: Self = Self(-25200);
  pub const ILLEGAL_ARGUMENT: Self = Self(-25201);
  pub const INVALID_UI_ELEMENT: Self = Self(-25202);
  pub const INVALID_UI_ELEMENT_OBSERVER: Self = Self(-25203);
  pub const CANNOT_COMPLETE: Self = Self(-25204);
  /// The attribute is not supported by this kind of element.
  pub const ATTRIBUTE_UNSUPPORTED: Self = Self(-25205);
  pub const ACTION_UNSUPPORTED: Self = Self(-25206);
  pub const NOTIFICATION_UNSUPPORTED: Self = Self(-25207);
  pub const NOT_IMPLEMENTED: Self = Self(-25208);
  pub const NOTIFICATION_ALREADY_REGISTERED: Self = Self(-25209);
  pub const NOTIFICATION_NOT_REGISTERED: Self = Self(-25210);
  pub const API_DISABLED: Self = Self(-25211);
  /// The attribute exists but currently has no value.
  pub const NO_VALUE: Self = Self(-25212);
  pub const PARAMETERIZED_ATTRIBUTE_UNSUPPORTED: Self = Self(-25213);
  pub const NOT_ENOUGH_PRECISION: Self = Self(-25214);

  const NAMES: &'static [(Self, &'static str)] = &[
    (Self::SUCCESS, "kAXErrorSuccess"),
    (Self::FAILURE, "kAXErrorFailure"),
    (Self::ILLEGAL_ARGUMENT, "kAXErrorIllegalArgument"),
    (Self::INVALID_UI_ELEMENT, "kAXErrorInvalidUIElement"),
    (
      Self::INVALID_UI_ELEMENT_OBSERVER,
      "kAXErrorInvalidUIElementObserver",
    ),
    (Self::CANNOT_COMPLETE, "kAXErrorCannotComplete"),
    (Self::ATTRIBUTE_UNSUPPORTED, "kAXErrorAttributeUnsupported"),
    (Self::ACTION_UNSUPPORTED, "kAXErrorActionUnsupported"),
    (Self::NOTIFICATION_UNSUPPORTED, "kAXErrorNotificationUnsupported"),
    (Self::NOT_IMPLEMENTED, "kAXErrorNotImplemented"),
    (
      Self::NOTIFICATION_ALREADY_REGISTERED,
      "kAXErrorNotificationAlreadyRegistered",
    ),
    (
      Self::NOTIFICATION_NOT_REGISTERED,
      "kAXErrorNotificationNotRegistered",
    ),
    (Self::API_DISABLED, "kAXErrorAPIDisabled"),
    (Self::NO_VALUE, "kAXErrorNoValue"),
    (
      Self::PARAMETERIZED_ATTRIBUTE_UNSUPPORTED,
      "kAXErrorParameterizedAttributeUnsupported",
    ),
    (Self::NOT_ENOUGH_PRECISION, "kAXErrorNotEnoughPrecision"),
  ];

  /// Symbolic name, if the code is a known one.
  pub fn name(self) -> Option<&'static str> {
    Self::NAMES
      .iter()
      .find(|(code, _)| *code == self)
      .map(|(_, name)| *name)
  }

  /// Classify a failed attribute read.
  ///
  /// "No value" and "attribute unsupported" both mean the element simply
  /// carries nothing for that attribute. Everything else is a fault.
  pub const fn classify_read(self) -> AttributeFault {
    match self {
      Self::NO_VALUE | Self::ATTRIBUTE_UNSUPPORTED => AttributeFault::Absent,
      _ => AttributeFault::Fatal,
    }
  }
}

impl fmt::Display for AxErrorCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.name() {
      Some(name) => write!(f, "{name} ({})", self.0),
      None => write!(f, "AXError({})", self.0),
    }
  }
}

/// How a failed attribute read must be treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeFault {
  /// The element legitimately has no value. Not an error.
  Absent,
  /// The API is in a state the core has no defined behavior for.
  Fatal,
}
