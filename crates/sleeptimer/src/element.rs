/*!
Typed accessor over one external UI element.

Every read goes through one two-way classification:

- "no value" and "attribute unsupported" become `None`
- any other error code terminates the run

There is no recoverable error path. An unexpected code means the
accessibility API is in a state this crate has no defined behavior for,
and acting on whatever came back would be worse than stopping. Action
failures are treated the same way.

Values of an unexpected type (a number where a string was asked for)
are also `None`.
*/

use std::fmt;

use crate::a11y::{Action, Attribute, AttributeFault, AxErrorCode};
use crate::platform::{ElementRef, RawValue};

/// A node in another application's UI tree.
///
/// Not owned: the tree may change or disappear between any two calls.
/// Nothing is cached; each accessor is a live query.
#[derive(Debug, Clone)]
pub struct UiElement<H> {
  handle: H,
}

impl<H: ElementRef> UiElement<H> {
  /// Wrap a platform handle.
  pub const fn new(handle: H) -> Self {
    Self { handle }
  }

  /// Read an attribute as `T`.
  ///
  /// # Panics
  ///
  /// On any error code other than "no value" / "attribute unsupported".
  pub fn attribute<T: FromRawValue<H>>(&self, attribute: Attribute) -> Option<T> {
    match self.handle.copy_attribute(attribute) {
      Ok(raw) => {
        let value = T::from_raw(raw);
        if value.is_none() {
          log::debug!("{attribute:?}: value of unexpected type, treating as absent");
        }
        value
      }
      Err(code) => match code.classify_read() {
        AttributeFault::Absent => {
          log::trace!("{attribute:?}: no value ({code})");
          None
        }
        AttributeFault::Fatal => fatal("reading attribute", attribute, code),
      },
    }
  }

  /// Ordered child elements, in the order the platform reports them.
  pub fn children(&self) -> Option<Vec<Self>> {
    self.attribute(Attribute::Children)
  }

  /// Title, if the element has one.
  pub fn title(&self) -> Option<String> {
    self.attribute(Attribute::Title)
  }

  /// Text content.
  pub fn text(&self) -> Option<String> {
    self.attribute(Attribute::Text)
  }

  /// Menu bar of an application element.
  pub fn menu_bar(&self) -> Option<Self> {
    self.attribute(Attribute::MenuBar)
  }

  /// Top-level windows of an application element.
  pub fn windows(&self) -> Option<Vec<Self>> {
    self.attribute(Attribute::Windows)
  }

  /// Perform `action`. No retry.
  ///
  /// # Panics
  ///
  /// If the platform reports any failure.
  pub fn perform(&self, action: Action) {
    if let Err(code) = self.handle.perform_action(action) {
      fatal("performing action", action, code);
    }
  }

  /// Perform the element's primary action (press a menu item).
  pub fn invoke_default_action(&self) {
    self.perform(Action::DEFAULT);
  }
}

impl<H: ElementRef> fmt::Display for UiElement<H> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "<AXUIElement {:?}/{:?}>",
      self.handle.attribute_names(),
      self.handle.action_names()
    )
  }
}

#[allow(clippy::panic)] // unexpected accessibility codes end the run
#[cold]
fn fatal(operation: &str, name: impl fmt::Debug, code: AxErrorCode) -> ! {
  log::error!("Error {operation} {name:?}: {code}");
  panic!("error {operation} {name:?}: {code}");
}

/// Conversion from a decoded platform value.
pub trait FromRawValue<H>: Sized {
  /// `None` if `raw` is not of this type.
  fn from_raw(raw: RawValue<H>) -> Option<Self>;
}

impl<H> FromRawValue<H> for String {
  fn from_raw(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::String(s) => Some(s),
      RawValue::Number(_)
      | RawValue::Boolean(_)
      | RawValue::Element(_)
      | RawValue::Elements(_)
      | RawValue::Other => None,
    }
  }
}

impl<H> FromRawValue<H> for f64 {
  fn from_raw(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::Number(n) => Some(n),
      RawValue::String(_)
      | RawValue::Boolean(_)
      | RawValue::Element(_)
      | RawValue::Elements(_)
      | RawValue::Other => None,
    }
  }
}

impl<H> FromRawValue<H> for bool {
  fn from_raw(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::Boolean(b) => Some(b),
      RawValue::String(_)
      | RawValue::Number(_)
      | RawValue::Element(_)
      | RawValue::Elements(_)
      | RawValue::Other => None,
    }
  }
}

impl<H: ElementRef> FromRawValue<H> for UiElement<H> {
  fn from_raw(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::Element(handle) => Some(Self::new(handle)),
      RawValue::String(_)
      | RawValue::Number(_)
      | RawValue::Boolean(_)
      | RawValue::Elements(_)
      | RawValue::Other => None,
    }
  }
}

impl<H: ElementRef> FromRawValue<H> for Vec<UiElement<H>> {
  fn from_raw(raw: RawValue<H>) -> Option<Self> {
    match raw {
      RawValue::Elements(handles) => Some(handles.into_iter().map(UiElement::new).collect()),
      RawValue::String(_)
      | RawValue::Number(_)
      | RawValue::Boolean(_)
      | RawValue::Element(_)
      | RawValue::Other => None,
    }
  }
}
