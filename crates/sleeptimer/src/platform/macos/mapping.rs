/*!
Mappings from sleeptimer accessibility types to macOS AX* strings.
*/

use crate::a11y::{Action, Attribute};

/// macOS attribute string constants (kAX*Attribute).
mod ax_attribute {
  pub(super) const TITLE: &str = "AXTitle";
  pub(super) const CHILDREN: &str = "AXChildren";
  pub(super) const TEXT: &str = "AXText";
  pub(super) const MENU_BAR: &str = "AXMenuBar";
  pub(super) const WINDOWS: &str = "AXWindows";
}

/// Convert our Attribute to macOS attribute string.
pub(super) const fn attribute_to_macos(a: Attribute) -> &'static str {
  match a {
    Attribute::Title => ax_attribute::TITLE,
    Attribute::Children => ax_attribute::CHILDREN,
    Attribute::Text => ax_attribute::TEXT,
    Attribute::MenuBar => ax_attribute::MENU_BAR,
    Attribute::Windows => ax_attribute::WINDOWS,
  }
}

/// macOS action string constants (kAX*Action).
mod ax_action {
  pub(super) const PRESS: &str = "AXPress";
}

/// Convert our Action to macOS action string.
pub(super) const fn action_to_macos(a: Action) -> &'static str {
  match a {
    Action::Press => ax_action::PRESS,
  }
}
