//! Accessibility actions.
//!
//! Actions are fire-and-forget operations performed on UI elements.

/// Platform-agnostic action that can be performed on an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
  /// Primary activation (click, press, choose a menu item).
  Press,
}

impl Action {
  /// All known actions.
  pub const ALL: &'static [Self] = &[Self::Press];

  /// The platform's primary action for an element.
  pub const DEFAULT: Self = Self::Press;
}
