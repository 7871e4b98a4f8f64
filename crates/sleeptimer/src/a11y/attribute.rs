//! Element attributes read by the core.

/// A named attribute on an external UI element.
///
/// Only `Title` and `Children` drive menu lookup. The rest are read
/// incidentally (diagnostics, reaching the menu bar from an app root).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
  /// Human-readable title (menu item label).
  Title,
  /// Ordered child elements.
  Children,
  /// Text content.
  Text,
  /// Menu bar of an application element.
  MenuBar,
  /// Top-level windows of an application element.
  Windows,
}

impl Attribute {
  /// All known attributes.
  pub const ALL: &'static [Self] = &[
    Self::Title,
    Self::Children,
    Self::Text,
    Self::MenuBar,
    Self::Windows,
  ];
}
