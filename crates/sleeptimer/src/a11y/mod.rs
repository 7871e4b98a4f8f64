//! Cross-platform accessibility vocabulary.
//!
//! These types describe what the core asks of an external UI tree.
//! Platform-specific strings and codes are mapped in `platform/*/mapping.rs`.

mod action;
mod attribute;
mod error;

pub use action::Action;
pub use attribute::Attribute;
pub use error::{AttributeFault, AxErrorCode};
