/*! Error types for host-facing input.

Accessibility faults are not represented here: they terminate the run
(see [`crate::UiElement`]), and missing menu paths are silent no-ops.
*/

/// Errors produced while validating timer and target configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("Accessibility permissions not granted")]
  PermissionDenied,

  #[error("Invalid timeout: {0} seconds (must be at least one second)")]
  InvalidTimeout(f64),

  #[error("Invalid menu path: {0:?}")]
  InvalidMenuPath(String),

  #[error("Unknown preset: {0}")]
  UnknownPreset(String),

  #[error("Invalid config: {0}")]
  Config(#[from] serde_json::Error),
}

/// Result type for sleep timer configuration.
pub type Result<T> = std::result::Result<T, Error>;
