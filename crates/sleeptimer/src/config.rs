/*!
Configuration for the sleep timer.

All values have sensible defaults. Create a custom config to override:

```ignore
use sleeptimer::Config;

let config = Config {
    bundle_id: "com.spotify.client".into(),
    menu_path: vec!["Playback".into(), "Play".into()],
    ..Default::default()
};
```

The host can also load one from JSON with [`Config::from_json`]; missing
fields keep their defaults.
*/

use serde::{Deserialize, Serialize};

use crate::interval::TimeIntervalExt;
use crate::timer::EXPIRY_TOLERANCE;
use crate::types::{Error, Result};

/// A named timeout offered to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
  /// Display label, also used to pick the preset (`"30 minutes"`).
  pub label: String,
  /// Timeout in seconds.
  pub timeout: f64,
}

impl Preset {
  /// Create a preset.
  pub fn new(label: impl Into<String>, timeout: f64) -> Self {
    Self {
      label: label.into(),
      timeout,
    }
  }
}

/// Sleep timer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
  /// Bundle identifier of the application to act on when the timer expires.
  /// Default: `com.apple.Music`.
  pub bundle_id: String,

  /// Menu titles, from the menu bar down, of the item to press.
  /// Default: `Controls > Pause`.
  pub menu_path: Vec<String>,

  /// Timeouts to choose from.
  /// Default: 5 minutes, 30 minutes, 1 hour, 90 minutes, 2 hours
  /// (plus 5 seconds in debug builds).
  pub presets: Vec<Preset>,
}

impl Default for Config {
  fn default() -> Self {
    let mut presets = Vec::new();
    #[cfg(debug_assertions)]
    presets.push(Preset::new("5 seconds", 5.0_f64.seconds()));
    presets.extend([
      Preset::new("5 minutes", 5.0_f64.minutes()),
      Preset::new("30 minutes", 30.0_f64.minutes()),
      Preset::new("1 hour", 60.0_f64.minutes()),
      Preset::new("90 minutes", 90.0_f64.minutes()),
      Preset::new("2 hours", 120.0_f64.minutes()),
    ]);

    Self {
      bundle_id: "com.apple.Music".to_string(),
      menu_path: vec!["Controls".to_string(), "Pause".to_string()],
      presets,
    }
  }
}

impl Config {
  /// Create a new config with default values.
  pub fn new() -> Self {
    Self::default()
  }

  /// Parse and validate a JSON config.
  pub fn from_json(json: &str) -> Result<Self> {
    let config: Self = serde_json::from_str(json)?;
    config.validate()?;
    Ok(config)
  }

  /// Check the menu path and every preset timeout.
  pub fn validate(&self) -> Result<()> {
    if self.menu_path.is_empty() || self.menu_path.iter().any(|s| s.trim().is_empty()) {
      return Err(Error::InvalidMenuPath(self.menu_path.join(" > ")));
    }
    for preset in &self.presets {
      validate_timeout(preset.timeout)?;
    }
    Ok(())
  }

  /// Find a preset by label, ignoring case.
  pub fn preset(&self, label: &str) -> Result<&Preset> {
    self
      .presets
      .iter()
      .find(|p| p.label.eq_ignore_ascii_case(label.trim()))
      .ok_or_else(|| Error::UnknownPreset(label.to_string()))
  }
}

/// Check that a timeout can be started: finite and at least one second.
/// Exactly one second passes, matching [`CountdownTimer::start`](crate::CountdownTimer::start).
pub fn validate_timeout(seconds: f64) -> Result<f64> {
  if seconds.is_finite() && seconds > 1.0 - EXPIRY_TOLERANCE {
    Ok(seconds)
  } else {
    Err(Error::InvalidTimeout(seconds))
  }
}

/// Parse `"Controls > Pause"` into `["Controls", "Pause"]`.
pub fn parse_menu_path(path: &str) -> Result<Vec<String>> {
  let segments: Vec<String> = path.split('>').map(|s| s.trim().to_string()).collect();
  if segments.iter().any(String::is_empty) {
    return Err(Error::InvalidMenuPath(path.to_string()));
  }
  Ok(segments)
}
