//! Command-line arguments and how they override the config file.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use sleeptimer::{parse_menu_path, validate_timeout, Config, TimeIntervalExt};

/// Pause another app's playback when a countdown runs out.
#[derive(Debug, Parser)]
#[command(name = "sleeptimer", version, about)]
pub(crate) struct Args {
  /// Start a preset timer by label (see --list-presets)
  #[arg(long, conflicts_with_all = ["seconds", "minutes"])]
  pub(crate) preset: Option<String>,

  /// Timer length in seconds
  #[arg(long, conflicts_with = "minutes")]
  pub(crate) seconds: Option<f64>,

  /// Timer length in minutes
  #[arg(long)]
  pub(crate) minutes: Option<f64>,

  /// Bundle identifier of the app to act on
  #[arg(long)]
  pub(crate) bundle_id: Option<String>,

  /// Menu item to press, e.g. "Controls > Pause"
  #[arg(long)]
  pub(crate) menu_path: Option<String>,

  /// JSON config file
  #[arg(long)]
  pub(crate) config: Option<PathBuf>,

  /// Print preset labels and exit
  #[arg(long)]
  pub(crate) list_presets: bool,
}

impl Args {
  /// Config file (or defaults) with command-line overrides applied.
  pub(crate) fn load_config(&self) -> anyhow::Result<Config> {
    let mut config = match &self.config {
      Some(path) => {
        let json = fs::read_to_string(path)
          .with_context(|| format!("reading config {}", path.display()))?;
        Config::from_json(&json).with_context(|| format!("loading config {}", path.display()))?
      }
      None => Config::default(),
    };
    if let Some(bundle_id) = &self.bundle_id {
      config.bundle_id.clone_from(bundle_id);
    }
    if let Some(path) = &self.menu_path {
      config.menu_path = parse_menu_path(path)?;
    }
    Ok(config)
  }

  /// Requested timeout in seconds.
  pub(crate) fn timeout(&self, config: &Config) -> anyhow::Result<f64> {
    if let Some(label) = &self.preset {
      return Ok(config.preset(label)?.timeout);
    }
    if let Some(seconds) = self.seconds {
      return Ok(validate_timeout(seconds.seconds())?);
    }
    if let Some(minutes) = self.minutes {
      return Ok(validate_timeout(minutes.minutes())?);
    }
    bail!("no timeout given: use --preset, --seconds or --minutes");
  }
}
