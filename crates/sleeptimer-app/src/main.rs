//! `sleeptimer` - start a countdown and pause another app's playback when it ends.

mod app;
mod cli;

use std::rc::Rc;

use clap::Parser;
use sleeptimer::platform::{CurrentPlatform, Platform};
use sleeptimer::RunLoop;

use crate::app::SleepApp;
use crate::cli::Args;

fn main() -> anyhow::Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let args = Args::parse();
  let config = args.load_config()?;

  if args.list_presets {
    for preset in &config.presets {
      println!("{}", preset.label);
    }
    return Ok(());
  }

  let timeout = args.timeout(&config)?;

  if cfg!(target_os = "macos") && !CurrentPlatform::has_permissions() {
    return Err(sleeptimer::Error::PermissionDenied.into());
  }

  let run_loop = Rc::new(RunLoop::new());
  let app = SleepApp::<CurrentPlatform>::new(config, Rc::clone(&run_loop));
  app.set_timer(timeout);
  run_loop.run();

  log::debug!("Exiting ({}, running: {})", app.status(), app.is_running());
  Ok(())
}
