//! Subcommand handlers.

pub mod completions;
pub mod config;
pub mod convert;

use std::path::Path;

use anyhow::{Context, Result};
use rulemt::Config;

/// Load the config named on the command line, or the default one.
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}
