use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Result, anyhow};
use breakpoints::app_dirs;
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;

/// Pick the configuration file to read: the explicit `--config` path, or the
/// first default location that exists unless `--no-config` was given.
pub(super) fn select_config_file(cli: &CliArgs) -> Option<PathBuf> {
    if let Some(path) = &cli.config {
        return Some(path.clone());
    }
    if cli.no_config {
        return None;
    }
    default_config_files()
        .into_iter()
        .find(|path| path.is_file())
}

/// Build a [`Config`] from at most one file. An explicit file must exist.
pub(super) fn build_config(file: Option<&Path>) -> Result<Config> {
    let mut builder = Config::builder();

    if let Some(path) = file {
        builder = builder.add_source(File::from(path.to_path_buf()).required(true));
    }

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

/// Discover the default configuration file locations, in lookup order.
pub(super) fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".breakpoints.toml"));
        files.push(current_dir.join("breakpoints.toml"));
    }

    files
}
