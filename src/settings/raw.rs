use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;

use breakpoints::BreakpointsOptions;

use crate::cli::CliArgs;

use super::resolved::{ConfigError, ConfigSources, ResolvedConfig, SettingSource};

/// Mirror of the configuration file before CLI overrides and validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
    values: Option<IndexMap<String, f64>>,
    unit: Option<String>,
    step: Option<f64>,
}

impl RawConfig {
    /// Apply CLI overrides on top of the file values, recording the origin of
    /// every field that ends up set.
    pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) -> ConfigSources {
        let mut sources = ConfigSources::default();

        if self.values.is_some() {
            sources.values = Some(SettingSource::ConfigKey("values"));
        }
        if self.unit.is_some() {
            sources.unit = Some(SettingSource::ConfigKey("unit"));
        }
        if self.step.is_some() {
            sources.step = Some(SettingSource::ConfigKey("step"));
        }

        if !cli.values.is_empty() {
            self.values = Some(cli.values.iter().cloned().collect());
            sources.values = Some(SettingSource::CliFlag("--value"));
        }
        if let Some(unit) = cli.unit.clone() {
            self.unit = Some(unit);
            sources.unit = cli.unit_source.clone();
        }
        if let Some(step) = cli.step {
            self.step = Some(step);
            sources.step = cli.step_source.clone();
        }

        sources
    }

    /// Validate the merged values and produce the resolver options.
    pub(super) fn resolve(
        self,
        sources: ConfigSources,
        config_file: Option<PathBuf>,
    ) -> Result<ResolvedConfig, ConfigError> {
        let values = match self.values {
            Some(values) => Some(trim_keys(values, &sources)?),
            None => None,
        };

        let config = ResolvedConfig {
            options: BreakpointsOptions {
                values,
                unit: self.unit,
                step: self.step,
            },
            config_file,
            sources,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Trim surrounding whitespace from every key, rejecting keys that collide
/// once trimmed.
fn trim_keys(
    values: IndexMap<String, f64>,
    sources: &ConfigSources,
) -> Result<IndexMap<String, f64>, ConfigError> {
    let mut trimmed = IndexMap::with_capacity(values.len());
    for (key, width) in values {
        let key = key.trim().to_string();
        if trimmed.insert(key.clone(), width).is_some() {
            return Err(ConfigError::duplicate_key(&key, sources));
        }
    }
    Ok(trimmed)
}
