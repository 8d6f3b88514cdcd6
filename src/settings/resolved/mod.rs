use std::path::PathBuf;

use breakpoints::BreakpointsOptions;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Resolver options derived from the configuration file, environment and
/// command line, together with where each field came from.
#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub(crate) options: BreakpointsOptions,
    pub(crate) config_file: Option<PathBuf>,
    pub(crate) sources: ConfigSources,
}

impl ResolvedConfig {
    #[cfg(test)]
    pub(crate) fn from_options(options: BreakpointsOptions) -> Self {
        Self {
            options,
            config_file: None,
            sources: ConfigSources::default(),
        }
    }

    pub(super) fn validate(&self) -> Result<(), ConfigError> {
        validation::validate(&self.options, &self.sources)
    }

    /// Print a human readable summary of the effective configuration.
    pub(crate) fn print_summary(&self) {
        print!("{}", summary::format_summary(self));
    }
}
