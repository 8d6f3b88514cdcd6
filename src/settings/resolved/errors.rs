use thiserror::Error;

use super::{ConfigSources, SettingSource};

/// What is wrong with a configured value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub(crate) enum Problem {
    #[error("must be a finite number")]
    NonFiniteStep,
    #[error("must not contain whitespace")]
    UnitWhitespace,
    #[error("breakpoint keys must not be empty")]
    EmptyKey,
    #[error("breakpoint keys must be unique")]
    DuplicateKey,
    #[error("widths must be finite and not negative")]
    InvalidWidth,
}

/// A configured value the resolver refuses, with the source it came from.
#[derive(Debug, Error)]
#[error("invalid value for {key} from {origin}: {problem} (value: {value})")]
pub(crate) struct ConfigError {
    pub(crate) key: &'static str,
    pub(crate) value: String,
    pub(crate) origin: SettingSource,
    pub(crate) problem: Problem,
}

impl ConfigError {
    pub(crate) fn non_finite_step(step: f64, sources: &ConfigSources) -> Self {
        Self {
            key: "step",
            value: step.to_string(),
            origin: sources.source_for_step(),
            problem: Problem::NonFiniteStep,
        }
    }

    pub(crate) fn unit_with_whitespace(unit: &str, sources: &ConfigSources) -> Self {
        Self {
            key: "unit",
            value: unit.to_string(),
            origin: sources.source_for_unit(),
            problem: Problem::UnitWhitespace,
        }
    }

    pub(crate) fn empty_key(width: f64, sources: &ConfigSources) -> Self {
        Self::breakpoint(format!("={width}"), sources, Problem::EmptyKey)
    }

    pub(crate) fn duplicate_key(key: &str, sources: &ConfigSources) -> Self {
        Self::breakpoint(key.to_string(), sources, Problem::DuplicateKey)
    }

    pub(crate) fn invalid_width(key: &str, width: f64, sources: &ConfigSources) -> Self {
        Self::breakpoint(format!("{key}={width}"), sources, Problem::InvalidWidth)
    }

    fn breakpoint(value: String, sources: &ConfigSources, problem: Problem) -> Self {
        Self {
            key: "values",
            value,
            origin: sources.source_for_values(),
            problem,
        }
    }
}
