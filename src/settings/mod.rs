//! Configuration loading and resolution utilities.
//!
//! `load` is the primary entry point and returns a [`ResolvedConfig`] holding
//! the options the binary hands to the resolver. Exactly one configuration
//! file is read; command line flags and environment variables override its
//! fields, and a `--value` list replaces its breakpoints wholesale.

mod loader;
mod raw;
mod resolved;
mod sources;

pub(crate) use loader::load;
pub(crate) use resolved::{ResolvedConfig, SettingSource};
