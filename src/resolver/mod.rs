//! Breakpoint resolution and media-query generation.
//!
//! [`Breakpoints::new`] sorts the configured widths once and keeps the result
//! as an immutable snapshot. Every query method only reads that snapshot, so a
//! single value can be shared freely between threads.

mod error;
mod key;
mod number;
mod options;
mod query;
mod values;


use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, warn};

pub use error::BreakpointError;
pub use key::{Breakpoint, Edge};
pub use options::{BreakpointsOptions, DEFAULT_STEP, DEFAULT_UNIT};
pub use values::{default_values, sort_values};
use values::equal_widths;

/// A resolved set of breakpoints.
///
/// `keys` and `values` are both ordered by ascending width. The widths are the
/// exact pairs that were configured; only their order differs from the input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakpoints {
    keys: Vec<String>,
    values: IndexMap<String, f64>,
    unit: String,
    step: f64,
}

impl Breakpoints {
    /// Resolve `options`, falling back to the default widths, unit and step.
    #[must_use]
    pub fn new(options: BreakpointsOptions) -> Self {
        let BreakpointsOptions { values, unit, step } = options;

        let values = values.unwrap_or_else(default_values);
        let unit = unit.unwrap_or_else(|| DEFAULT_UNIT.to_string());
        let step = step.unwrap_or(DEFAULT_STEP);

        let sorted = sort_values(&values);
        let keys: Vec<String> = sorted.keys().cloned().collect();

        for (first, second) in equal_widths(&sorted) {
            warn!(first, second, "breakpoints share the same width");
        }
        debug!(?keys, %unit, step, "resolved breakpoints");

        Self {
            keys,
            values: sorted,
            unit,
            step,
        }
    }

    /// Breakpoint keys in ascending width order.
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Breakpoint widths, iterated in the same order as [`Self::keys`].
    #[must_use]
    pub fn values(&self) -> &IndexMap<String, f64> {
        &self.values
    }

    #[must_use]
    pub fn unit(&self) -> &str {
        &self.unit
    }

    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// The amount subtracted from upper bounds to make them exclusive.
    #[must_use]
    pub fn gap(&self) -> f64 {
        self.step / 100.0
    }

    /// Width configured for `key`, if any.
    #[must_use]
    pub fn width(&self, key: &str) -> Option<f64> {
        self.values.get(key).copied()
    }

    /// Position of `key` in [`Self::keys`].
    #[must_use]
    pub fn index_of(&self, key: &str) -> Option<usize> {
        self.keys.iter().position(|candidate| candidate == key)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::new(BreakpointsOptions::default())
    }
}

/// Build a [`Breakpoints`] value from `options`.
#[must_use]
pub fn create_breakpoints(options: BreakpointsOptions) -> Breakpoints {
    Breakpoints::new(options)
}
