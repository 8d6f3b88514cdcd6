use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Unit appended to every width when none is configured.
pub const DEFAULT_UNIT: &str = "px";

/// Exclusivity step used when none is configured. Divided by 100 to obtain
/// the gap subtracted from upper bounds.
pub const DEFAULT_STEP: f64 = 5.0;

/// Inputs accepted by [`Breakpoints::new`](super::Breakpoints::new).
///
/// Every field is optional; unset fields fall back to the defaults. A
/// configured `values` map replaces the default breakpoints entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BreakpointsOptions {
    pub values: Option<IndexMap<String, f64>>,
    pub unit: Option<String>,
    pub step: Option<f64>,
}

impl BreakpointsOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the breakpoint widths.
    #[must_use]
    pub fn with_values<K, I>(mut self, values: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, f64)>,
    {
        self.values = Some(
            values
                .into_iter()
                .map(|(key, width)| (key.into(), width))
                .collect(),
        );
        self
    }

    /// Add (or overwrite) a single breakpoint. The first call starts from an
    /// empty set rather than the defaults.
    #[must_use]
    pub fn with_value(mut self, key: impl Into<String>, width: f64) -> Self {
        self.values
            .get_or_insert_with(IndexMap::new)
            .insert(key.into(), width);
        self
    }

    #[must_use]
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn with_step(mut self, step: f64) -> Self {
        self.step = Some(step);
        self
    }
}
