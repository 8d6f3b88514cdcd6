use thiserror::Error;

/// Errors reported while generating a media query.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BreakpointError {
    /// The key is not one of the configured breakpoints.
    #[error("unknown breakpoint key '{key}'")]
    UnknownKey { key: String },

    /// `not` was asked to negate the only configured breakpoint, which leaves
    /// no neighbouring breakpoint to open the complement from.
    #[error("breakpoint '{key}' has no complement: it is the only configured breakpoint")]
    NoComplement { key: String },
}

impl BreakpointError {
    pub fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }

    pub fn no_complement(key: impl Into<String>) -> Self {
        Self::NoComplement { key: key.into() }
    }
}
