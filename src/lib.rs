//! Build CSS media queries from a named set of responsive breakpoints.
//!
//! The root module re-exports the resolver types so that styling layers can
//! construct a [`Breakpoints`] value and ask it for `up`, `down`, `between`,
//! `only` and `not` queries without digging through the module hierarchy.
//!
//! ```
//! use breakpoints::{Breakpoint, Breakpoints};
//!
//! let bp = Breakpoints::default();
//! assert_eq!(bp.up(Breakpoint::Sm).unwrap(), "@media (min-width:600px)");
//! assert_eq!(bp.down("sm").unwrap(), "@media (max-width:599.95px)");
//! ```

pub mod app_dirs;
pub mod resolver;
pub mod logging;

pub use crate::resolver::{
    Breakpoint, BreakpointError, Breakpoints, BreakpointsOptions, DEFAULT_STEP, DEFAULT_UNIT,
    Edge, create_breakpoints, default_values, sort_values,
};
