use std::fmt;
use std::str::FromStr;

use super::error::BreakpointError;

/// The default breakpoint names.
///
/// Any string is a valid key for [`Breakpoints`](super::Breakpoints); this enum
/// only spells out the five names the default configuration ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Breakpoint {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
}

impl Breakpoint {
    /// Every default breakpoint in ascending width order.
    pub const ALL: [Breakpoint; 5] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }
}

impl AsRef<str> for Breakpoint {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Breakpoint {
    type Err = BreakpointError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Breakpoint::ALL
            .into_iter()
            .find(|bp| bp.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or_else(|| BreakpointError::unknown_key(value))
    }
}

/// One end of a width range: a configured breakpoint key, or a raw width in
/// the configured unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Edge<'a> {
    Key(&'a str),
    Width(f64),
}

impl<'a> From<&'a str> for Edge<'a> {
    fn from(key: &'a str) -> Self {
        Edge::Key(key)
    }
}

impl<'a> From<&'a String> for Edge<'a> {
    fn from(key: &'a String) -> Self {
        Edge::Key(key.as_str())
    }
}

impl From<Breakpoint> for Edge<'static> {
    fn from(key: Breakpoint) -> Self {
        Edge::Key(key.as_str())
    }
}

impl From<f64> for Edge<'_> {
    fn from(width: f64) -> Self {
        Edge::Width(width)
    }
}

impl From<u32> for Edge<'_> {
    fn from(width: u32) -> Self {
        Edge::Width(f64::from(width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_default_names_case_insensitively() {
        assert_eq!("md".parse::<Breakpoint>(), Ok(Breakpoint::Md));
        assert_eq!(" XL ".parse::<Breakpoint>(), Ok(Breakpoint::Xl));
        assert_eq!(
            "xxl".parse::<Breakpoint>(),
            Err(BreakpointError::unknown_key("xxl"))
        );
    }

    #[test]
    fn edges_convert_from_keys_and_widths() {
        assert_eq!(Edge::from("tablet"), Edge::Key("tablet"));
        assert_eq!(Edge::from(Breakpoint::Lg), Edge::Key("lg"));
        assert_eq!(Edge::from(500_u32), Edge::Width(500.0));
        assert_eq!(Edge::from(12.5), Edge::Width(12.5));
    }
}
