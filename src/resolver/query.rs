use super::number::format_width;
use super::{BreakpointError, Breakpoints, Edge};

const MEDIA: &str = "@media";
const NEGATED_MEDIA: &str = "@media not all and";

impl Breakpoints {
    /// Match widths at or above `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BreakpointError::UnknownKey`] if `key` is not configured.
    pub fn up<'a>(&self, key: impl Into<Edge<'a>>) -> Result<String, BreakpointError> {
        let width = self.resolve(key.into())?;
        Ok(format!("{MEDIA} {}", self.min_width(width)))
    }

    /// Match widths strictly below `key`.
    ///
    /// # Errors
    ///
    /// Returns [`BreakpointError::UnknownKey`] if `key` is not configured.
    pub fn down<'a>(&self, key: impl Into<Edge<'a>>) -> Result<String, BreakpointError> {
        let width = self.resolve(key.into())?;
        Ok(format!("{MEDIA} {}", self.max_width(width)))
    }

    /// Match widths from `start` (inclusive) up to `end` (exclusive).
    ///
    /// A key `end` is looked up through its position in [`Self::keys`].
    ///
    /// # Errors
    ///
    /// Returns [`BreakpointError::UnknownKey`] if either key is not configured.
    pub fn between<'a, 'b>(
        &self,
        start: impl Into<Edge<'a>>,
        end: impl Into<Edge<'b>>,
    ) -> Result<String, BreakpointError> {
        let lower = self.resolve(start.into())?;
        let upper = match end.into() {
            Edge::Key(key) => self
                .index_of(key)
                .and_then(|index| self.values.get_index(index))
                .map(|(_, width)| *width)
                .ok_or_else(|| BreakpointError::unknown_key(key))?,
            Edge::Width(width) => width,
        };

        Ok(format!(
            "{MEDIA} {} and {}",
            self.min_width(lower),
            self.max_width(upper)
        ))
    }

    /// Match widths from `key` (inclusive) up to the next breakpoint
    /// (exclusive). The last breakpoint is open-ended.
    ///
    /// # Errors
    ///
    /// Returns [`BreakpointError::UnknownKey`] if `key` is not configured.
    pub fn only(&self, key: impl AsRef<str>) -> Result<String, BreakpointError> {
        let key = key.as_ref();
        let index = self.require_index(key)?;

        match self.keys.get(index + 1) {
            Some(next) => self.between(key, next),
            None => self.up(key),
        }
    }

    /// Match every width outside the range [`Self::only`] would match.
    ///
    /// # Errors
    ///
    /// Returns [`BreakpointError::UnknownKey`] if `key` is not configured, and
    /// [`BreakpointError::NoComplement`] if it is the only breakpoint.
    pub fn not(&self, key: impl AsRef<str>) -> Result<String, BreakpointError> {
        let key = key.as_ref();
        let index = self.require_index(key)?;

        if index == 0 {
            let second = self
                .keys
                .get(1)
                .ok_or_else(|| BreakpointError::no_complement(key))?;
            return self.up(second);
        }

        if index == self.keys.len() - 1 {
            return self.down(key);
        }

        let query = self.between(key, &self.keys[index + 1])?;
        Ok(query.replacen(MEDIA, NEGATED_MEDIA, 1))
    }

    fn resolve(&self, edge: Edge<'_>) -> Result<f64, BreakpointError> {
        match edge {
            Edge::Key(key) => self
                .width(key)
                .ok_or_else(|| BreakpointError::unknown_key(key)),
            Edge::Width(width) => Ok(width),
        }
    }

    fn require_index(&self, key: &str) -> Result<usize, BreakpointError> {
        self.index_of(key)
            .ok_or_else(|| BreakpointError::unknown_key(key))
    }

    fn min_width(&self, width: f64) -> String {
        format!("(min-width:{}{})", format_width(width), self.unit)
    }

    fn max_width(&self, width: f64) -> String {
        format!("(max-width:{}{})", format_width(width - self.gap()), self.unit)
    }
}
