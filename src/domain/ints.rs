//! Value range for the `ints` format

use crate::error::{ParamsError, Result};

/// Inclusive range of integers emitted by the `ints` format
///
/// Invariant: `0 <= low < high <= 255`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntsRange {
    low: u8,
    high: u8,
}

impl IntsRange {
    /// Range used when `--low`/`--high` are not given
    pub const DEFAULT: Self = Self { low: 1, high: 9 };

    /// Creates a new range
    ///
    /// # Errors
    /// Returns an error unless `0 <= low < high <= 255`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedtool::domain::IntsRange;
    ///
    /// let range = IntsRange::new(0, 255).unwrap();
    /// assert_eq!((range.low(), range.high()), (0, 255));
    ///
    /// assert!(IntsRange::new(10, 5).is_err());
    /// assert!(IntsRange::new(7, 7).is_err());
    /// ```
    pub fn new(low: i64, high: i64) -> Result<Self> {
        match (u8::try_from(low), u8::try_from(high)) {
            (Ok(l), Ok(h)) if l < h => Ok(Self { low: l, high: h }),
            _ => Err(ParamsError::IntsRange { low, high }),
        }
    }

    #[must_use]
    pub fn low(&self) -> u8 {
        self.low
    }

    #[must_use]
    pub fn high(&self) -> u8 {
        self.high
    }
}

impl Default for IntsRange {
    fn default() -> Self {
        Self::DEFAULT
    }
}
