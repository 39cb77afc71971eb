//! `Count` newtype for the number of output units

use crate::error::{ParamsError, Result};

/// Number of units to produce (1..=64)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Count(u8);

impl Count {
    /// Minimum valid count
    pub const MIN: u8 = 1;

    /// Maximum valid count
    pub const MAX: u8 = 64;

    /// Count used when none is given
    pub const DEFAULT: Self = Self(16);

    /// Creates a new count
    ///
    /// # Errors
    /// Returns an error if the value is outside 1..=64
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedtool::domain::Count;
    ///
    /// let count = Count::new(32).unwrap();
    /// assert_eq!(*count, 32);
    ///
    /// assert!(Count::new(0).is_err());
    /// assert!(Count::new(65).is_err());
    /// ```
    pub fn new(value: i64) -> Result<Self> {
        match u8::try_from(value) {
            Ok(v) if (Self::MIN..=Self::MAX).contains(&v) => Ok(Self(v)),
            _ => Err(ParamsError::CountOutOfRange(value)),
        }
    }

    /// Whether this many bytes can be expressed as a BIP39 mnemonic
    #[must_use]
    pub fn is_bip39_length(self) -> bool {
        self.0 % 2 == 0 && (12..=32).contains(&self.0)
    }

    /// Whether this many bytes can be split into SLIP39 shares
    #[must_use]
    pub fn is_slip39_length(self) -> bool {
        self.0 % 2 == 0 && (16..=32).contains(&self.0)
    }
}

impl Default for Count {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::ops::Deref for Count {
    type Target = u8;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
