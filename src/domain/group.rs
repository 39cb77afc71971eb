//! SLIP39 group specifiers (`M-of-N`)

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Failure to turn an `M-of-N` string into a [`GroupDescriptor`]
///
/// The three cases are kept apart so the user can be told whether the text was
/// malformed, out of range, or a combination the splitter does not support.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GroupSpecError {
    #[error("Could not parse group specifier: \"{0}\"")]
    Syntax(String),

    #[error("Invalid group specifier \"{0}\": 1 <= M <= N <= 16")]
    Range(String),

    #[error("Invalid group specifier \"{0}\": 1-of-N groups where N > 1 are not supported.")]
    SingleThresholdGroup(String),
}

/// One share group: `threshold` of `count` member shares are needed
///
/// Invariants: `0 < threshold <= count <= 16`, and `count > 1` implies
/// `threshold != 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupDescriptor {
    threshold: u8,
    count: u8,
}

impl GroupDescriptor {
    /// Largest number of member shares in one group
    pub const MAX_COUNT: u8 = 16;

    /// The `1-of-1` group used when no `--group` is given
    pub const SINGLE: Self = Self {
        threshold: 1,
        count: 1,
    };

    #[must_use]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    #[must_use]
    pub fn count(&self) -> u8 {
        self.count
    }
}

impl FromStr for GroupDescriptor {
    type Err = GroupSpecError;

    /// Parses exactly `<threshold>-of-<count>`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedtool::domain::{GroupDescriptor, GroupSpecError};
    ///
    /// let group: GroupDescriptor = "2-of-3".parse().unwrap();
    /// assert_eq!((group.threshold(), group.count()), (2, 3));
    ///
    /// assert!(matches!("foo".parse::<GroupDescriptor>(), Err(GroupSpecError::Syntax(_))));
    /// assert!(matches!("5-of-3".parse::<GroupDescriptor>(), Err(GroupSpecError::Range(_))));
    /// assert!(matches!(
    ///     "1-of-5".parse::<GroupDescriptor>(),
    ///     Err(GroupSpecError::SingleThresholdGroup(_))
    /// ));
    /// ```
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let syntax = || GroupSpecError::Syntax(spec.to_string());

        let (threshold, count) = spec.split_once("-of-").ok_or_else(syntax)?;
        let threshold = parse_digits(threshold).ok_or_else(syntax)?;
        let count = parse_digits(count).ok_or_else(syntax)?;

        if !(0 < threshold && threshold <= count && count <= u64::from(Self::MAX_COUNT)) {
            return Err(GroupSpecError::Range(spec.to_string()));
        }
        if count > 1 && threshold == 1 {
            return Err(GroupSpecError::SingleThresholdGroup(spec.to_string()));
        }

        #[allow(
            clippy::cast_possible_truncation,
            reason = "both values were checked to be <= 16 above"
        )]
        let (threshold, count) = (threshold as u8, count as u8);

        Ok(Self { threshold, count })
    }
}

impl fmt::Display for GroupDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-of-{}", self.threshold, self.count)
    }
}

/// Non-negative decimal without sign or whitespace
///
/// Values too large for `u64` saturate so they still land in the range check.
fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(s.parse().unwrap_or(u64::MAX))
}
