//! Group configuration for SLIP39 output

use log::debug;

use super::GroupDescriptor;
use crate::error::{ParamsError, Result};

/// Validated group threshold and group list
///
/// Enforces `0 < threshold <= groups.len()` and `groups.len() <= MAX_GROUPS`.
/// Group order is the order the `--group` options were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slip39Groups {
    threshold: u8,
    groups: Vec<GroupDescriptor>,
}

impl Slip39Groups {
    /// Largest number of groups in a split
    pub const MAX_GROUPS: usize = 16;

    /// Builds the configuration from raw group specifiers
    ///
    /// An empty `specs` list yields the single `1-of-1` group. A missing
    /// threshold defaults to 1.
    ///
    /// # Errors
    /// Returns an error if there are too many groups, a specifier is invalid,
    /// or the threshold is outside `1..=groups`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedtool::domain::Slip39Groups;
    ///
    /// let specs = vec!["1-of-1".to_string(), "2-of-3".to_string()];
    /// let config = Slip39Groups::from_specs(&specs, Some(2)).unwrap();
    /// assert_eq!(config.threshold(), 2);
    /// assert_eq!(config.groups().len(), 2);
    ///
    /// // Threshold may not exceed the number of groups
    /// assert!(Slip39Groups::from_specs(&specs, Some(3)).is_err());
    /// ```
    pub fn from_specs(specs: &[String], threshold: Option<i64>) -> Result<Self> {
        if specs.len() > Self::MAX_GROUPS {
            return Err(ParamsError::TooManyGroups {
                given: specs.len(),
                max: Self::MAX_GROUPS,
            });
        }

        let groups = if specs.is_empty() {
            vec![GroupDescriptor::SINGLE]
        } else {
            specs
                .iter()
                .map(|spec| spec.parse::<GroupDescriptor>())
                .collect::<std::result::Result<Vec<_>, _>>()?
        };

        let threshold = threshold.unwrap_or(1);
        let valid = usize::try_from(threshold).is_ok_and(|t| 0 < t && t <= groups.len());
        if !valid {
            return Err(ParamsError::GroupThreshold {
                threshold,
                groups: groups.len(),
            });
        }

        debug!("SLIP39 groups: {threshold} of {}", groups.len());

        #[allow(
            clippy::cast_possible_truncation,
            reason = "threshold <= groups.len() <= MAX_GROUPS (16)"
        )]
        let threshold = threshold as u8;

        Ok(Self { threshold, groups })
    }

    /// Number of groups that must meet their own threshold
    #[must_use]
    pub fn threshold(&self) -> u8 {
        self.threshold
    }

    #[must_use]
    pub fn groups(&self) -> &[GroupDescriptor] {
        &self.groups
    }
}

impl Default for Slip39Groups {
    fn default() -> Self {
        Self {
            threshold: 1,
            groups: vec![GroupDescriptor::SINGLE],
        }
    }
}
