//! Validation errors
//!
//! Every rule the parameter pipeline enforces has its own variant so the
//! message can name the offending value, option or format pair. Variants are
//! grouped into coarse categories through [`ParamsError::kind`].

use thiserror::Error;

use crate::domain::GroupSpecError;
use crate::ur::UrError;

pub type Result<T> = std::result::Result<T, ParamsError>;

/// Coarse category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed numeric, group or UR text
    Grammar,
    /// Value outside a required numeric bound
    Range,
    /// Mutually exclusive or misapplied options
    Combination,
    /// Input and output formats cannot be paired
    Compatibility,
    /// Unrecognized format name or UR type
    UnknownName,
    /// No positional arguments and nothing on stdin
    InputAbsent,
    /// Reading standard input failed
    Io,
}

#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("Option {option} expects an integer, got \"{value}\".")]
    InvalidInteger { option: &'static str, value: String },

    #[error("COUNT must be in [1-64] (got {0}).")]
    CountOutOfRange(i64),

    #[error("Unknown input format: {0}")]
    UnknownInputFormat(String),

    #[error("Unknown output format: {0}")]
    UnknownOutputFormat(String),

    #[error("Do not provide arguments when using the random (default) input format.")]
    ArgumentsWithRandomInput,

    #[error("No input provided.")]
    NoInput,

    #[error("Could not read input from stdin: {0}")]
    Stdin(#[from] std::io::Error),

    #[error("Could not decode UR input: {0}")]
    UrDecode(#[from] UrError),

    #[error("Unknown UR type: {0}")]
    UnknownUrType(String),

    #[error("The --count option is not available for {format} input.")]
    CountNotAvailable { format: &'static str },

    #[error("Input format {input} cannot be used with output format {output}")]
    Incompatible {
        input: &'static str,
        output: &'static str,
    },

    #[error("--low and --high must specify a range in [0-255] (got {low}..{high}).")]
    IntsRange { low: i64, high: i64 },

    #[error("Option {option} can only be used with the \"{format}\" output format.")]
    OptionRequiresOutput {
        option: &'static str,
        format: &'static str,
    },

    #[error("For BIP39 COUNT must be in [12-32] and even (got {0}).")]
    Bip39Count(u8),

    #[error("For SLIP39 COUNT must be in [16-32] and even (got {0}).")]
    Slip39Count(u8),

    #[error("There must be no more than {max} groups (got {given}).")]
    TooManyGroups { given: usize, max: usize },

    #[error(transparent)]
    GroupSpec(#[from] GroupSpecError),

    #[error("Group threshold must be in [1-{groups}], the number of groups (got {threshold}).")]
    GroupThreshold { threshold: i64, groups: usize },

    #[error("The --ur option may not be combined with the --in ur input method.")]
    UrOutputWithUrInput,

    #[error("The --ur option is only available for hex, BIP39 and SLIP39 output (not {0}).")]
    UrOutputFormat(&'static str),

    #[error("MAX_PART_LENGTH must be at least {min} (got {value}).")]
    MaxPartLength { value: i64, min: usize },

    #[error("Only one argument accepted (got {0}).")]
    SingleArgument(usize),
}

impl ParamsError {
    /// Category of this failure
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInteger { .. } | Self::UrDecode(_) => ErrorKind::Grammar,
            Self::GroupSpec(e) => match e {
                GroupSpecError::Syntax(_) => ErrorKind::Grammar,
                GroupSpecError::Range(_) | GroupSpecError::SingleThresholdGroup(_) => {
                    ErrorKind::Range
                }
            },
            Self::CountOutOfRange(_)
            | Self::IntsRange { .. }
            | Self::Bip39Count(_)
            | Self::Slip39Count(_)
            | Self::TooManyGroups { .. }
            | Self::GroupThreshold { .. }
            | Self::MaxPartLength { .. } => ErrorKind::Range,
            Self::ArgumentsWithRandomInput
            | Self::CountNotAvailable { .. }
            | Self::OptionRequiresOutput { .. }
            | Self::UrOutputWithUrInput
            | Self::UrOutputFormat(_)
            | Self::SingleArgument(_) => ErrorKind::Combination,
            Self::Incompatible { .. } => ErrorKind::Compatibility,
            Self::UnknownInputFormat(_) | Self::UnknownOutputFormat(_) | Self::UnknownUrType(_) => {
                ErrorKind::UnknownName
            }
            Self::NoInput => ErrorKind::InputAbsent,
            Self::Stdin(_) => ErrorKind::Io,
        }
    }
}

/// Parses the complete text of an option value as an integer
///
/// # Errors
/// Returns [`ParamsError::InvalidInteger`] naming the option when the value is
/// not an integer
pub(crate) fn parse_integer(option: &'static str, value: &str) -> Result<i64> {
    value.parse().map_err(|_| ParamsError::InvalidInteger {
        option,
        value: value.to_string(),
    })
}
