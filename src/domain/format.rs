//! Seed representations and the catalog of their names

use std::fmt;

use super::{IntsRange, Slip39Groups};

/// A seed representation, with any per-format options it carries
///
/// Input and output formats are chosen independently; each lookup returns a
/// fresh value with the format's default options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Format {
    Random,
    Hex,
    Bits,
    Cards,
    Dice,
    Base6,
    Base10,
    Ints(IntsRange),
    Bip39,
    Slip39(Slip39Groups),
    Bc32,
}

impl Format {
    /// Every format name accepted by [`Format::lookup`]
    pub const NAMES: [&'static str; 11] = [
        "random", "hex", "bits", "cards", "dice", "base6", "base10", "ints", "bip39", "slip39",
        "bc32",
    ];

    /// Resolves a format by its exact, case-sensitive name
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seedtool::domain::{Format, IntsRange};
    ///
    /// assert_eq!(Format::lookup("hex"), Some(Format::Hex));
    /// assert_eq!(Format::lookup("ints"), Some(Format::Ints(IntsRange::DEFAULT)));
    /// assert_eq!(Format::lookup("HEX"), None);
    /// ```
    #[must_use]
    pub fn lookup(name: &str) -> Option<Self> {
        let format = match name {
            "random" => Self::Random,
            "hex" => Self::Hex,
            "bits" => Self::Bits,
            "cards" => Self::Cards,
            "dice" => Self::Dice,
            "base6" => Self::Base6,
            "base10" => Self::Base10,
            "ints" => Self::Ints(IntsRange::default()),
            "bip39" => Self::Bip39,
            "slip39" => Self::Slip39(Slip39Groups::default()),
            "bc32" => Self::Bc32,
            _ => return None,
        };
        Some(format)
    }

    /// Format carried by a decoded UR of the given type
    #[must_use]
    pub fn from_ur_type(ur_type: &str) -> Option<Self> {
        match ur_type {
            "crypto-seed" => Some(Self::Hex),
            "crypto-bip39" => Some(Self::Bip39),
            "crypto-slip39" => Some(Self::Slip39(Slip39Groups::default())),
            _ => None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Random => "random",
            Self::Hex => "hex",
            Self::Bits => "bits",
            Self::Cards => "cards",
            Self::Dice => "dice",
            Self::Base6 => "base6",
            Self::Base10 => "base10",
            Self::Ints(_) => "ints",
            Self::Bip39 => "bip39",
            Self::Slip39(_) => "slip39",
            Self::Bc32 => "bc32",
        }
    }

    /// Whether the format can be produced as output
    ///
    /// `random` only generates input.
    #[must_use]
    pub fn is_output(&self) -> bool {
        !matches!(self, Self::Random)
    }

    /// Whether the format accepts an explicit `--count` as input
    ///
    /// Hex and BC32 input carry their own length.
    #[must_use]
    pub fn accepts_count(&self) -> bool {
        !matches!(self, Self::Hex | Self::Bc32)
    }

    /// Whether the format can be emitted as a UR
    #[must_use]
    pub fn supports_ur_output(&self) -> bool {
        matches!(self, Self::Hex | Self::Bip39 | Self::Slip39(_))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
