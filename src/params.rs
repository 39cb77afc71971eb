//! Parameter resolution
//!
//! [`resolve`] turns the raw command-line values into a
//! [`ResolvedConfiguration`], or stops at the first rule they break. The steps
//! run in a fixed order because later steps depend on what earlier ones chose
//! (the input format picked from a UR decides whether `--count` is allowed,
//! the output format decides which format-specific options apply).

use std::fmt;
use std::io::BufRead;

use log::{debug, info};
use zeroize::Zeroizing;

use crate::compat;
use crate::domain::{Count, Format, IntsRange, Slip39Groups};
use crate::error::{ParamsError, Result, parse_integer};
use crate::ur::{self, Ur, fountain::MIN_FRAGMENT_LENGTH};

/// Input format name that selects UR decoding
pub const UR_INPUT: &str = "ur";

/// Fragment length used when `--ur` is given without a value
pub const DEFAULT_MAX_PART_LENGTH: usize = 2500;

/// Command-line values before interpretation
///
/// `None` or an empty string means the option was not given. `groups` keeps
/// the order the `--group` options appeared in.
#[derive(Debug, Clone, Default)]
pub struct RawParameters {
    pub count: Option<String>,
    pub input_format: Option<String>,
    pub output_format: Option<String>,
    pub ints_low: Option<String>,
    pub ints_high: Option<String>,
    pub groups: Vec<String>,
    pub groups_threshold: Option<String>,
    pub deterministic: Option<Zeroizing<String>>,
    pub ur_output: bool,
    pub max_part_length: Option<String>,
    pub args: Vec<String>,
}

impl RawParameters {
    /// Whether resolving these parameters will read records from stdin
    #[must_use]
    pub fn expects_stdin(&self) -> bool {
        self.args.is_empty()
            && given(self.input_format.as_deref()).is_some_and(|name| name != "random")
    }
}

/// An option value, treating an empty string the same as an absent option
fn given(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

/// Source of random bytes for the conversion stage
#[derive(Clone, PartialEq, Eq)]
pub enum RngMode {
    /// Reproducible stream derived from the given seed text
    Deterministic(Zeroizing<String>),
    /// Operating system randomness
    Cryptographic,
}

impl fmt::Debug for RngMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Deterministic(_) => f.write_str("Deterministic(..)"),
            Self::Cryptographic => f.write_str("Cryptographic"),
        }
    }
}

/// Validated, internally consistent parameters for one conversion
#[derive(Debug, Clone)]
pub struct ResolvedConfiguration {
    input_format: Format,
    output_format: Format,
    count: Count,
    rng: RngMode,
    input: Zeroizing<Vec<String>>,
    ur_input: Option<Ur>,
    max_part_length: Option<usize>,
}

impl ResolvedConfiguration {
    #[must_use]
    pub fn input_format(&self) -> &Format {
        &self.input_format
    }

    #[must_use]
    pub fn output_format(&self) -> &Format {
        &self.output_format
    }

    #[must_use]
    pub fn count(&self) -> Count {
        self.count
    }

    #[must_use]
    pub fn rng(&self) -> &RngMode {
        &self.rng
    }

    /// The decoded UR when the input arrived with `--in ur`
    #[must_use]
    pub fn ur_input(&self) -> Option<&Ur> {
        self.ur_input.as_ref()
    }

    #[must_use]
    pub fn is_ur_input(&self) -> bool {
        self.ur_input.is_some()
    }

    /// Part length limit when UR output was requested
    #[must_use]
    pub fn max_part_length(&self) -> Option<usize> {
        self.max_part_length
    }

    #[must_use]
    pub fn is_ur_output(&self) -> bool {
        self.max_part_length.is_some()
    }

    /// The single input record
    ///
    /// # Errors
    /// Returns an error unless exactly one record was given
    pub fn one_argument(&self) -> Result<&str> {
        match self.input.as_slice() {
            [only] => Ok(only.as_str()),
            other => Err(ParamsError::SingleArgument(other.len())),
        }
    }

    /// All input records joined by single spaces
    #[must_use]
    pub fn combined_arguments(&self) -> Zeroizing<String> {
        Zeroizing::new(self.input.join(" "))
    }

    #[must_use]
    pub fn multiple_arguments(&self) -> &[String] {
        &self.input
    }
}

impl fmt::Display for ResolvedConfiguration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "input: {}", self.input_format)?;
        if let Some(ur) = &self.ur_input {
            write!(f, " (from ur:{})", ur.ur_type())?;
        }
        writeln!(f)?;
        writeln!(f, "output: {}", self.output_format)?;
        match &self.output_format {
            Format::Ints(range) => writeln!(f, "range: {}-{}", range.low(), range.high())?,
            Format::Slip39(config) => {
                let groups: Vec<String> = config.groups().iter().map(ToString::to_string).collect();
                writeln!(f, "groups: {} of [{}]", config.threshold(), groups.join(", "))?;
            }
            _ => {}
        }
        writeln!(f, "count: {}", *self.count)?;
        match self.rng {
            RngMode::Deterministic(_) => writeln!(f, "rng: deterministic")?,
            RngMode::Cryptographic => writeln!(f, "rng: cryptographic")?,
        }
        match self.max_part_length {
            Some(max) => write!(f, "ur output: max part length {max}"),
            None => write!(f, "ur output: no"),
        }
    }
}

/// What `--in` asked for before any input was read
enum InputSelection {
    Format(Format),
    Ur,
}

/// Runs every validation step in order
///
/// `stdin` is read to the end, one record per line, only when the input format
/// takes arguments and none were given on the command line.
///
/// # Errors
/// Returns the first rule the parameters break; no configuration is produced
/// in that case
pub fn resolve<R: BufRead>(raw: &RawParameters, stdin: R) -> Result<ResolvedConfiguration> {
    let count = validate_count(raw)?;
    let rng = validate_deterministic(raw);
    let selection = validate_input_format(raw)?;
    let (input_format, input, ur_input) = validate_input(raw, selection, stdin)?;
    validate_count_for_input_format(raw, &input_format)?;
    let output_format = validate_output_format(raw)?;
    compat::check(&input_format, &output_format, ur_input.is_some())?;
    let output_format = validate_ints_specific(raw, output_format)?;
    validate_bip39_specific(&output_format, count)?;
    let output_format = validate_slip39_specific(raw, output_format, count)?;
    let max_part_length = validate_ur(raw, &output_format, ur_input.is_some())?;

    info!("Resolved {input_format} -> {output_format} with count {}", *count);

    Ok(ResolvedConfiguration {
        input_format,
        output_format,
        count,
        rng,
        input,
        ur_input,
        max_part_length,
    })
}

fn validate_count(raw: &RawParameters) -> Result<Count> {
    let count = match given(raw.count.as_deref()) {
        Some(value) => Count::new(parse_integer("--count", value)?)?,
        None => Count::default(),
    };
    debug!("count: {}", *count);
    Ok(count)
}

fn validate_deterministic(raw: &RawParameters) -> RngMode {
    match raw.deterministic.as_ref().filter(|seed| !seed.is_empty()) {
        Some(seed) => {
            debug!("rng: deterministic");
            RngMode::Deterministic(seed.clone())
        }
        None => {
            debug!("rng: cryptographic");
            RngMode::Cryptographic
        }
    }
}

fn validate_input_format(raw: &RawParameters) -> Result<InputSelection> {
    match given(raw.input_format.as_deref()) {
        None => Ok(InputSelection::Format(Format::Random)),
        Some(UR_INPUT) => Ok(InputSelection::Ur),
        Some(name) => Format::lookup(name)
            .map(InputSelection::Format)
            .ok_or_else(|| ParamsError::UnknownInputFormat(name.to_string())),
    }
}

fn validate_input<R: BufRead>(
    raw: &RawParameters,
    selection: InputSelection,
    stdin: R,
) -> Result<(Format, Zeroizing<Vec<String>>, Option<Ur>)> {
    if let InputSelection::Format(Format::Random) = selection {
        if !raw.args.is_empty() {
            return Err(ParamsError::ArgumentsWithRandomInput);
        }
        return Ok((Format::Random, Zeroizing::new(Vec::new()), None));
    }

    let input = if raw.args.is_empty() {
        info!("Reading input from stdin until end of stream");
        Zeroizing::new(stdin.lines().collect::<std::io::Result<Vec<String>>>()?)
    } else {
        Zeroizing::new(raw.args.clone())
    };
    if input.is_empty() {
        return Err(ParamsError::NoInput);
    }
    debug!("input: {} record(s)", input.len());

    match selection {
        InputSelection::Format(format) => Ok((format, input, None)),
        InputSelection::Ur => {
            let decoded = ur::decode(input.as_slice())?;
            let format = Format::from_ur_type(decoded.ur_type())
                .ok_or_else(|| ParamsError::UnknownUrType(decoded.ur_type().to_string()))?;
            debug!("input: ur:{} selects {format}", decoded.ur_type());
            Ok((format, input, Some(decoded)))
        }
    }
}

fn validate_count_for_input_format(raw: &RawParameters, input_format: &Format) -> Result<()> {
    if given(raw.count.as_deref()).is_some() && !input_format.accepts_count() {
        return Err(ParamsError::CountNotAvailable {
            format: input_format.name(),
        });
    }
    Ok(())
}

fn validate_output_format(raw: &RawParameters) -> Result<Format> {
    let Some(name) = given(raw.output_format.as_deref()) else {
        return Ok(Format::Hex);
    };
    Format::lookup(name)
        .filter(Format::is_output)
        .ok_or_else(|| ParamsError::UnknownOutputFormat(name.to_string()))
}

fn validate_ints_specific(raw: &RawParameters, output_format: Format) -> Result<Format> {
    let Format::Ints(defaults) = &output_format else {
        for (option, value) in [("--low", &raw.ints_low), ("--high", &raw.ints_high)] {
            if given(value.as_deref()).is_some() {
                return Err(ParamsError::OptionRequiresOutput {
                    option,
                    format: "ints",
                });
            }
        }
        return Ok(output_format);
    };

    let low = match given(raw.ints_low.as_deref()) {
        Some(value) => parse_integer("--low", value)?,
        None => i64::from(defaults.low()),
    };
    let high = match given(raw.ints_high.as_deref()) {
        Some(value) => parse_integer("--high", value)?,
        None => i64::from(defaults.high()),
    };
    let range = IntsRange::new(low, high)?;
    debug!("ints range: {}-{}", range.low(), range.high());
    Ok(Format::Ints(range))
}

fn validate_bip39_specific(output_format: &Format, count: Count) -> Result<()> {
    if matches!(output_format, Format::Bip39) && !count.is_bip39_length() {
        return Err(ParamsError::Bip39Count(*count));
    }
    Ok(())
}

fn validate_slip39_specific(
    raw: &RawParameters,
    output_format: Format,
    count: Count,
) -> Result<Format> {
    let Format::Slip39(_) = output_format else {
        if !raw.groups.is_empty() {
            return Err(ParamsError::OptionRequiresOutput {
                option: "--group",
                format: "slip39",
            });
        }
        if given(raw.groups_threshold.as_deref()).is_some() {
            return Err(ParamsError::OptionRequiresOutput {
                option: "--group-threshold",
                format: "slip39",
            });
        }
        return Ok(output_format);
    };

    if !count.is_slip39_length() {
        return Err(ParamsError::Slip39Count(*count));
    }

    let threshold = given(raw.groups_threshold.as_deref())
        .map(|value| parse_integer("--group-threshold", value))
        .transpose()?;
    let groups = Slip39Groups::from_specs(&raw.groups, threshold)?;
    Ok(Format::Slip39(groups))
}

fn validate_ur(
    raw: &RawParameters,
    output_format: &Format,
    is_ur_input: bool,
) -> Result<Option<usize>> {
    if !raw.ur_output {
        return Ok(None);
    }
    if is_ur_input {
        return Err(ParamsError::UrOutputWithUrInput);
    }

    let max_part_length = match given(raw.max_part_length.as_deref()) {
        Some(value) => {
            let parsed = parse_integer("--ur", value)?;
            usize::try_from(parsed)
                .ok()
                .filter(|&len| len >= MIN_FRAGMENT_LENGTH)
                .ok_or(ParamsError::MaxPartLength {
                    value: parsed,
                    min: MIN_FRAGMENT_LENGTH,
                })?
        }
        None => DEFAULT_MAX_PART_LENGTH,
    };

    if !output_format.supports_ur_output() {
        return Err(ParamsError::UrOutputFormat(output_format.name()));
    }
    debug!("ur output: max part length {max_part_length}");
    Ok(Some(max_part_length))
}
