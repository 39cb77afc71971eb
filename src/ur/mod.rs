//! Uniform Resources: typed binary payloads as text
//!
//! A UR is `ur:<type>/<body>` where the body is the payload in minimal
//! bytewords. Payloads longer than the part limit are split into
//! `ur:<type>/<seq>-<len>/<body>` parts, see [`fountain`].
//!
//! # Examples
//!
//! ```rust
//! use seedtool::ur::{self, Ur};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let ur = Ur::new("crypto-seed", vec![0xa1, 0x01, 0x50, 0x00])?;
//! let parts = ur::encode(&ur, 2500)?;
//! assert_eq!(parts.len(), 1);
//! assert!(parts[0].starts_with("ur:crypto-seed/"));
//!
//! let decoded = ur::decode(&parts)?;
//! assert_eq!(decoded, ur);
//! # Ok(())
//! # }
//! ```

mod bytewords;
pub mod fountain;

use std::fmt;

use crc::{CRC_32_ISO_HDLC, Crc};
use thiserror::Error;
use zeroize::Zeroizing;

use fountain::Part;

/// CRC32 algorithm for bytewords and message checksums
const CRC32: Crc<u32> = Crc::<u32>::new(&CRC_32_ISO_HDLC);

const SCHEME: &str = "ur:";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrError {
    #[error("no UR parts were given")]
    Empty,

    #[error("\"{0}\" does not start with \"ur:\"")]
    InvalidScheme(String),

    #[error("invalid UR type \"{0}\"")]
    InvalidType(String),

    #[error("\"{0}\" is not a valid UR part")]
    InvalidSequence(String),

    #[error("invalid bytewords \"{0}\"")]
    InvalidBytewords(String),

    #[error("checksum mismatch")]
    Checksum,

    #[error("invalid multi-part body: {0}")]
    InvalidPart(String),

    #[error("parts do not belong to the same message")]
    InconsistentParts,

    #[error("part {0} is a mixed fountain part, only simple parts are supported")]
    MixedPart(u32),

    #[error("missing part {0}")]
    MissingPart(usize),

    #[error("received {received} of {expected} parts")]
    Incomplete { received: usize, expected: usize },

    #[error("maximum part length must be at least {}", fountain::MIN_FRAGMENT_LENGTH)]
    PartLength,
}

/// A decoded UR: its declared type and CBOR payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ur {
    ur_type: String,
    cbor: Zeroizing<Vec<u8>>,
}

impl Ur {
    /// Creates a UR from a type and payload
    ///
    /// # Errors
    /// Returns an error if the type is empty or contains characters other than
    /// lowercase letters, digits and hyphens
    pub fn new(ur_type: impl Into<String>, cbor: Vec<u8>) -> Result<Self, UrError> {
        let ur_type = ur_type.into();
        if !is_valid_type(&ur_type) {
            return Err(UrError::InvalidType(ur_type));
        }
        Ok(Self {
            ur_type,
            cbor: Zeroizing::new(cbor),
        })
    }

    #[must_use]
    pub fn ur_type(&self) -> &str {
        &self.ur_type
    }

    #[must_use]
    pub fn cbor(&self) -> &[u8] {
        &self.cbor
    }
}

impl fmt::Display for Ur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SCHEME}{}/{}", self.ur_type, bytewords::encode_minimal(&self.cbor))
    }
}

fn is_valid_type(ur_type: &str) -> bool {
    !ur_type.is_empty()
        && ur_type
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

/// Decodes a UR from one single-part string or a complete set of parts
///
/// Parts are case-insensitive and may arrive in any order; blank records are
/// ignored.
///
/// # Errors
/// Returns an error if any part is malformed, the parts disagree, or the
/// message is incomplete
pub fn decode<S: AsRef<str>>(parts: &[S]) -> Result<Ur, UrError> {
    let parts: Vec<String> = parts
        .iter()
        .map(|p| p.as_ref().trim().to_ascii_lowercase())
        .filter(|p| !p.is_empty())
        .collect();

    let mut ur_type: Option<&str> = None;
    let mut single = None;
    let mut multi = Vec::new();

    for part in &parts {
        let rest = part
            .strip_prefix(SCHEME)
            .ok_or_else(|| UrError::InvalidScheme(part.clone()))?;
        let components: Vec<&str> = rest.split('/').collect();
        let part_type = components[0];
        if !is_valid_type(part_type) {
            return Err(UrError::InvalidType(part_type.to_string()));
        }
        match ur_type {
            Some(t) if t != part_type => return Err(UrError::InconsistentParts),
            _ => ur_type = Some(part_type),
        }

        match &components[1..] {
            [body] => single = Some(bytewords::decode_minimal(body)?),
            [sequence, body] => {
                let (seq_num, seq_len) = parse_sequence(sequence)
                    .ok_or_else(|| UrError::InvalidSequence(part.clone()))?;
                let cbor = bytewords::decode_minimal(body)?;
                let decoded = Part::from_cbor(&cbor)?;
                if decoded.seq_num != seq_num || decoded.seq_len != seq_len {
                    return Err(UrError::InvalidSequence(part.clone()));
                }
                multi.push(decoded);
            }
            _ => return Err(UrError::InvalidSequence(part.clone())),
        }
    }

    let Some(ur_type) = ur_type else {
        return Err(UrError::Empty);
    };

    let cbor = match single {
        Some(cbor) if parts.len() == 1 => cbor,
        Some(_) => return Err(UrError::InconsistentParts),
        None => fountain::join(&multi)?,
    };

    Ur::new(ur_type, cbor.to_vec())
}

/// Parses the `<seq>-<len>` component of a multi-part UR
fn parse_sequence(sequence: &str) -> Option<(u32, u32)> {
    let (seq_num, seq_len) = sequence.split_once('-')?;
    Some((seq_num.parse().ok()?, seq_len.parse().ok()?))
}

/// Encodes a UR as one or more parts
///
/// `max_fragment_len` bounds the byte length of each part's payload fragment,
/// not the length of the part text, which also carries the type, sequence,
/// CBOR framing and checksum as bytewords.
///
/// # Errors
/// Returns an error if the payload is empty or `max_fragment_len` is below
/// [`fountain::MIN_FRAGMENT_LENGTH`]
pub fn encode(ur: &Ur, max_fragment_len: usize) -> Result<Vec<String>, UrError> {
    if ur.cbor.is_empty() {
        return Err(UrError::Empty);
    }
    if max_fragment_len < fountain::MIN_FRAGMENT_LENGTH {
        return Err(UrError::PartLength);
    }

    let fragments = fountain::fragments(&ur.cbor, max_fragment_len);
    if fragments.len() == 1 {
        return Ok(vec![ur.to_string()]);
    }

    let checksum = CRC32.checksum(&ur.cbor);
    #[allow(
        clippy::cast_possible_truncation,
        reason = "fragment count is bounded by payload length / 10"
    )]
    let seq_len = fragments.len() as u32;

    let parts = fragments
        .iter()
        .zip(1..)
        .map(|(fragment, seq_num)| {
            let part = Part {
                seq_num,
                seq_len,
                message_len: ur.cbor.len(),
                checksum,
                fragment: fragment.to_vec(),
            };
            format!(
                "{SCHEME}{}/{seq_num}-{seq_len}/{}",
                ur.ur_type,
                bytewords::encode_minimal(&part.to_cbor())
            )
        })
        .collect();
    Ok(parts)
}

/// Encodes `payload` as a UR of `ur_type` and joins the parts one per line
///
/// `max_part_length` is the fragment byte limit passed to [`encode`].
///
/// # Errors
/// Returns an error if the type is invalid, the payload is empty, or the part
/// length is too small
pub fn assemble_ur_output(
    payload: &[u8],
    ur_type: &str,
    max_part_length: usize,
) -> Result<String, UrError> {
    let ur = Ur::new(ur_type, payload.to_vec())?;
    Ok(encode(&ur, max_part_length)?.join("\n"))
}
