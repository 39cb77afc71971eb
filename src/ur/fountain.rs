//! Multi-part framing for messages too long for one UR part
//!
//! Each part body is the CBOR array
//! `[seq_num, seq_len, message_len, message_checksum, fragment]`. Only the
//! first `seq_len` "simple" parts are produced or decoded; these carry the
//! fragments in order, zero-padded to a common length.

use zeroize::Zeroizing;

use super::{CRC32, UrError};

/// Smallest fragment the encoder will cut a message into
pub const MIN_FRAGMENT_LENGTH: usize = 10;

/// One decoded multi-part body
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Part {
    pub seq_num: u32,
    pub seq_len: u32,
    pub message_len: usize,
    pub checksum: u32,
    pub fragment: Vec<u8>,
}

/// Chooses the fragment length that splits `message_len` bytes into the fewest
/// fragments no longer than `max_fragment_len`
pub(crate) fn nominal_fragment_length(message_len: usize, max_fragment_len: usize) -> usize {
    let max_count = (message_len / MIN_FRAGMENT_LENGTH).max(1);
    (1..=max_count)
        .map(|count| message_len.div_ceil(count))
        .find(|&len| len <= max_fragment_len)
        .unwrap_or(max_fragment_len)
}

/// Cuts `message` into zero-padded fragments
pub(crate) fn fragments(message: &[u8], max_fragment_len: usize) -> Vec<Zeroizing<Vec<u8>>> {
    let fragment_len = nominal_fragment_length(message.len(), max_fragment_len).max(1);
    message
        .chunks(fragment_len)
        .map(|chunk| {
            let mut fragment = Zeroizing::new(chunk.to_vec());
            fragment.resize(fragment_len, 0);
            fragment
        })
        .collect()
}

impl Part {
    pub fn to_cbor(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.fragment.len() + 24);
        out.push(0x85);
        write_header(&mut out, 0, u64::from(self.seq_num));
        write_header(&mut out, 0, u64::from(self.seq_len));
        write_header(&mut out, 0, self.message_len as u64);
        write_header(&mut out, 0, u64::from(self.checksum));
        write_header(&mut out, 2, self.fragment.len() as u64);
        out.extend_from_slice(&self.fragment);
        out
    }

    pub fn from_cbor(bytes: &[u8]) -> Result<Self, UrError> {
        let mut reader = Reader { bytes, pos: 0 };
        if reader.header(4)? != 5 {
            return Err(UrError::InvalidPart("expected a five element array".into()));
        }
        let seq_num = reader.uint_u32()?;
        let seq_len = reader.uint_u32()?;
        let message_len = usize::try_from(reader.header(0)?)
            .map_err(|_| UrError::InvalidPart("message length too large".into()))?;
        let checksum = reader.uint_u32()?;
        let fragment_len = usize::try_from(reader.header(2)?)
            .map_err(|_| UrError::InvalidPart("fragment length too large".into()))?;
        let fragment = reader.take(fragment_len)?.to_vec();
        if reader.pos != bytes.len() {
            return Err(UrError::InvalidPart("trailing bytes".into()));
        }
        Ok(Self {
            seq_num,
            seq_len,
            message_len,
            checksum,
            fragment,
        })
    }
}

/// Reassembles the message from the complete set of simple parts
///
/// Fountain-mixed parts (`seq_num > seq_len`) are skipped; they only matter
/// when the simple parts cannot rebuild the message on their own.
///
/// # Errors
/// Returns an error if parts disagree on the message they describe, a
/// fragment is missing, or the reassembled message fails its checksum
pub(crate) fn join(parts: &[Part]) -> Result<Zeroizing<Vec<u8>>, UrError> {
    let Some(first) = parts.first() else {
        return Err(UrError::Empty);
    };

    if first.seq_len == 0 {
        return Err(UrError::InvalidPart("sequence length of zero".into()));
    }
    let seq_len = first.seq_len as usize;
    let mixed = parts
        .iter()
        .map(|part| part.seq_num)
        .find(|&seq_num| seq_num > first.seq_len);
    let simple = parts
        .iter()
        .filter(|part| (1..=first.seq_len).contains(&part.seq_num))
        .count();
    if simple < seq_len {
        return Err(mixed.map_or(
            UrError::Incomplete {
                received: simple,
                expected: seq_len,
            },
            UrError::MixedPart,
        ));
    }

    let mut slots: Vec<Option<&[u8]>> = vec![None; seq_len];
    for part in parts {
        if part.seq_len != first.seq_len
            || part.message_len != first.message_len
            || part.checksum != first.checksum
            || part.fragment.len() != first.fragment.len()
        {
            return Err(UrError::InconsistentParts);
        }
        if part.seq_num == 0 {
            return Err(UrError::InvalidPart("sequence number of zero".into()));
        }
        if part.seq_num > part.seq_len {
            continue;
        }
        let idx = part.seq_num as usize - 1;
        match slots[idx] {
            Some(existing) if existing != part.fragment.as_slice() => {
                return Err(UrError::InconsistentParts);
            }
            Some(_) => {}
            None => slots[idx] = Some(part.fragment.as_slice()),
        }
    }

    let mut message = Zeroizing::new(Vec::with_capacity(first.fragment.len() * slots.len()));
    for (idx, slot) in slots.iter().enumerate() {
        let missing = mixed.map_or(UrError::MissingPart(idx + 1), UrError::MixedPart);
        let fragment = slot.ok_or(missing)?;
        message.extend_from_slice(fragment);
    }

    if message.len() < first.message_len {
        return Err(UrError::InconsistentParts);
    }
    message.truncate(first.message_len);

    if CRC32.checksum(&message) != first.checksum {
        return Err(UrError::Checksum);
    }
    Ok(message)
}

fn write_header(out: &mut Vec<u8>, major: u8, value: u64) {
    let major = major << 5;
    if value < 24 {
        #[allow(clippy::cast_possible_truncation, reason = "value < 24")]
        let small = value as u8;
        out.push(major | small);
    } else if let Ok(v) = u8::try_from(value) {
        out.extend_from_slice(&[major | 24, v]);
    } else if let Ok(v) = u16::try_from(value) {
        out.push(major | 25);
        out.extend_from_slice(&v.to_be_bytes());
    } else if let Ok(v) = u32::try_from(value) {
        out.push(major | 26);
        out.extend_from_slice(&v.to_be_bytes());
    } else {
        out.push(major | 27);
        out.extend_from_slice(&value.to_be_bytes());
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn take(&mut self, len: usize) -> Result<&'a [u8], UrError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|&end| end <= self.bytes.len())
            .ok_or_else(|| UrError::InvalidPart("truncated body".into()))?;
        let slice = &self.bytes[self.pos..end];
        self.pos = end;
        Ok(slice)
    }

    /// Reads a header of the given major type and returns its argument
    fn header(&mut self, major: u8) -> Result<u64, UrError> {
        let initial = self.take(1)?[0];
        if initial >> 5 != major {
            return Err(UrError::InvalidPart(format!(
                "expected CBOR major type {major}, found {}",
                initial >> 5
            )));
        }
        let value = match initial & 0x1f {
            v @ 0..=23 => u64::from(v),
            24 => u64::from(self.take(1)?[0]),
            25 => {
                let b = self.take(2)?;
                u64::from(u16::from_be_bytes([b[0], b[1]]))
            }
            26 => {
                let b = self.take(4)?;
                u64::from(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
            }
            27 => {
                let b = self.take(8)?;
                u64::from_be_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
            }
            other => {
                return Err(UrError::InvalidPart(format!(
                    "unsupported CBOR length encoding {other}"
                )));
            }
        };
        Ok(value)
    }

    fn uint_u32(&mut self) -> Result<u32, UrError> {
        u32::try_from(self.header(0)?)
            .map_err(|_| UrError::InvalidPart("integer out of range".into()))
    }
}
