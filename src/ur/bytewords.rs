//! Bytewords "minimal" encoding used in UR bodies
//!
//! Each byte maps to one of 256 four-letter words; the minimal style keeps only
//! the first and last letter of the word. The encoded data is followed by the
//! big-endian CRC-32 of the data.

use std::collections::HashMap;
use std::sync::LazyLock;

use zeroize::Zeroizing;

use super::{CRC32, UrError};

#[rustfmt::skip]
const WORDS: [&str; 256] = [
    "able", "acid", "also", "apex", "aqua", "arch", "atom", "aunt",
    "away", "axis", "back", "bald", "barn", "belt", "beta", "bias",
    "blue", "body", "brag", "brew", "bulb", "buzz", "calm", "cash",
    "cats", "chef", "city", "claw", "code", "cola", "cook", "cost",
    "crux", "curl", "cusp", "cyan", "dark", "data", "days", "deli",
    "dice", "diet", "door", "down", "draw", "drop", "drum", "dull",
    "duty", "each", "easy", "echo", "edge", "epic", "even", "exam",
    "exit", "eyes", "fact", "fair", "fern", "figs", "film", "fish",
    "fizz", "flap", "flew", "flux", "foxy", "free", "frog", "fuel",
    "fund", "gala", "game", "gear", "gems", "gift", "girl", "glow",
    "good", "gray", "grim", "guru", "gush", "gyro", "half", "hang",
    "hard", "hawk", "heat", "help", "high", "hill", "holy", "hope",
    "horn", "huts", "iced", "idea", "idle", "inch", "inky", "into",
    "iris", "iron", "item", "jade", "jazz", "join", "jolt", "jowl",
    "judo", "jugs", "jump", "junk", "jury", "keep", "keno", "kept",
    "keys", "kick", "kiln", "king", "kite", "kiwi", "knob", "lamb",
    "lava", "lazy", "leaf", "legs", "liar", "limp", "lion", "list",
    "logo", "loud", "love", "luau", "luck", "lung", "main", "many",
    "math", "maze", "memo", "menu", "meow", "mild", "mint", "miss",
    "monk", "nail", "navy", "need", "news", "next", "noon", "note",
    "numb", "obey", "oboe", "omit", "onyx", "open", "oval", "owls",
    "paid", "part", "peck", "play", "plus", "poem", "pool", "pose",
    "puff", "puma", "purr", "quad", "quiz", "race", "ramp", "real",
    "redo", "rich", "road", "rock", "roof", "ruby", "ruin", "runs",
    "rust", "safe", "saga", "scar", "sets", "silk", "skew", "slot",
    "soap", "solo", "song", "stub", "surf", "swan", "taco", "task",
    "taxi", "tent", "tied", "time", "tiny", "toil", "tomb", "toys",
    "trip", "tuna", "twin", "ugly", "undo", "unit", "urge", "user",
    "vast", "very", "veto", "vial", "vibe", "view", "visa", "void",
    "vows", "wall", "wand", "warm", "wasp", "wave", "waxy", "webs",
    "what", "when", "whiz", "wolf", "work", "yank", "yawn", "yell",
    "yoga", "yurt", "zaps", "zero", "zest", "zinc", "zone", "zoom",
];

/// Static `HashMap` for O(1) minimal-pair-to-byte lookups
static MINIMAL_TO_BYTE: LazyLock<HashMap<[u8; 2], u8>> = LazyLock::new(|| {
    (0..=u8::MAX)
        .map(|byte| (minimal_pair(byte), byte))
        .collect()
});

fn minimal_pair(byte: u8) -> [u8; 2] {
    let word = WORDS[usize::from(byte)].as_bytes();
    [word[0], word[3]]
}

/// Encodes `data` followed by its checksum as minimal bytewords
pub(crate) fn encode_minimal(data: &[u8]) -> String {
    let checksum = CRC32.checksum(data).to_be_bytes();
    let mut out = String::with_capacity((data.len() + checksum.len()) * 2);
    for &byte in data.iter().chain(checksum.iter()) {
        let [first, last] = minimal_pair(byte);
        out.push(char::from(first));
        out.push(char::from(last));
    }
    out
}

/// Decodes minimal bytewords and verifies the trailing checksum
///
/// # Errors
/// Returns an error if the text has an odd length, contains a pair that is not
/// a byteword, is too short to hold a checksum, or the checksum does not match
pub(crate) fn decode_minimal(text: &str) -> Result<Zeroizing<Vec<u8>>, UrError> {
    let bytes = text.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(UrError::InvalidBytewords(text.to_string()));
    }

    let mut decoded = Zeroizing::new(Vec::with_capacity(bytes.len() / 2));
    for pair in bytes.chunks_exact(2) {
        let byte = MINIMAL_TO_BYTE
            .get(&[pair[0], pair[1]])
            .ok_or_else(|| UrError::InvalidBytewords(text.to_string()))?;
        decoded.push(*byte);
    }

    if decoded.len() < 5 {
        return Err(UrError::InvalidBytewords(text.to_string()));
    }

    let split = decoded.len() - 4;
    let expected = CRC32.checksum(&decoded[..split]);
    let actual = u32::from_be_bytes([
        decoded[split],
        decoded[split + 1],
        decoded[split + 2],
        decoded[split + 3],
    ]);
    if expected != actual {
        return Err(UrError::Checksum);
    }

    decoded.truncate(split);
    Ok(decoded)
}
