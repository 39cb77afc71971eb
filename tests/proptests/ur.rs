//! Property tests for UR part encoding and decoding

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use seedtool::ur::{self, Ur};

/// Non-empty payload of up to a few hundred bytes
#[derive(Clone, Debug)]
struct Payload(Vec<u8>);

impl Arbitrary for Payload {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 300 + 1;
        Payload((0..len).map(|_| u8::arbitrary(g)).collect())
    }
}

/// Every part honors the fragment limit and the set decodes in any order
#[quickcheck]
fn prop_parts_decode_in_any_order(payload: Payload, max_fragment: u8, rotate: usize) -> bool {
    let Payload(bytes) = payload;
    let max_fragment = usize::from(max_fragment).max(10);
    let Ok(ur) = Ur::new("crypto-seed", bytes) else {
        return false;
    };
    let Ok(mut parts) = ur::encode(&ur, max_fragment) else {
        return false;
    };
    let count = parts.len();
    parts.rotate_left(rotate % count);
    ur::decode(&parts).is_ok_and(|decoded| decoded == ur)
}

/// Dropping any part of a multi-part UR makes it undecodable
#[quickcheck]
fn prop_missing_part_detected(payload: Payload, drop: usize) -> bool {
    let Payload(bytes) = payload;
    let Ok(ur) = Ur::new("crypto-bip39", bytes) else {
        return false;
    };
    let Ok(mut parts) = ur::encode(&ur, 10) else {
        return false;
    };
    if parts.len() < 2 {
        return true;
    }
    let idx = drop % parts.len();
    parts.remove(idx);
    ur::decode(&parts).is_err()
}
