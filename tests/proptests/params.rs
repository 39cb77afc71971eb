//! Property tests for count, group specifier and compatibility rules

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use seedtool::compat;
use seedtool::domain::{Format, GroupDescriptor, GroupSpecError};
use seedtool::{ErrorKind, RawParameters, resolve};

/// Any format from the catalog, with default options
#[derive(Clone, Debug)]
struct AnyFormat(Format);

impl Arbitrary for AnyFormat {
    fn arbitrary(g: &mut Gen) -> Self {
        let name = g.choose(&Format::NAMES).copied().unwrap_or("hex");
        AnyFormat(Format::lookup(name).expect("catalog name"))
    }
}

/// `--count` is accepted exactly when it lies in 1..=64
#[quickcheck]
fn prop_count_accepted_iff_in_range(count: i64) -> bool {
    let raw = RawParameters {
        count: Some(count.to_string()),
        ..Default::default()
    };
    let result = resolve(&raw, &b""[..]);
    match result {
        Ok(config) => (1..=64).contains(&count) && i64::from(*config.count()) == count,
        Err(err) => !(1..=64).contains(&count) && err.kind() == ErrorKind::Range,
    }
}

/// Well-formed `M-of-N` text parses exactly when the descriptor invariants hold
#[quickcheck]
fn prop_group_spec_invariants(threshold: u8, count: u8) -> bool {
    let spec = format!("{threshold}-of-{count}");
    let valid_range = 0 < threshold && threshold <= count && count <= 16;
    match spec.parse::<GroupDescriptor>() {
        Ok(group) => {
            valid_range
                && !(count > 1 && threshold == 1)
                && group.threshold() == threshold
                && group.count() == count
        }
        Err(GroupSpecError::Range(s)) => !valid_range && s == spec,
        Err(GroupSpecError::SingleThresholdGroup(_)) => valid_range && count > 1 && threshold == 1,
        Err(GroupSpecError::Syntax(_)) => false,
    }
}

/// Text without the `-of-` separator is always a syntax error naming the input
#[quickcheck]
fn prop_group_spec_garbage_is_syntax_error(text: String) -> bool {
    if text.contains("-of-") {
        return true;
    }
    text.parse::<GroupDescriptor>() == Err(GroupSpecError::Syntax(text))
}

/// Hex and BC32 output, and random/hex/BC32 input, pair with everything
#[quickcheck]
fn prop_universal_pairs(input: AnyFormat, output: AnyFormat, is_ur: bool) -> bool {
    let AnyFormat(input) = input;
    let AnyFormat(output) = output;
    let universal = matches!(output, Format::Hex | Format::Bc32)
        || matches!(input, Format::Random | Format::Hex | Format::Bc32);
    !universal || compat::check(&input, &output, is_ur).is_ok()
}

/// Incompatible pairs name both formats in the error
#[quickcheck]
fn prop_incompatible_names_both(input: AnyFormat, output: AnyFormat) -> bool {
    let AnyFormat(input) = input;
    let AnyFormat(output) = output;
    match compat::check(&input, &output, false) {
        Ok(()) => true,
        Err(err) => {
            let msg = err.to_string();
            msg.contains(input.name()) && msg.contains(output.name())
        }
    }
}
