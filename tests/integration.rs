use seedtool::domain::{Format, GroupDescriptor, GroupSpecError, IntsRange};
use seedtool::ur::{self, Ur};
use seedtool::{ErrorKind, ParamsError, RawParameters, RngMode, resolve};

const NO_STDIN: &[u8] = b"";

fn bip39_ur() -> String {
    // CBOR byte string of 16 zero bytes
    let mut cbor = vec![0x50];
    cbor.extend_from_slice(&[0u8; 16]);
    ur::encode(&Ur::new("crypto-bip39", cbor).unwrap(), 2500)
        .unwrap()
        .remove(0)
}

fn resolve_err(raw: &RawParameters) -> ParamsError {
    resolve(raw, NO_STDIN).unwrap_err()
}

#[test]
fn test_no_flags_produces_random_to_hex() {
    let config = resolve(&RawParameters::default(), NO_STDIN).unwrap();

    assert_eq!(config.input_format(), &Format::Random);
    assert_eq!(config.output_format(), &Format::Hex);
    assert_eq!(*config.count(), 16);
    assert_eq!(config.rng(), &RngMode::Cryptographic);
    assert!(config.multiple_arguments().is_empty());
}

#[test]
fn test_ur_bip39_input_to_bip39_output() {
    let raw = RawParameters {
        input_format: Some("ur".into()),
        output_format: Some("bip39".into()),
        args: vec![bip39_ur()],
        ..Default::default()
    };

    let config = resolve(&raw, NO_STDIN).unwrap();
    assert_eq!(config.input_format(), &Format::Bip39);
    assert!(config.is_ur_input());
    assert_eq!(config.ur_input().unwrap().ur_type(), "crypto-bip39");
    assert_eq!(config.ur_input().unwrap().cbor().len(), 17);
}

#[test]
fn test_ur_input_read_from_stdin() {
    let raw = RawParameters {
        input_format: Some("ur".into()),
        output_format: Some("bip39".into()),
        ..Default::default()
    };
    let stdin = format!("{}\n", bip39_ur());

    let config = resolve(&raw, stdin.as_bytes()).unwrap();
    assert_eq!(config.input_format(), &Format::Bip39);
}

#[test]
fn test_multi_part_ur_input() {
    let ur = Ur::new("crypto-seed", (0u8..60).collect()).unwrap();
    let parts = ur::encode(&ur, 20).unwrap();
    assert!(parts.len() > 1);

    let raw = RawParameters {
        input_format: Some("ur".into()),
        args: parts,
        ..Default::default()
    };
    let config = resolve(&raw, NO_STDIN).unwrap();
    assert_eq!(config.input_format(), &Format::Hex);
    assert_eq!(config.ur_input(), Some(&ur));
}

#[test]
fn test_non_ur_bip39_cannot_pass_through() {
    let raw = RawParameters {
        input_format: Some("bip39".into()),
        output_format: Some("bip39".into()),
        args: vec!["abandon".into()],
        ..Default::default()
    };
    let err = resolve_err(&raw);
    assert_eq!(err.kind(), ErrorKind::Compatibility);
}

#[test]
fn test_unknown_ur_type() {
    let bytes = ur::encode(&Ur::new("bytes", vec![0x41, 0x00]).unwrap(), 2500).unwrap();
    let raw = RawParameters {
        input_format: Some("ur".into()),
        args: bytes,
        ..Default::default()
    };
    let err = resolve_err(&raw);
    assert!(matches!(err, ParamsError::UnknownUrType(ref t) if t == "bytes"));
    assert_eq!(err.kind(), ErrorKind::UnknownName);
}

#[test]
fn test_malformed_ur_input() {
    let raw = RawParameters {
        input_format: Some("ur".into()),
        args: vec!["not a ur".into()],
        ..Default::default()
    };
    let err = resolve_err(&raw);
    assert!(matches!(err, ParamsError::UrDecode(_)));
    assert_eq!(err.kind(), ErrorKind::Grammar);
}

#[test]
fn test_ints_low_not_below_high() {
    let raw = RawParameters {
        output_format: Some("ints".into()),
        ints_low: Some("10".into()),
        ints_high: Some("5".into()),
        ..Default::default()
    };
    let err = resolve_err(&raw);
    assert!(matches!(err, ParamsError::IntsRange { low: 10, high: 5 }));
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn test_ints_full_byte_range() {
    let raw = RawParameters {
        output_format: Some("ints".into()),
        ints_low: Some("0".into()),
        ints_high: Some("255".into()),
        ..Default::default()
    };
    let config = resolve(&raw, NO_STDIN).unwrap();
    assert_eq!(
        config.output_format(),
        &Format::Ints(IntsRange::new(0, 255).unwrap())
    );
}

#[test]
fn test_high_without_ints_output() {
    let raw = RawParameters {
        output_format: Some("dice".into()),
        ints_high: Some("6".into()),
        ..Default::default()
    };
    let err = resolve_err(&raw);
    assert!(matches!(
        err,
        ParamsError::OptionRequiresOutput {
            option: "--high",
            format: "ints"
        }
    ));
}

#[test]
fn test_slip39_threshold_exceeds_groups() {
    let raw = RawParameters {
        output_format: Some("slip39".into()),
        groups: vec!["1-of-1".into(), "2-of-3".into()],
        groups_threshold: Some("3".into()),
        ..Default::default()
    };
    let err = resolve_err(&raw);
    assert!(matches!(
        err,
        ParamsError::GroupThreshold {
            threshold: 3,
            groups: 2
        }
    ));
}

#[test]
fn test_slip39_groups_resolved_in_order() {
    let raw = RawParameters {
        output_format: Some("slip39".into()),
        groups: vec!["1-of-1".into(), "2-of-3".into(), "3-of-5".into()],
        groups_threshold: Some("2".into()),
        ..Default::default()
    };
    let config = resolve(&raw, NO_STDIN).unwrap();
    let Format::Slip39(groups) = config.output_format() else {
        panic!("expected slip39 output");
    };
    assert_eq!(groups.threshold(), 2);
    let specs: Vec<String> = groups.groups().iter().map(ToString::to_string).collect();
    assert_eq!(specs, ["1-of-1", "2-of-3", "3-of-5"]);
}

#[test]
fn test_slip39_defaults_to_single_group() {
    let raw = RawParameters {
        output_format: Some("slip39".into()),
        ..Default::default()
    };
    let config = resolve(&raw, NO_STDIN).unwrap();
    let Format::Slip39(groups) = config.output_format() else {
        panic!("expected slip39 output");
    };
    assert_eq!(groups.threshold(), 1);
    assert_eq!(groups.groups(), &[GroupDescriptor::SINGLE]);
}

#[test]
fn test_slip39_bad_group_spec() {
    let raw = RawParameters {
        output_format: Some("slip39".into()),
        groups: vec!["1-of-5".into()],
        ..Default::default()
    };
    let err = resolve_err(&raw);
    assert!(matches!(
        err,
        ParamsError::GroupSpec(GroupSpecError::SingleThresholdGroup(_))
    ));
}

#[test]
fn test_group_without_slip39_output() {
    let raw = RawParameters {
        groups: vec!["2-of-3".into()],
        ..Default::default()
    };
    let err = resolve_err(&raw);
    assert!(err.to_string().contains("--group"));
    assert_eq!(err.kind(), ErrorKind::Combination);
}

#[test]
fn test_bip39_count_rules() {
    for (count, ok) in [("24", true), ("12", true), ("32", true), ("13", false), ("10", false)] {
        let raw = RawParameters {
            output_format: Some("bip39".into()),
            count: Some(count.into()),
            ..Default::default()
        };
        assert_eq!(resolve(&raw, NO_STDIN).is_ok(), ok, "count {count}");
    }
}

#[test]
fn test_count_rejected_for_hex_and_bc32_input() {
    for format in ["hex", "bc32"] {
        let raw = RawParameters {
            input_format: Some(format.into()),
            count: Some("16".into()),
            args: vec!["00".into()],
            ..Default::default()
        };
        let err = resolve_err(&raw);
        assert!(err.to_string().contains(format), "{err}");
        assert_eq!(err.kind(), ErrorKind::Combination);
    }
}

#[test]
fn test_empty_count_with_hex_input_is_absent() {
    let raw = RawParameters {
        input_format: Some("hex".into()),
        count: Some(String::new()),
        args: vec!["00ff".into()],
        ..Default::default()
    };
    let config = resolve(&raw, NO_STDIN).unwrap();
    assert_eq!(config.input_format(), &Format::Hex);
    assert_eq!(config.one_argument().unwrap(), "00ff");
}

#[test]
fn test_count_rejected_for_ur_seed_input() {
    let seed = ur::encode(&Ur::new("crypto-seed", vec![0x41, 0x00]).unwrap(), 2500).unwrap();
    let raw = RawParameters {
        input_format: Some("ur".into()),
        count: Some("16".into()),
        args: seed,
        ..Default::default()
    };
    assert!(matches!(
        resolve_err(&raw),
        ParamsError::CountNotAvailable { format: "hex" }
    ));
}

#[test]
fn test_arguments_with_random_input() {
    let raw = RawParameters {
        args: vec!["extra".into()],
        ..Default::default()
    };
    assert!(matches!(
        resolve_err(&raw),
        ParamsError::ArgumentsWithRandomInput
    ));
}

#[test]
fn test_unknown_input_format_named() {
    let raw = RawParameters {
        input_format: Some("morse".into()),
        ..Default::default()
    };
    let err = resolve_err(&raw);
    assert_eq!(err.to_string(), "Unknown input format: morse");
}

#[test]
fn test_cards_to_dice_incompatible() {
    let raw = RawParameters {
        input_format: Some("cards".into()),
        output_format: Some("dice".into()),
        args: vec!["6c".into()],
        ..Default::default()
    };
    let err = resolve_err(&raw);
    assert_eq!(
        err.to_string(),
        "Input format cards cannot be used with output format dice"
    );
}

#[test]
fn test_ur_output_rules() {
    let with_ur_input = RawParameters {
        input_format: Some("ur".into()),
        output_format: Some("bip39".into()),
        ur_output: true,
        args: vec![bip39_ur()],
        ..Default::default()
    };
    assert!(matches!(
        resolve_err(&with_ur_input),
        ParamsError::UrOutputWithUrInput
    ));

    let dice = RawParameters {
        output_format: Some("dice".into()),
        ur_output: true,
        ..Default::default()
    };
    assert!(matches!(resolve_err(&dice), ParamsError::UrOutputFormat("dice")));

    let slip39 = RawParameters {
        output_format: Some("slip39".into()),
        ur_output: true,
        max_part_length: Some("100".into()),
        ..Default::default()
    };
    let config = resolve(&slip39, NO_STDIN).unwrap();
    assert_eq!(config.max_part_length(), Some(100));
}

#[test]
fn test_first_failure_wins() {
    // Both the count and the output format are invalid; count is checked first
    let raw = RawParameters {
        count: Some("0".into()),
        output_format: Some("morse".into()),
        ..Default::default()
    };
    assert!(matches!(resolve_err(&raw), ParamsError::CountOutOfRange(0)));
}

#[test]
fn test_ur_output_assembly_of_resolved_config() {
    let raw = RawParameters {
        ur_output: true,
        max_part_length: Some("10".into()),
        ..Default::default()
    };
    let config = resolve(&raw, NO_STDIN).unwrap();
    let max = config.max_part_length().unwrap();

    let payload: Vec<u8> = (0..32).collect();
    let text = ur::assemble_ur_output(&payload, "crypto-seed", max).unwrap();
    let parts: Vec<&str> = text.split('\n').collect();
    assert!(parts.len() > 1);
    assert_eq!(ur::decode(&parts).unwrap().cbor(), payload.as_slice());
}
