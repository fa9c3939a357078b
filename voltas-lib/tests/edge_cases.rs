//! Tests for edge cases and error handling

mod common;

use common::*;

#[test]
fn test_raw_import_wrong_length() {
    let test_cases = vec![
        (vec![], "Empty buffer"),
        (vec![0x33; 9], "9 byte buffer"),
        (vec![0x33; 11], "11 byte buffer"),
    ];

    for (bytes, description) in test_cases {
        let mut ac = recording_remote();
        ac.state_mut().set_temp(27);
        let before = *ac.state();

        match ac.set_raw(&bytes) {
            Err(VoltasError::InvalidLength { expected, actual }) => {
                assert_eq!(expected, STATE_LENGTH, "{}", description);
                assert_eq!(actual, bytes.len(), "{}", description);
            }
            other => panic!("{}: Expected InvalidLength error, got: {:?}", description, other),
        }
        assert_eq!(ac.state(), &before, "{}: state changed on failed import", description);
    }
}

#[test]
fn test_from_hex_errors() {
    assert!(matches!(State::from_hex("zz"), Err(VoltasError::InvalidHex(_))));
    assert!(matches!(
        State::from_hex("3384"),
        Err(VoltasError::InvalidLength { actual: 2, .. })
    ));
}

#[test]
fn test_decode_insufficient_samples() {
    let result = decode_voltas(&CAPTURED_TIMINGS[..100], 0, STATE_BITS, true);
    assert_eq!(
        result,
        Err(VoltasError::InsufficientData {
            expected: 161,
            actual: 100
        })
    );

    // offset past the end of the buffer
    assert!(matches!(
        decode_voltas(&CAPTURED_TIMINGS, 500, STATE_BITS, false),
        Err(VoltasError::InsufficientData { actual: 0, .. })
    ));
}

#[test]
fn test_decode_corrupted_mark() {
    let mut raw = CAPTURED_TIMINGS;
    raw[40] = 3000;
    assert_eq!(
        decode_voltas(&raw, 0, STATE_BITS, false),
        Err(VoltasError::PulseMismatch {
            index: 40,
            kind: PulseKind::BitMark,
            measured: 3000
        })
    );
}

#[test]
fn test_decode_missing_footer() {
    let mut raw = CAPTURED_TIMINGS;
    raw[160] = 200;
    assert!(matches!(
        decode_voltas(&raw, 0, STATE_BITS, true),
        Err(VoltasError::PulseMismatch {
            kind: PulseKind::FooterMark,
            ..
        })
    ));
}

#[test]
fn test_decode_bit_count_rules() {
    for nbits in [0, 7, 81, 88] {
        assert!(
            matches!(
                decode_voltas(&CAPTURED_TIMINGS, 0, nbits, false),
                Err(VoltasError::UnexpectedBitCount { .. })
            ),
            "nbits {}",
            nbits
        );
    }
    assert!(matches!(
        decode_voltas(&CAPTURED_TIMINGS, 0, 64, true),
        Err(VoltasError::UnexpectedBitCount { expected: 80, actual: 64 })
    ));
}

#[test]
fn test_lenient_decode_rejects_empty_message() {
    // a lone footer mark would otherwise match zero bits
    assert_eq!(
        decode_voltas(&[1026], 0, 0, false),
        Err(VoltasError::UnexpectedBitCount { expected: 80, actual: 0 })
    );
}

#[test]
fn test_lenient_decode_ignores_checksum() {
    let mut raw = CAPTURED_TIMINGS;
    // flip the last data bit (a zero) of the checksum byte into a one
    raw[159] = 2560;
    assert!(matches!(
        decode_voltas(&raw, 0, STATE_BITS, true),
        Err(VoltasError::InvalidChecksum { expected: 0xE6, actual: 0xE7 })
    ));
    let decoded = decode_voltas(&raw, 0, STATE_BITS, false).unwrap();
    assert_eq!(decoded.state.checksum(), 0xE7);
    assert!(!decoded.state.has_valid_checksum());
}
