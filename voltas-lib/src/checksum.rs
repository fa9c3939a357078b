//! One's-complement checksum over every byte but the last.

/// Sum (mod 256) of all bytes except the trailing checksum byte, inverted.
///
/// An empty slice has no payload and yields 0.
pub fn calc_checksum(state: &[u8]) -> u8 {
    match state.split_last() {
        Some((_, payload)) => !sum_bytes(payload),
        None => 0,
    }
}

/// True when the last byte of `state` is the checksum of the rest.
/// An empty slice is vacuously valid.
pub fn valid_checksum(state: &[u8]) -> bool {
    match state.last() {
        Some(&stored) => stored == calc_checksum(state),
        None => true,
    }
}

fn sum_bytes(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, b| acc.wrapping_add(*b))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: [u8; 10] = [0x33, 0x84, 0x88, 0x18, 0x3B, 0x3B, 0x3B, 0x11, 0x00, 0xE6];

    #[test]
    fn checksum_of_captured_state() {
        assert_eq!(calc_checksum(&VALID), 0xE6);
        assert!(valid_checksum(&VALID));
    }

    #[test]
    fn shorter_span_is_not_valid() {
        assert!(!valid_checksum(&VALID[..9]));
    }

    #[test]
    fn empty_input() {
        assert_eq!(calc_checksum(&[]), 0);
        assert!(valid_checksum(&[]));
    }

    #[test]
    fn single_byte_has_empty_payload() {
        assert_eq!(calc_checksum(&[0x12]), 0xff);
        assert!(valid_checksum(&[0xff]));
    }

    #[test]
    fn trailing_byte_is_ignored() {
        let mut state = VALID;
        for b in [0x00, 0x7f, 0xff] {
            state[9] = b;
            assert_eq!(calc_checksum(&state), 0xE6);
        }
    }
}
