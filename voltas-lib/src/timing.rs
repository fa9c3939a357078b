//! Voltas pulse timing: 80 data bits, MSB first, each a 1026µs mark followed
//! by a 2553µs (one) or 554µs (zero) space. No header; a footer mark and a
//! message gap close every copy.

use crate::checksum::{calc_checksum, valid_checksum};
use crate::constants::{
    BIT_MARK_US, CARRIER_HZ, DEFAULT_DUTY_PERCENT, DEFAULT_MESSAGE_GAP_US, ONE_SPACE_US, STATE_BITS, STATE_LENGTH,
    ZERO_SPACE_US,
};
use crate::error::VoltasError;
use crate::pulse::{GenericTiming, IrTransmitter, match_generic, send_generic};
use crate::state::State;
use tracing::{debug, info};

pub const VOLTAS_TIMING: GenericTiming = GenericTiming {
    header_mark: 0,
    header_space: 0,
    one_mark: BIT_MARK_US,
    one_space: ONE_SPACE_US,
    zero_mark: BIT_MARK_US,
    zero_space: ZERO_SPACE_US,
    footer_mark: BIT_MARK_US,
    gap: DEFAULT_MESSAGE_GAP_US,
    frequency_hz: CARRIER_HZ,
    msb_first: true,
    duty_percent: DEFAULT_DUTY_PERCENT,
};

/// Transmit `data` (a full state, checksum included) `repeat + 1` times.
/// Without modulation the carrier is disabled and marks drive the output directly.
pub fn send_voltas<T: IrTransmitter>(tx: &mut T, data: &[u8; STATE_LENGTH], repeat: u16, modulation: bool) {
    let timing = GenericTiming {
        frequency_hz: if modulation { VOLTAS_TIMING.frequency_hz } else { 0 },
        ..VOLTAS_TIMING
    };
    info!(
        bytes = %hex::encode_upper(data),
        repeat,
        carrier_hz = timing.frequency_hz,
        "Sending Voltas message"
    );
    send_generic(tx, &timing, data, STATE_BITS, repeat);
}

/// A state recovered from captured timings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    pub state: State,
    /// Bits actually matched; bytes past `bits / 8` are zero.
    pub bits: u16,
}

/// Decode one message starting at `raw[offset]`.
///
/// `strict` requires the full 80 bits and a valid checksum. Otherwise any
/// whole, nonzero number of bytes up to 80 bits is accepted and the checksum is not
/// looked at.
pub fn decode_voltas(raw: &[u32], offset: usize, nbits: u16, strict: bool) -> Result<Decoded, VoltasError> {
    if (strict && nbits != STATE_BITS) || nbits == 0 || nbits % 8 != 0 || nbits > STATE_BITS {
        return Err(VoltasError::UnexpectedBitCount {
            expected: STATE_BITS,
            actual: nbits,
        });
    }

    let bytes = match_generic(raw, offset, nbits, &VOLTAS_TIMING)?;
    let mut buf = [0u8; STATE_LENGTH];
    buf[..bytes.len()].copy_from_slice(&bytes);

    if strict && !valid_checksum(&buf) {
        let (expected, actual) = (calc_checksum(&buf), buf[STATE_LENGTH - 1]);
        debug!(expected, actual, "Rejected Voltas message with bad checksum");
        return Err(VoltasError::InvalidChecksum { expected, actual });
    }

    debug!(bits = nbits, bytes = %hex::encode_upper(buf), "Decoded Voltas message");
    Ok(Decoded {
        state: State::from(buf),
        bits: nbits,
    })
}
