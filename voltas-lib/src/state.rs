//! # Voltas state buffer
//!
//! A Voltas command is a fixed 10-byte record. Every named setting lives in a
//! bit range of one byte, described here by a [`Field`] constant and read or
//! written with plain shift-and-mask helpers.
//!
//! ```text
//! byte 0  bit 0      SwingH           bits 1-7  reserved
//! byte 1  bits 0-3   Mode             bits 5-7  FanSpeed
//! byte 2  bits 0-2   SwingV   bit 3 Wifi   bit 5 Turbo   bit 6 Sleep   bit 7 Power
//! byte 3  bits 0-3   Temp (°C - 16)   bit 6 Econo   bit 7 TempSet
//! byte 4  bit 0      OffTimer24h4
//! byte 5  bit 0      OffTimer24h5     bit 7 TimerAdd12Hr
//! byte 7  bits 4-7   TimerHrs
//! byte 8  bit 5      Light            bit 6 OffTimerEnable
//! byte 9             Checksum
//! ```
//!
//! Bits not covered by a field are carried through unchanged.

use crate::checksum::calc_checksum;
use crate::constants::{CHECKSUM_INDEX, STATE_LENGTH};
use crate::error::VoltasError;
use tracing::warn;

/// Location of a bit field inside the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Byte index into the state
    pub byte: usize,
    /// Position of the least significant bit
    pub offset: u8,
    /// Width in bits (1..=8)
    pub width: u8,
}

impl Field {
    pub const fn new(byte: usize, offset: u8, width: u8) -> Self {
        Self { byte, offset, width }
    }

    /// Unshifted mask covering `width` bits.
    pub const fn mask(&self) -> u8 {
        (((1u16 << self.width) - 1) & 0xff) as u8
    }

    pub fn get(&self, raw: &[u8; STATE_LENGTH]) -> u8 {
        (raw[self.byte] >> self.offset) & self.mask()
    }

    /// Writes `value` into the field. Bits above `width` are dropped.
    pub fn set(&self, raw: &mut [u8; STATE_LENGTH], value: u8) {
        let mask = self.mask() << self.offset;
        raw[self.byte] = (raw[self.byte] & !mask) | ((value << self.offset) & mask);
    }

    pub fn get_flag(&self, raw: &[u8; STATE_LENGTH]) -> bool {
        self.get(raw) != 0
    }

    pub fn set_flag(&self, raw: &mut [u8; STATE_LENGTH], on: bool) {
        self.set(raw, on as u8);
    }
}

pub const SWING_H: Field = Field::new(0, 0, 1);
pub const MODE: Field = Field::new(1, 0, 4);
pub const FAN_SPEED: Field = Field::new(1, 5, 3);
pub const SWING_V: Field = Field::new(2, 0, 3);
pub const WIFI: Field = Field::new(2, 3, 1);
pub const TURBO: Field = Field::new(2, 5, 1);
pub const SLEEP: Field = Field::new(2, 6, 1);
pub const POWER: Field = Field::new(2, 7, 1);
pub const TEMP: Field = Field::new(3, 0, 4);
pub const ECONO: Field = Field::new(3, 6, 1);
pub const TEMP_SET: Field = Field::new(3, 7, 1);
pub const OFF_TIMER_24H_4: Field = Field::new(4, 0, 1);
pub const OFF_TIMER_24H_5: Field = Field::new(5, 0, 1);
pub const TIMER_ADD_12HR: Field = Field::new(5, 7, 1);
pub const TIMER_HRS: Field = Field::new(7, 4, 4);
pub const LIGHT: Field = Field::new(8, 5, 1);
pub const OFF_TIMER_ENABLE: Field = Field::new(8, 6, 1);
pub const CHECKSUM: Field = Field::new(CHECKSUM_INDEX, 0, 8);

/// The 10-byte Voltas command buffer.
///
/// Created zeroed. Typed getters and setters cover each field; the trailing
/// checksum byte is only rewritten by [`State::raw`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct State {
    raw: [u8; STATE_LENGTH],
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    /// Zero every byte.
    pub fn reset(&mut self) {
        self.raw = [0; STATE_LENGTH];
    }

    /// Recompute the checksum and return the full buffer, ready for sending.
    pub fn raw(&mut self) -> &[u8; STATE_LENGTH] {
        self.update_checksum();
        &self.raw
    }

    /// The buffer exactly as stored, checksum untouched.
    pub fn as_bytes(&self) -> &[u8; STATE_LENGTH] {
        &self.raw
    }

    /// Replace the whole buffer. Nothing is copied unless `bytes` is exactly
    /// [`STATE_LENGTH`] long.
    pub fn set_raw(&mut self, bytes: &[u8]) -> Result<(), VoltasError> {
        let raw: [u8; STATE_LENGTH] = bytes.try_into().map_err(|_| {
            warn!(len = bytes.len(), "Rejected raw state of wrong length");
            VoltasError::InvalidLength {
                expected: STATE_LENGTH,
                actual: bytes.len(),
            }
        })?;
        self.raw = raw;
        Ok(())
    }

    /// Parse a hex string (20 hex digits) into a state. The checksum is kept as given.
    pub fn from_hex(text: &str) -> Result<Self, VoltasError> {
        let bytes = hex::decode(text.trim())?;
        Self::try_from(bytes.as_slice())
    }

    /// Hex rendering of the stored bytes.
    pub fn to_hex(&self) -> String {
        hex::encode_upper(self.raw)
    }

    /// Stored checksum byte.
    pub fn checksum(&self) -> u8 {
        CHECKSUM.get(&self.raw)
    }

    /// Whether the stored checksum matches the payload.
    pub fn has_valid_checksum(&self) -> bool {
        crate::checksum::valid_checksum(&self.raw)
    }

    pub(crate) fn field(&self, field: Field) -> u8 {
        field.get(&self.raw)
    }

    pub(crate) fn set_field(&mut self, field: Field, value: u8) {
        field.set(&mut self.raw, value);
    }

    pub(crate) fn flag(&self, field: Field) -> bool {
        field.get_flag(&self.raw)
    }

    pub(crate) fn set_flag(&mut self, field: Field, on: bool) {
        field.set_flag(&mut self.raw, on);
    }

    fn update_checksum(&mut self) {
        let sum = calc_checksum(&self.raw);
        CHECKSUM.set(&mut self.raw, sum);
    }
}

impl From<[u8; STATE_LENGTH]> for State {
    fn from(raw: [u8; STATE_LENGTH]) -> Self {
        Self { raw }
    }
}

impl TryFrom<&[u8]> for State {
    type Error = VoltasError;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        let mut state = State::new();
        state.set_raw(bytes)?;
        Ok(state)
    }
}

impl From<State> for [u8; STATE_LENGTH] {
    fn from(state: State) -> Self {
        state.raw
    }
}
