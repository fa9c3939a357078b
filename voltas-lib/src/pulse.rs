//! Mark/space primitives shared by the encoder and decoder.
//!
//! [`IrTransmitter`] is the seam to whatever actually drives the IR LED.
//! [`PulseRecorder`] is a software transmitter that keeps the emitted
//! durations, which is also the format [`match_generic`] consumes: a flat list
//! of microsecond durations alternating mark, space, mark, ...

use crate::config::TransmitConfig;
use crate::constants::{DEFAULT_TOLERANCE_PERCENT, MARK_EXCESS_US};
use crate::error::{PulseKind, VoltasError};
use tracing::{debug, trace};

/// Output side of an IR driver.
pub trait IrTransmitter {
    /// Prepare the output pin. Called once before the first message.
    fn begin(&mut self, _config: &TransmitConfig) {}

    /// Configure the carrier. A frequency of 0 means unmodulated output.
    fn enable_carrier(&mut self, freq_hz: u32, duty_percent: u8);

    /// Emit the carrier for `us` microseconds.
    fn mark(&mut self, us: u32);

    /// Keep the output idle for `us` microseconds.
    fn space(&mut self, us: u32);
}

impl<T: IrTransmitter + ?Sized> IrTransmitter for &mut T {
    fn begin(&mut self, config: &TransmitConfig) {
        (**self).begin(config)
    }

    fn enable_carrier(&mut self, freq_hz: u32, duty_percent: u8) {
        (**self).enable_carrier(freq_hz, duty_percent)
    }

    fn mark(&mut self, us: u32) {
        (**self).mark(us)
    }

    fn space(&mut self, us: u32) {
        (**self).space(us)
    }
}

/// Durations describing a pulse-distance protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericTiming {
    pub header_mark: u32,
    pub header_space: u32,
    pub one_mark: u32,
    pub one_space: u32,
    pub zero_mark: u32,
    pub zero_space: u32,
    pub footer_mark: u32,
    pub gap: u32,
    pub frequency_hz: u32,
    pub msb_first: bool,
    pub duty_percent: u8,
}

impl GenericTiming {
    /// Raw samples one message occupies, not counting the trailing gap.
    pub fn samples_needed(&self, nbits: u16) -> usize {
        let optional = [self.header_mark, self.header_space, self.footer_mark];
        nbits as usize * 2 + optional.iter().filter(|&&d| d > 0).count()
    }
}

/// Emit `repeat + 1` copies of `nbits` of `data`, each followed by the footer
/// mark and trailing gap.
pub fn send_generic<T: IrTransmitter>(tx: &mut T, timing: &GenericTiming, data: &[u8], nbits: u16, repeat: u16) {
    tx.enable_carrier(timing.frequency_hz, timing.duty_percent);
    for _ in 0..=repeat {
        if timing.header_mark > 0 {
            tx.mark(timing.header_mark);
        }
        if timing.header_space > 0 {
            tx.space(timing.header_space);
        }
        for bit in bits(data, nbits, timing.msb_first) {
            if bit {
                tx.mark(timing.one_mark);
                tx.space(timing.one_space);
            } else {
                tx.mark(timing.zero_mark);
                tx.space(timing.zero_space);
            }
        }
        tx.mark(timing.footer_mark);
        tx.space(timing.gap);
    }
}

fn bits(data: &[u8], nbits: u16, msb_first: bool) -> impl Iterator<Item = bool> + '_ {
    data.iter()
        .flat_map(move |&byte| {
            (0..8).map(move |k| {
                let shift = if msb_first { 7 - k } else { k };
                byte & (1 << shift) != 0
            })
        })
        .take(nbits as usize)
}

fn ticks_low(desired: u32, tolerance: u32) -> u32 {
    desired * (100 - tolerance) / 100
}

fn ticks_high(desired: u32, tolerance: u32) -> u32 {
    desired * (100 + tolerance) / 100 + 1
}

fn within(measured: u32, desired: u32, tolerance: u32) -> bool {
    (ticks_low(desired, tolerance)..=ticks_high(desired, tolerance)).contains(&measured)
}

/// Compare a mark, allowing for receivers stretching marks by [`MARK_EXCESS_US`].
pub fn match_mark(measured: u32, desired: u32) -> bool {
    within(measured, desired + MARK_EXCESS_US, DEFAULT_TOLERANCE_PERCENT)
}

/// Compare a space, allowing for receivers shrinking spaces by [`MARK_EXCESS_US`].
pub fn match_space(measured: u32, desired: u32) -> bool {
    within(measured, desired.saturating_sub(MARK_EXCESS_US), DEFAULT_TOLERANCE_PERCENT)
}

/// A space at least as long as `desired`, within tolerance. 0 counts as an
/// open-ended end of capture.
pub fn match_at_least(measured: u32, desired: u32) -> bool {
    measured == 0 || measured >= ticks_low(desired.saturating_sub(MARK_EXCESS_US), DEFAULT_TOLERANCE_PERCENT)
}

/// Match `raw[offset..]` against one message of `nbits` and return the
/// recovered bytes (`nbits / 8`, partial trailing byte included when `nbits`
/// is not a multiple of 8).
pub fn match_generic(raw: &[u32], offset: usize, nbits: u16, timing: &GenericTiming) -> Result<Vec<u8>, VoltasError> {
    let available = raw.len().saturating_sub(offset);
    let expected = timing.samples_needed(nbits);
    if available < expected {
        debug!(expected, available, "Not enough samples to decode");
        return Err(VoltasError::InsufficientData {
            expected,
            actual: available,
        });
    }

    let mismatch = |index: usize, kind: PulseKind| {
        debug!(index, %kind, measured = raw[index], "Pulse did not match");
        VoltasError::PulseMismatch {
            index,
            kind,
            measured: raw[index],
        }
    };

    let mut pos = offset;
    if timing.header_mark > 0 {
        if !match_mark(raw[pos], timing.header_mark) {
            return Err(mismatch(pos, PulseKind::HeaderMark));
        }
        pos += 1;
    }
    if timing.header_space > 0 {
        if !match_space(raw[pos], timing.header_space) {
            return Err(mismatch(pos, PulseKind::HeaderSpace));
        }
        pos += 1;
    }

    let mut bytes = vec![0u8; (nbits as usize).div_ceil(8)];
    for bit in 0..nbits as usize {
        // one/zero marks are equal for pulse-distance protocols; check the mark
        // against whichever the space turns out to encode
        let (mark, space) = (raw[pos], raw[pos + 1]);
        let value = if match_space(space, timing.one_space) && match_mark(mark, timing.one_mark) {
            true
        } else if match_space(space, timing.zero_space) && match_mark(mark, timing.zero_mark) {
            false
        } else if !match_mark(mark, timing.one_mark) && !match_mark(mark, timing.zero_mark) {
            return Err(mismatch(pos, PulseKind::BitMark));
        } else {
            return Err(mismatch(pos + 1, PulseKind::BitSpace));
        };
        if value {
            let shift = if timing.msb_first { 7 - bit % 8 } else { bit % 8 };
            bytes[bit / 8] |= 1 << shift;
        }
        pos += 2;
    }

    if timing.footer_mark > 0 {
        if !match_mark(raw[pos], timing.footer_mark) {
            return Err(mismatch(pos, PulseKind::FooterMark));
        }
        pos += 1;
    }
    if pos < raw.len() && !match_at_least(raw[pos], timing.gap) {
        return Err(mismatch(pos, PulseKind::Gap));
    }

    trace!(bytes = %hex::encode(&bytes), "Matched pulse pattern");
    Ok(bytes)
}

/// Parse a list of microsecond durations separated by commas and/or whitespace.
/// Braces are ignored, so C-style array literals paste straight in.
pub fn parse_timings(text: &str) -> Result<Vec<u32>, VoltasError> {
    text.split(|c: char| c == ',' || c.is_whitespace() || c == '{' || c == '}')
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|e| VoltasError::InvalidTimings(format!("{s:?}: {e}")))
        })
        .collect()
}

/// An [`IrTransmitter`] that records what would have been sent.
///
/// Consecutive marks (or spaces) are merged and zero durations are dropped,
/// so the recording alternates mark/space starting with a mark.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PulseRecorder {
    timings: Vec<u32>,
    carrier_hz: u32,
    duty_percent: u8,
    config: Option<TransmitConfig>,
}

impl PulseRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timings(&self) -> &[u32] {
        &self.timings
    }

    pub fn into_timings(self) -> Vec<u32> {
        self.timings
    }

    pub fn carrier_hz(&self) -> u32 {
        self.carrier_hz
    }

    pub fn duty_percent(&self) -> u8 {
        self.duty_percent
    }

    /// Config passed to [`IrTransmitter::begin`], if it was called.
    pub fn config(&self) -> Option<&TransmitConfig> {
        self.config.as_ref()
    }

    /// Total duration recorded, in microseconds.
    pub fn duration_us(&self) -> u64 {
        self.timings.iter().map(|&t| t as u64).sum()
    }

    fn push(&mut self, us: u32, is_mark: bool) {
        if us == 0 {
            return;
        }
        // marks sit at even indices
        let last_is_mark = self.timings.len() % 2 == 1;
        if self.timings.is_empty() {
            if is_mark {
                self.timings.push(us);
            }
        } else if last_is_mark == is_mark {
            if let Some(last) = self.timings.last_mut() {
                *last += us;
            }
        } else {
            self.timings.push(us);
        }
    }
}

impl IrTransmitter for PulseRecorder {
    fn begin(&mut self, config: &TransmitConfig) {
        self.config = Some(config.clone());
    }

    fn enable_carrier(&mut self, freq_hz: u32, duty_percent: u8) {
        self.carrier_hz = freq_hz;
        self.duty_percent = duty_percent;
    }

    fn mark(&mut self, us: u32) {
        self.push(us, true);
    }

    fn space(&mut self, us: u32) {
        self.push(us, false);
    }
}
