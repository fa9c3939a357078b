#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output settings for the IR emitter, fixed for the lifetime of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransmitConfig {
    /// GPIO the emitter is attached to
    pub pin: u16,
    /// Drive the output active-low
    pub inverted: bool,
    /// Modulate marks with the carrier. Disable for emitters with a built-in oscillator.
    pub use_modulation: bool,
}

impl TransmitConfig {
    pub fn new(pin: u16) -> Self {
        Self {
            pin,
            ..Self::default()
        }
    }
}

impl Default for TransmitConfig {
    fn default() -> Self {
        Self {
            pin: 0,
            inverted: false,
            use_modulation: true,
        }
    }
}
