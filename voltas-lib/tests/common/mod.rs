//! Common test utilities and shared imports

// Allow unused imports and dead code since this is a shared module
// used across multiple test files - not all items are used in every test file
#[allow(unused_imports)]
pub use hex;
#[allow(unused_imports)]
pub use voltas_lib::constants::{STATE_BITS, STATE_LENGTH};
#[allow(unused_imports)]
pub use voltas_lib::error::{PulseKind, VoltasError};
#[allow(unused_imports)]
pub use voltas_lib::{
    CommonFanSpeed, CommonState, FanSpeed, Mode, OpMode, Protocol, PulseRecorder, State, TransmitConfig, Voltas,
    calc_checksum, decode_voltas, valid_checksum,
};

/// Decode hex string to a state buffer for testing
#[allow(dead_code)]
pub fn hex_to_state(hex_data: &str) -> [u8; STATE_LENGTH] {
    hex::decode(hex_data)
        .expect("Failed to decode hex")
        .try_into()
        .expect("Hex is not a full state")
}

/// A remote that records into memory
#[allow(dead_code)]
pub fn recording_remote() -> Voltas<PulseRecorder> {
    let mut ac = Voltas::new(TransmitConfig::default(), PulseRecorder::new());
    ac.begin();
    ac
}

/// State captured from a real remote: power on, dry, 24C, fan high, wifi on
#[allow(dead_code)]
pub const CAPTURED_STATE: &str = "338488183B3B3B1100E6";

/// Raw timings of `CAPTURED_STATE` as seen by an IR receiver
#[allow(dead_code)]
pub const CAPTURED_TIMINGS: [u32; 161] = [
    1002, 584, 1000, 586, 1000, 2568, 1002, 2570, 1002, 586, 998, 588, 1000, 2568, 1002, 2570, 1002, 2572, 1002, 584,
    1002, 586, 1000, 584, 1000, 586, 1002, 2568, 1004, 584, 1000, 586, 1002, 2568, 1002, 584, 1002, 584, 1004, 584,
    1000, 2568, 1002, 586, 1000, 586, 998, 590, 998, 584, 1002, 584, 1000, 586, 1000, 2570, 1002, 2568, 1004, 584,
    1000, 584, 1002, 584, 1002, 582, 1004, 584, 1002, 2568, 1002, 2570, 1004, 2570, 1000, 586, 1002, 2568, 1004, 2568,
    1006, 584, 1000, 584, 1002, 2568, 1002, 2570, 1002, 2568, 1002, 586, 1002, 2570, 1000, 2570, 1002, 588, 998, 586,
    1000, 2568, 1004, 2568, 1004, 2568, 1002, 588, 998, 2570, 1002, 2568, 1004, 586, 1002, 584, 1000, 586, 1000, 2570,
    1000, 586, 1000, 584, 1002, 586, 1000, 2568, 1004, 584, 1000, 586, 1000, 586, 1002, 584, 1002, 586, 1000, 586,
    1000, 586, 1000, 586, 1000, 2568, 1002, 2568, 1002, 2568, 1004, 586, 1000, 584, 1000, 2570, 1004, 2568, 1004, 584,
    1002,
];
