//! # Voltas A/C infrared protocol
//!
//! Builds, checks, transmits and decodes the 10-byte command a Voltas window
//! A/C remote sends over a 38kHz IR carrier.
//!
//! ```
//! use voltas_lib::{FanSpeed, Mode, PulseRecorder, TransmitConfig, Voltas};
//!
//! let mut ac = Voltas::new(TransmitConfig::default(), PulseRecorder::new());
//! ac.begin();
//! let state = ac.state_mut();
//! state.on();
//! state.set_mode(Mode::Dry);
//! state.set_temp(24);
//! state.set_fan(FanSpeed::High);
//! state.set_wifi(true);
//! ac.send(0);
//!
//! let timings = ac.transmitter().timings();
//! let decoded = voltas_lib::decode_voltas(timings, 0, voltas_lib::constants::STATE_BITS, true).unwrap();
//! assert_eq!(decoded.state.to_string(),
//!     "Power: On, Mode: 4 (Dry), Temp: 24C, Fan: 4 (High), Turbo: Off, Econo: Off, WiFi: On, Light: Off");
//! ```

mod accessors;
pub mod checksum;
pub mod common;
pub mod config;
pub mod constants;
pub mod device;
pub mod error;
pub mod pulse;
pub mod state;
pub mod timing;
pub mod types;


pub use checksum::{calc_checksum, valid_checksum};
pub use common::{CommonFanSpeed, CommonState, OpMode, Protocol};
pub use config::TransmitConfig;
pub use device::Voltas;
pub use error::VoltasError;
pub use pulse::{IrTransmitter, PulseRecorder};
pub use state::State;
pub use timing::{Decoded, decode_voltas, send_voltas};
pub use types::{FanSpeed, Mode};
