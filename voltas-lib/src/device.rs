use crate::common::CommonState;
use crate::config::TransmitConfig;
use crate::constants::STATE_LENGTH;
use crate::error::VoltasError;
use crate::pulse::IrTransmitter;
use crate::state::State;
use crate::timing::send_voltas;
use std::fmt;
use tracing::debug;

/// A Voltas remote: the current command plus the emitter it is sent through.
pub struct Voltas<T> {
    state: State,
    config: TransmitConfig,
    transmitter: T,
}

impl<T: IrTransmitter> Voltas<T> {
    /// Create a remote with a zeroed state
    pub fn new(config: TransmitConfig, transmitter: T) -> Self {
        Self {
            state: State::new(),
            config,
            transmitter,
        }
    }

    /// Set up the emitter for sending
    pub fn begin(&mut self) {
        debug!(
            pin = self.config.pin,
            inverted = self.config.inverted,
            modulation = self.config.use_modulation,
            "Initialising IR output"
        );
        self.transmitter.begin(&self.config);
    }

    /// Send the current state, plus `repeat` extra copies. Blocks until done.
    pub fn send(&mut self, repeat: u16) {
        let data = *self.state.raw();
        send_voltas(&mut self.transmitter, &data, repeat, self.config.use_modulation);
    }

    pub fn config(&self) -> &TransmitConfig {
        &self.config
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut State {
        &mut self.state
    }

    pub fn state_reset(&mut self) {
        self.state.reset();
    }

    /// The state with a freshly computed checksum
    pub fn raw(&mut self) -> [u8; STATE_LENGTH] {
        *self.state.raw()
    }

    pub fn set_raw(&mut self, bytes: &[u8]) -> Result<(), VoltasError> {
        self.state.set_raw(bytes)
    }

    pub fn to_common(&self) -> CommonState {
        self.state.to_common()
    }

    pub fn transmitter(&self) -> &T {
        &self.transmitter
    }

    pub fn into_transmitter(self) -> T {
        self.transmitter
    }
}

impl<T> fmt::Display for Voltas<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.state, f)
    }
}
