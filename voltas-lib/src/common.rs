//! Vendor-neutral view of an A/C command.
//!
//! Settings the Voltas remote has no notion of are `None` rather than a guess.

use crate::state::State;
use crate::types::{FanSpeed, Mode};
use strum_macros::Display;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OpMode {
    Off,
    Auto,
    Cool,
    Heat,
    Dry,
    Fan,
}

/// Which protocol a [`CommonState`] was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Protocol {
    Unknown,
    Voltas,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CommonFanSpeed {
    Auto,
    Min,
    Low,
    Medium,
    High,
    Max,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CommonState {
    pub protocol: Protocol,
    pub model: Option<i16>,
    pub power: bool,
    /// Not mapped from the native state yet
    pub mode: Option<OpMode>,
    pub celsius: bool,
    pub degrees: f32,
    pub fan_speed: CommonFanSpeed,
    pub swing_v: Option<bool>,
    pub swing_h: Option<bool>,
    pub quiet: Option<bool>,
    pub turbo: bool,
    pub econo: bool,
    pub light: bool,
    pub filter: Option<bool>,
    pub clean: Option<bool>,
    pub beep: Option<bool>,
    /// Minutes of sleep mode
    pub sleep: Option<i16>,
    /// Minutes past midnight
    pub clock: Option<i16>,
}

impl Default for CommonState {
    fn default() -> Self {
        Self {
            protocol: Protocol::Unknown,
            model: None,
            power: false,
            mode: None,
            celsius: true,
            degrees: crate::constants::MIN_TEMP_C as f32,
            fan_speed: CommonFanSpeed::Auto,
            swing_v: None,
            swing_h: None,
            quiet: None,
            turbo: false,
            econo: false,
            light: false,
            filter: None,
            clean: None,
            beep: None,
            sleep: None,
            clock: None,
        }
    }
}

/// Common mode to native mode. Auto and Off have no native equivalent and map to Cool.
pub fn convert_mode(mode: OpMode) -> Mode {
    match mode {
        OpMode::Heat => Mode::Heat,
        OpMode::Dry => Mode::Dry,
        OpMode::Fan => Mode::Fan,
        _ => Mode::Cool,
    }
}

pub fn to_common_mode(code: u8) -> OpMode {
    match Mode::from_code(code) {
        Mode::Heat => OpMode::Heat,
        Mode::Dry => OpMode::Dry,
        Mode::Fan => OpMode::Fan,
        Mode::Cool => OpMode::Cool,
    }
}

pub fn convert_fan(speed: CommonFanSpeed) -> FanSpeed {
    match speed {
        CommonFanSpeed::Min | CommonFanSpeed::Low => FanSpeed::Low,
        CommonFanSpeed::Medium => FanSpeed::Med,
        CommonFanSpeed::High | CommonFanSpeed::Max => FanSpeed::High,
        CommonFanSpeed::Auto => FanSpeed::Auto,
    }
}

pub fn to_common_fan_speed(code: u8) -> CommonFanSpeed {
    match FanSpeed::try_from(code) {
        Ok(FanSpeed::High) => CommonFanSpeed::Max,
        Ok(FanSpeed::Med) => CommonFanSpeed::Medium,
        Ok(FanSpeed::Low) => CommonFanSpeed::Min,
        _ => CommonFanSpeed::Auto,
    }
}

impl State {
    pub fn to_common(&self) -> CommonState {
        CommonState {
            protocol: Protocol::Voltas,
            power: self.power(),
            celsius: true,
            degrees: self.temp() as f32,
            fan_speed: to_common_fan_speed(self.fan()),
            turbo: self.turbo(),
            econo: self.econo(),
            light: self.light(),
            ..CommonState::default()
        }
    }

    /// Write the settings this protocol supports from `common`. Fahrenheit
    /// temperatures are converted; fields without a native counterpart are ignored.
    pub fn apply_common(&mut self, common: &CommonState) {
        self.set_power(common.power);
        if let Some(mode) = common.mode {
            self.set_mode(convert_mode(mode));
        }
        let celsius = if common.celsius {
            common.degrees
        } else {
            (common.degrees - 32.0) * 5.0 / 9.0
        };
        self.set_temp(celsius.round().clamp(0.0, u8::MAX as f32) as u8);
        self.set_fan(convert_fan(common.fan_speed));
        self.set_turbo(common.turbo);
        self.set_econo(common.econo);
        self.set_light(common.light);
    }
}
