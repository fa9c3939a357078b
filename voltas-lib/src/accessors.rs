//! Typed getters and setters over [`State`].
//!
//! Setters never fail: temperatures are clamped, unknown mode and fan codes
//! are replaced by [`Mode::Cool`] and [`FanSpeed::Auto`].

use crate::constants::{MAX_OFF_TIMER_HOURS, MAX_TEMP_C, MIN_TEMP_C};
use crate::state::{
    ECONO, FAN_SPEED, LIGHT, MODE, OFF_TIMER_ENABLE, POWER, State, SWING_H, TEMP, TIMER_ADD_12HR,
    TIMER_HRS, TURBO, WIFI,
};
use crate::types::{FanSpeed, Mode};
use std::fmt;

impl State {
    pub fn power(&self) -> bool {
        self.flag(POWER)
    }

    pub fn set_power(&mut self, on: bool) {
        self.set_flag(POWER, on);
    }

    pub fn on(&mut self) {
        self.set_power(true);
    }

    pub fn off(&mut self) {
        self.set_power(false);
    }

    /// Native mode code. May be outside [`Mode`] if the state was loaded raw.
    pub fn mode(&self) -> u8 {
        self.field(MODE)
    }

    /// Accepts a [`Mode`] or a native code; unknown codes become [`Mode::Cool`].
    pub fn set_mode(&mut self, mode: impl Into<u8>) {
        let mode = Mode::from_code(mode.into());
        self.set_field(MODE, mode.into());
    }

    /// Set temperature in °C.
    pub fn temp(&self) -> u8 {
        self.field(TEMP) + MIN_TEMP_C
    }

    /// Clamped to [`MIN_TEMP_C`]..=[`MAX_TEMP_C`].
    pub fn set_temp(&mut self, celsius: u8) {
        let celsius = celsius.clamp(MIN_TEMP_C, MAX_TEMP_C);
        self.set_field(TEMP, celsius - MIN_TEMP_C);
    }

    /// Native fan code. May be outside [`FanSpeed`] if the state was loaded raw.
    pub fn fan(&self) -> u8 {
        self.field(FAN_SPEED)
    }

    /// Accepts a [`FanSpeed`] or a native code; unknown codes become [`FanSpeed::Auto`].
    pub fn set_fan(&mut self, speed: impl Into<u8>) {
        let speed = FanSpeed::from_code(speed.into());
        self.set_field(FAN_SPEED, speed.into());
    }

    pub fn swing_h(&self) -> bool {
        self.flag(SWING_H)
    }

    pub fn set_swing_h(&mut self, on: bool) {
        self.set_flag(SWING_H, on);
    }

    pub fn wifi(&self) -> bool {
        self.flag(WIFI)
    }

    pub fn set_wifi(&mut self, on: bool) {
        self.set_flag(WIFI, on);
    }

    pub fn turbo(&self) -> bool {
        self.flag(TURBO)
    }

    pub fn set_turbo(&mut self, on: bool) {
        self.set_flag(TURBO, on);
    }

    pub fn econo(&self) -> bool {
        self.flag(ECONO)
    }

    pub fn set_econo(&mut self, on: bool) {
        self.set_flag(ECONO, on);
    }

    pub fn light(&self) -> bool {
        self.flag(LIGHT)
    }

    pub fn set_light(&mut self, on: bool) {
        self.set_flag(LIGHT, on);
    }

    /// Off timer in minutes, or 0 when disabled.
    pub fn off_timer(&self) -> u16 {
        if !self.flag(OFF_TIMER_ENABLE) {
            return 0;
        }
        let hours = self.field(TIMER_HRS) as u16 + if self.flag(TIMER_ADD_12HR) { 12 } else { 0 };
        hours * 60
    }

    /// Set the off timer. The remote counts whole hours, so the duration is
    /// rounded up to the next hour and capped at [`MAX_OFF_TIMER_HOURS`].
    /// 0 disables the timer.
    pub fn set_off_timer(&mut self, minutes: u16) {
        let hours = minutes.div_ceil(60).min(MAX_OFF_TIMER_HOURS);
        let add_12hr = hours >= 12;
        let remainder = if add_12hr { hours - 12 } else { hours };
        self.set_flag(OFF_TIMER_ENABLE, hours > 0);
        self.set_flag(TIMER_ADD_12HR, add_12hr);
        self.set_field(TIMER_HRS, remainder as u8);
    }
}

fn on_off(on: bool) -> &'static str {
    if on { "On" } else { "Off" }
}

/// Single-line summary, e.g.
/// `Power: On, Mode: 4 (Dry), Temp: 24C, Fan: 4 (High), Turbo: Off, Econo: Off, WiFi: On, Light: Off`.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = Mode::try_from(self.mode()).map(|m| m.to_string());
        let fan = FanSpeed::try_from(self.fan()).map(|s| s.to_string());
        write!(
            f,
            "Power: {}, Mode: {} ({}), Temp: {}C, Fan: {} ({}), Turbo: {}, Econo: {}, WiFi: {}, Light: {}",
            on_off(self.power()),
            self.mode(),
            mode.as_deref().unwrap_or("UNKNOWN"),
            self.temp(),
            self.fan(),
            fan.as_deref().unwrap_or("UNKNOWN"),
            on_off(self.turbo()),
            on_off(self.econo()),
            on_off(self.wifi()),
            on_off(self.light()),
        )
    }
}
