use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::Display;

/// Operating modes understood by the unit, as stored in the mode nibble.
///
/// There is no native auto mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum Mode {
    Fan = 0b0001,
    Heat = 0b0010,
    Dry = 0b0100,
    Cool = 0b1000,
}

// Not derived: a `#[default]` variant would make `try_from` infallible.
impl Default for Mode {
    fn default() -> Self {
        Mode::Cool
    }
}

impl Mode {
    /// Native code to mode, substituting [`Mode::Cool`] for anything unknown.
    pub fn from_code(code: u8) -> Self {
        Self::try_from(code).unwrap_or_default()
    }
}

/// Fan speeds, as stored in the three fan bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum FanSpeed {
    Low = 0b001,
    #[strum(to_string = "Medium")]
    Med = 0b010,
    High = 0b100,
    Auto = 0b111,
}

impl Default for FanSpeed {
    fn default() -> Self {
        FanSpeed::Auto
    }
}

impl FanSpeed {
    /// Native code to fan speed, substituting [`FanSpeed::Auto`] for anything unknown.
    pub fn from_code(code: u8) -> Self {
        Self::try_from(code).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_codes_fall_back() {
        assert_eq!(Mode::from_code(99), Mode::Cool);
        assert_eq!(Mode::from_code(0), Mode::Cool);
        assert_eq!(Mode::from_code(4), Mode::Dry);
        assert_eq!(FanSpeed::from_code(0), FanSpeed::Auto);
        assert_eq!(FanSpeed::from_code(2), FanSpeed::Med);
    }

    #[test]
    fn strict_conversion_rejects_unknown() {
        assert!(Mode::try_from(3u8).is_err());
        assert!(FanSpeed::try_from(0u8).is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(Mode::Dry.to_string(), "Dry");
        assert_eq!(FanSpeed::Med.to_string(), "Medium");
        assert_eq!(FanSpeed::Auto.to_string(), "Auto");
    }
}
