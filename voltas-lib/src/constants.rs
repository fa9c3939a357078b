// Protocol constants for the Voltas A/C

/// Size of a complete state message (10 bytes)
pub const STATE_LENGTH: usize = 10;

/// Number of bits in a complete state message
pub const STATE_BITS: u16 = (STATE_LENGTH * 8) as u16;

/// Index of the checksum byte
pub const CHECKSUM_INDEX: usize = STATE_LENGTH - 1;

/// Mark preceding every data bit (µs)
pub const BIT_MARK_US: u32 = 1026;

/// Space encoding a `1` bit (µs)
pub const ONE_SPACE_US: u32 = 2553;

/// Space encoding a `0` bit (µs)
pub const ZERO_SPACE_US: u32 = 554;

/// IR carrier frequency (Hz)
pub const CARRIER_HZ: u32 = 38_000;

/// Minimum gap between two messages (µs)
pub const DEFAULT_MESSAGE_GAP_US: u32 = 100_000;

/// Carrier duty cycle (percent)
pub const DEFAULT_DUTY_PERCENT: u8 = 50;

/// Percentage a measured pulse may deviate from its expected duration
pub const DEFAULT_TOLERANCE_PERCENT: u32 = 25;

/// IR receivers stretch marks and shrink spaces by roughly this much (µs)
pub const MARK_EXCESS_US: u32 = 50;

/// Default number of repeats sent after the first message
pub const NO_REPEAT: u16 = 0;

/// Lowest settable temperature (°C)
pub const MIN_TEMP_C: u8 = 16;

/// Highest settable temperature (°C)
pub const MAX_TEMP_C: u8 = 30;

/// Longest off timer the remote can express (hours)
pub const MAX_OFF_TIMER_HOURS: u16 = 23;
