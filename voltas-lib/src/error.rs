use thiserror::Error;

/// The primary error type for the `voltas-lib` library.
#[derive(Error, Debug, PartialEq)]
pub enum VoltasError {
    #[error("Invalid state length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Unexpected bit count: expected {expected}, got {actual}")]
    UnexpectedBitCount { expected: u16, actual: u16 },

    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    #[error("Pulse mismatch at sample {index}: {kind} of {measured}us out of tolerance")]
    PulseMismatch {
        index: usize,
        kind: PulseKind,
        measured: u32,
    },

    #[error("Invalid checksum (expected {expected:#04x}, actual: {actual:#04x})")]
    InvalidChecksum { expected: u8, actual: u8 },

    #[error("Invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("Invalid timings: {0}")]
    InvalidTimings(String),
}

/// Which part of a mark/space pattern failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum PulseKind {
    #[strum(to_string = "header mark")]
    HeaderMark,
    #[strum(to_string = "header space")]
    HeaderSpace,
    #[strum(to_string = "bit mark")]
    BitMark,
    #[strum(to_string = "bit space")]
    BitSpace,
    #[strum(to_string = "footer mark")]
    FooterMark,
    #[strum(to_string = "trailing gap")]
    Gap,
}
