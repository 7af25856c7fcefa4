use thiserror::Error;

/// Why a string is not a recognized color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex length {0} (expected 3, 4, 6 or 8 digits)")]
    InvalidLength(usize),
    #[error("invalid hex digits in “{0}”")]
    InvalidHex(String),
    #[error("{0}() expects 3 components and an optional alpha")]
    InvalidFunction(String),
    #[error("not a number: “{0}”")]
    InvalidNumber(String),
    #[error("unknown color “{0}”")]
    Unknown(String),
}

/// Why a set of blend parameters was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlendError {
    #[error("corner {index}: {source}")]
    Corner { index: usize, source: ParseError },
    #[error("a blend needs 3 or 4 corners, got {0}")]
    CornerCount(usize),
    #[error("grid size must be at least 1")]
    GridSize,
    #[error("unknown blend method “{0}” (expected rgb, hsl, lab or cmyk)")]
    UnknownMethod(String),
}
