use crate::prelude::*;

/// Error type for date and Julian Day conversions.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ConversionError {
    #[error("Invalid year: {0} (must fit in a 32-bit signed integer)")]
    InvalidYear(i64),

    #[error("Invalid month: {0} (must be 1-12)")]
    InvalidMonth(u32),

    #[error("Invalid day: {0} (must be 1-31)")]
    InvalidDay(u32),

    #[error("Invalid hour: {0} (must be 0-23)")]
    InvalidHour(u32),

    #[error("Invalid minute: {0} (must be 0-59)")]
    InvalidMinute(u32),

    #[error("Invalid second: {0} (must be finite and in [0, 60))")]
    InvalidSecond(f64),

    /// The Julian Day argument is NaN or infinite.
    #[error("Julian day is not a finite number: {0}")]
    NotANumber(f64),
}

/// Coarse classification of a [`ConversionError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum ErrorKind {
    /// A civil date or time component is outside its allowed range.
    #[display(fmt = "invalid argument")]
    InvalidArgument,
    /// A Julian Day value is not a usable number.
    #[display(fmt = "invalid input")]
    InvalidInput,
}

impl ConversionError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidYear(_)
            | Self::InvalidMonth(_)
            | Self::InvalidDay(_)
            | Self::InvalidHour(_)
            | Self::InvalidMinute(_)
            | Self::InvalidSecond(_) => ErrorKind::InvalidArgument,
            Self::NotANumber(_) => ErrorKind::InvalidInput,
        }
    }
}
