use crate::ConversionError;
use crate::consts::{HOURS_PER_DAY, MAX_DAY, MAX_MONTH, MINUTES_PER_HOUR, SECONDS_PER_MINUTE};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `ConversionError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u32) -> Result<Self, ConversionError> {
        if value > MAX_MONTH {
            return Err(ConversionError::InvalidMonth(value));
        }
        u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(ConversionError::InvalidMonth(value))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get() as u32
    }
}

impl TryFrom<u8> for Month {
    type Error = ConversionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value.into())
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day-of-month value in the range `1..=MAX_DAY` (1..=31).
///
/// The upper bound is not checked against the month length: the forward
/// conversion accepts e.g. February 30 and counts it as March 1 or 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// # Errors
    /// Returns `ConversionError::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u32) -> Result<Self, ConversionError> {
        if value > MAX_DAY {
            return Err(ConversionError::InvalidDay(value));
        }
        u8::try_from(value)
            .ok()
            .and_then(NonZeroU8::new)
            .map(Self)
            .ok_or(ConversionError::InvalidDay(value))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get() as u32
    }
}

impl TryFrom<u8> for Day {
    type Error = ConversionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value.into())
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hour of day, `0..=23`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hour(u8);

impl Hour {
    /// # Errors
    /// Returns `ConversionError::InvalidHour` if the value is 24 or more.
    pub fn new(value: u32) -> Result<Self, ConversionError> {
        if value >= HOURS_PER_DAY {
            return Err(ConversionError::InvalidHour(value));
        }
        u8::try_from(value)
            .map(Self)
            .map_err(|_| ConversionError::InvalidHour(value))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }
}

/// Minute of hour, `0..=59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Minute(u8);

impl Minute {
    /// # Errors
    /// Returns `ConversionError::InvalidMinute` if the value is 60 or more.
    pub fn new(value: u32) -> Result<Self, ConversionError> {
        if value >= MINUTES_PER_HOUR {
            return Err(ConversionError::InvalidMinute(value));
        }
        u8::try_from(value)
            .map(Self)
            .map_err(|_| ConversionError::InvalidMinute(value))
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0 as u32
    }
}

/// Second of minute with sub-second precision, finite and in `[0, 60)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Second(f64);

impl Second {
    /// # Errors
    /// Returns `ConversionError::InvalidSecond` for NaN, infinities, negative
    /// values and values of 60 or more.
    pub fn new(value: f64) -> Result<Self, ConversionError> {
        if !value.is_finite() || !(0.0..f64::from(SECONDS_PER_MINUTE)).contains(&value) {
            return Err(ConversionError::InvalidSecond(value));
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}
