//! Civil date ⇄ Julian Day conversion (Meeus, *Astronomical Algorithms*, ch. 7).

use crate::ConversionError;
use crate::calendar::{
    Calendar, century_correction_factor, day_fraction_from_time, shift_january_february,
    truncate_toward_zero,
};
use crate::consts::{
    DAYS_PER_GREGORIAN_CENTURY, DAYS_PER_JULIAN_YEAR, DECEMBER, EPOCH_DAY_OFFSET,
    EPOCH_YEAR_OFFSET, FIRST_GREGORIAN_JDN, GREGORIAN_ALPHA_OFFSET, HOURS_PER_DAY,
    INVERSE_DAY_OFFSET, INVERSE_YEAR_BIAS, JANUARY, MILLIS_PER_DAY, MILLIS_PER_HOUR,
    MILLIS_PER_MINUTE, MILLIS_PER_SECOND, MIN_DAY, MINUTES_PER_HOUR, MONTH_LENGTH_FACTOR,
};
use crate::types::{Day, Hour, Minute, Month, Second};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// A civil date and time of day.
///
/// `year` is astronomical: 1 BCE is `0`, 2 BCE is `-1`. Dates from
/// 1582-10-15 on are Gregorian, earlier ones Julian.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CivilDateTime {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    /// Seconds with millisecond precision
    pub second: f64,
}

impl CivilDateTime {
    /// Creates a validated date-time.
    ///
    /// # Errors
    /// Returns an [`ErrorKind::InvalidArgument`](crate::ErrorKind) error for
    /// the first component outside its range.
    pub fn new(
        year: i64,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
    ) -> Result<Self, ConversionError> {
        Month::new(month)?;
        Day::new(day)?;
        Hour::new(hour)?;
        Minute::new(minute)?;
        Second::new(second)?;
        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Noon on the given date.
    ///
    /// # Errors
    /// Same as [`CivilDateTime::new`].
    pub fn noon(year: i64, month: u32, day: u32) -> Result<Self, ConversionError> {
        Self::new(year, month, day, 12, 0, 0.0)
    }

    /// Calendar this date is reckoned in.
    pub const fn calendar(&self) -> Calendar {
        Calendar::for_date(self.year, self.month, self.day)
    }

    /// # Errors
    /// Fails if any field was set outside its range after construction, or
    /// if `year` does not fit in an `i32`.
    pub fn to_julian_day(&self) -> Result<f64, ConversionError> {
        let year =
            i32::try_from(self.year).map_err(|_| ConversionError::InvalidYear(self.year))?;
        datetime_to_julian_day(
            year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// # Errors
    /// Returns `ConversionError::NotANumber` if `jd` is NaN or infinite.
    pub fn from_julian_day(jd: f64) -> Result<Self, ConversionError> {
        julian_day_to_date(jd)
    }
}

/// Julian Day of noon on the given date.
///
/// # Errors
/// Returns an invalid-argument error if `month` is outside `1..=12` or `day`
/// outside `1..=31`.
///
/// # Example
///
/// ```
/// use julian_period::date_to_julian_day;
///
/// assert_eq!(date_to_julian_day(2000, 1, 1).unwrap(), 2_451_545.0);
/// ```
pub fn date_to_julian_day(year: i32, month: u32, day: u32) -> Result<f64, ConversionError> {
    datetime_to_julian_day(year, month, day, 12, 0, 0.0)
}

/// Julian Day of a civil date and time of day.
///
/// The day of month is only checked against `1..=31`; a day past the end of
/// its month counts on into the following month.
///
/// # Errors
/// Returns an invalid-argument error naming the first component outside its
/// range. `second` must be finite and in `[0, 60)`.
pub fn datetime_to_julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<f64, ConversionError> {
    let jd = julian_day_from_components(
        year,
        Month::new(month)?,
        Day::new(day)?,
        Hour::new(hour)?,
        Minute::new(minute)?,
        Second::new(second)?,
    );
    trace!(year, month, day, hour, minute, second, jd, "converted civil date to julian day");
    Ok(jd)
}

/// Infallible form of [`datetime_to_julian_day`] over validated components.
pub fn julian_day_from_components(
    year: i32,
    month: Month,
    day: Day,
    hour: Hour,
    minute: Minute,
    second: Second,
) -> f64 {
    let (year, month) = shift_january_february(year, month.get());
    let day = day.get();
    let correction = century_correction_factor(year, month, day);
    let fraction = day_fraction_from_time(hour.get(), minute.get(), second.get());

    // Shifted years stay within i32 range plus one, exact in f64
    #[allow(clippy::cast_precision_loss)]
    let (year, correction) = (year as f64, correction as f64);

    truncate_toward_zero(DAYS_PER_JULIAN_YEAR * (year + EPOCH_YEAR_OFFSET))
        + truncate_toward_zero(MONTH_LENGTH_FACTOR * f64::from(month + 1))
        + f64::from(day)
        + correction
        - EPOCH_DAY_OFFSET
        + fraction
}

/// Civil date and time of a Julian Day.
///
/// Dates at or after JDN 2299161 (1582-10-15) come out Gregorian, earlier
/// ones Julian. Time of day is rounded to the millisecond. Results are
/// meaningful from JD -0.5 (4713 BCE January 1, 00:00) on; earlier values do
/// not fail but yield unspecified fields. The year is not clamped for any JD
/// whose whole days `f64` still resolves (below 2^53).
///
/// # Errors
/// Returns `ConversionError::NotANumber` if `jd` is NaN or infinite.
///
/// # Example
///
/// ```
/// use julian_period::julian_day_to_date;
///
/// let date = julian_day_to_date(2_451_545.0).unwrap();
/// assert_eq!((date.year, date.month, date.day, date.hour), (2000, 1, 1, 12));
/// ```
pub fn julian_day_to_date(jd: f64) -> Result<CivilDateTime, ConversionError> {
    if !jd.is_finite() {
        return Err(ConversionError::NotANumber(jd));
    }

    let shifted = jd + 0.5;
    let z = truncate_toward_zero(shifted);
    let f = shifted - z;

    let a = if z >= FIRST_GREGORIAN_JDN {
        let alpha =
            truncate_toward_zero((z - GREGORIAN_ALPHA_OFFSET) / DAYS_PER_GREGORIAN_CENTURY);
        z + 1.0 + alpha - truncate_toward_zero(alpha / 4.0)
    } else {
        z
    };

    let b = a + INVERSE_DAY_OFFSET;
    let c = truncate_toward_zero((b - INVERSE_YEAR_BIAS) / DAYS_PER_JULIAN_YEAR);
    let d = truncate_toward_zero(DAYS_PER_JULIAN_YEAR * c);
    let e = truncate_toward_zero((b - d) / MONTH_LENGTH_FACTOR);

    let day_with_fraction = b - d - truncate_toward_zero(MONTH_LENGTH_FACTOR * e) + f;
    let day = truncate_toward_zero(day_with_fraction);
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 {
        c - EPOCH_YEAR_OFFSET
    } else {
        c - (EPOCH_YEAR_OFFSET - 1.0)
    };

    // Float-to-int casts saturate
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let fields = {
        let millis = ((day_with_fraction - day) * MILLIS_PER_DAY).round() as u32;
        DateTimeFields {
            year: year as i64,
            month: month as u32,
            day: day as u32,
            hour: millis / MILLIS_PER_HOUR,
            minute: millis % MILLIS_PER_HOUR / MILLIS_PER_MINUTE,
            millis: millis % MILLIS_PER_MINUTE,
        }
    };

    let date = fields.normalize().into_civil();
    trace!(
        jd,
        year = date.year,
        month = date.month,
        day = date.day,
        "converted julian day to civil date"
    );
    Ok(date)
}

/// Integer date-time fields before carry normalization. `millis` counts
/// milliseconds within the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DateTimeFields {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub millis: u32,
}

impl DateTimeFields {
    /// Rolls overflowing seconds, minutes and hours upward, then moves a day
    /// past the end of its month to the first of the next month.
    pub(crate) fn normalize(mut self) -> Self {
        if self.millis >= MILLIS_PER_MINUTE {
            self.minute += self.millis / MILLIS_PER_MINUTE;
            self.millis %= MILLIS_PER_MINUTE;
        }
        if self.minute >= MINUTES_PER_HOUR {
            self.hour += self.minute / MINUTES_PER_HOUR;
            self.minute %= MINUTES_PER_HOUR;
        }
        if self.hour >= HOURS_PER_DAY {
            self.day = self.day.saturating_add(self.hour / HOURS_PER_DAY);
            self.hour %= HOURS_PER_DAY;
        }

        if (JANUARY..=DECEMBER).contains(&self.month) {
            let calendar = Calendar::for_date(self.year, self.month, self.day);
            if self.day > calendar.days_in_month(self.year, self.month) {
                debug!(
                    year = self.year,
                    month = self.month,
                    day = self.day,
                    %calendar,
                    "day past end of month, rolling into next month"
                );
                self.day = MIN_DAY;
                if self.month == DECEMBER {
                    self.month = JANUARY;
                    self.year = self.year.saturating_add(1);
                } else {
                    self.month += 1;
                }
            }
        }
        self
    }

    fn into_civil(self) -> CivilDateTime {
        CivilDateTime {
            year: self.year,
            month: self.month,
            day: self.day,
            hour: self.hour,
            minute: self.minute,
            second: f64::from(self.millis) / f64::from(MILLIS_PER_SECOND),
        }
    }
}
