//! Calendar rules and the numeric primitives shared by both conversion
//! directions and the cycle arithmetic.

use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, HOURS_PER_DAY,
    LAST_JULIAN_DAY, LEAP_YEAR_CYCLE, MARCH, MAX_MONTH, MINUTES_PER_DAY, SECONDS_PER_DAY,
    SWITCH_MONTH, SWITCH_YEAR,
};
use crate::prelude::*;
use serde::{Deserialize, Serialize};

/// The calendar a civil date is reckoned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Calendar {
    /// Before 1582-10-15: leap year every fourth year, no century correction
    #[display(fmt = "Julian")]
    Julian,
    /// From 1582-10-15 on
    #[display(fmt = "Gregorian")]
    Gregorian,
}

impl Calendar {
    /// Selects the calendar in force on the given date.
    pub const fn for_date(year: i64, month: u32, day: u32) -> Self {
        if is_on_or_after_calendar_switch(year, month, day) {
            Self::Gregorian
        } else {
            Self::Julian
        }
    }

    /// Leap year test under this calendar. Correct for zero and negative
    /// (astronomical) years.
    pub const fn is_leap_year(self, year: i64) -> bool {
        let every_fourth = year % LEAP_YEAR_CYCLE == 0;
        match self {
            Self::Julian => every_fourth,
            Self::Gregorian => {
                every_fourth && (year % CENTURY_CYCLE != 0 || year % GREGORIAN_CYCLE == 0)
            }
        }
    }

    pub const fn days_in_month(self, year: i64, month: u32) -> u32 {
        debug_assert!(month != 0 && month <= MAX_MONTH);

        if month == FEBRUARY && self.is_leap_year(year) {
            FEBRUARY_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[month as usize]
        }
    }
}

/// Returns `true` when the date falls after the last Julian calendar day.
///
/// 1582-10-14 and every earlier date are pre-switch, so the ten dropped days
/// 1582-10-05..=14 are read as Julian dates.
pub const fn is_on_or_after_calendar_switch(year: i64, month: u32, day: u32) -> bool {
    year > SWITCH_YEAR
        || (year == SWITCH_YEAR
            && (month > SWITCH_MONTH || (month == SWITCH_MONTH && day > LAST_JULIAN_DAY)))
}

/// Truncates toward zero: `-1.5` becomes `-1.0`, not `-2.0`.
///
/// Using `floor` here shifts BCE results by one day.
#[inline]
pub fn truncate_toward_zero(x: f64) -> f64 {
    x.trunc()
}

/// Modulo whose result is always in `0..m`, including for negative `n`.
#[inline]
pub const fn non_negative_modulo(n: i64, m: i64) -> i64 {
    debug_assert!(m > 0);
    n.rem_euclid(m)
}

/// Converts a time of day into a fraction of a day.
pub fn day_fraction_from_time(hour: u32, minute: u32, second: f64) -> f64 {
    f64::from(hour) / f64::from(HOURS_PER_DAY)
        + f64::from(minute) / f64::from(MINUTES_PER_DAY)
        + second / f64::from(SECONDS_PER_DAY)
}

/// Gregorian century correction (Meeus' `B`); zero for Julian dates.
///
/// Integer division on `i64` already truncates toward zero.
pub const fn century_correction_factor(year: i64, month: u32, day: u32) -> i64 {
    if !is_on_or_after_calendar_switch(year, month, day) {
        return 0;
    }
    let centuries = year / 100;
    2 - centuries + centuries / 4
}

/// Moves January and February to months 13 and 14 of the previous year.
///
/// The year is widened so that January of `i32::MIN` still has a previous year.
pub const fn shift_january_february(year: i32, month: u32) -> (i64, u32) {
    let year = year as i64;
    if month < MARCH {
        (year - 1, month + MAX_MONTH)
    } else {
        (year, month)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_predicate_boundary() {
        assert!(!is_on_or_after_calendar_switch(1582, 10, 4));
        assert!(!is_on_or_after_calendar_switch(1582, 10, 14));
        assert!(is_on_or_after_calendar_switch(1582, 10, 15));
        assert!(is_on_or_after_calendar_switch(1582, 11, 1));
        assert!(!is_on_or_after_calendar_switch(1582, 9, 30));
        assert!(is_on_or_after_calendar_switch(1583, 1, 1));
        assert!(!is_on_or_after_calendar_switch(1581, 12, 31));
        assert!(!is_on_or_after_calendar_switch(-500, 6, 1));
    }

    #[test]
    fn test_truncate_toward_zero_is_not_floor() {
        struct TestCase {
            x: f64,
            truncated: f64,
            floored: f64,
        }

        let cases = [
            TestCase {
                x: 2.7,
                truncated: 2.0,
                floored: 2.0,
            },
            TestCase {
                x: -2.7,
                truncated: -2.0,
                floored: -3.0,
            },
            TestCase {
                x: -0.5,
                truncated: 0.0,
                floored: -1.0,
            },
            TestCase {
                x: -3.0,
                truncated: -3.0,
                floored: -3.0,
            },
            TestCase {
                x: 0.0,
                truncated: 0.0,
                floored: 0.0,
            },
        ];

        for case in &cases {
            assert_eq!(truncate_toward_zero(case.x), case.truncated, "x = {}", case.x);
            assert_eq!(case.x.floor(), case.floored, "x = {}", case.x);
        }
    }

    #[test]
    fn test_non_negative_modulo() {
        assert_eq!(non_negative_modulo(10, 7), 3);
        assert_eq!(non_negative_modulo(-1, 7), 6);
        assert_eq!(non_negative_modulo(-7, 7), 0);
        assert_eq!(non_negative_modulo(-15, 7), 6);
        assert_eq!(non_negative_modulo(0, 28), 0);
    }

    #[test]
    fn test_day_fraction_from_time() {
        assert_eq!(day_fraction_from_time(12, 0, 0.0), 0.5);
        assert_eq!(day_fraction_from_time(0, 0, 0.0), 0.0);
        assert_eq!(day_fraction_from_time(6, 0, 0.0), 0.25);
        let f = day_fraction_from_time(23, 59, 59.999);
        assert!(f < 1.0);
        assert!((f - 86_399.999 / 86_400.0).abs() < 1e-12);
    }

    #[test]
    fn test_century_correction_factor() {
        assert_eq!(century_correction_factor(1582, 10, 4), 0);
        assert_eq!(century_correction_factor(1582, 10, 15), -10);
        assert_eq!(century_correction_factor(1999, 13, 1), -13);
        assert_eq!(century_correction_factor(2100, 3, 1), -14);
        assert_eq!(century_correction_factor(-100, 3, 1), 0);
    }

    #[test]
    fn test_shift_january_february() {
        assert_eq!(shift_january_february(2000, 1), (1999, 13));
        assert_eq!(shift_january_february(2000, 2), (1999, 14));
        assert_eq!(shift_january_february(2000, 3), (2000, 3));
        assert_eq!(shift_january_february(0, 1), (-1, 13));
    }

    #[test]
    fn test_shift_january_february_at_year_limits() {
        assert_eq!(
            shift_january_february(i32::MIN, 1),
            (i64::from(i32::MIN) - 1, 13)
        );
        assert_eq!(
            shift_january_february(i32::MIN, 2),
            (i64::from(i32::MIN) - 1, 14)
        );
        assert_eq!(shift_january_february(i32::MAX, 3), (i64::from(i32::MAX), 3));
    }

    #[test]
    fn test_leap_years_by_calendar() {
        struct TestCase {
            year: i64,
            julian: bool,
            gregorian: bool,
        }

        let cases = [
            TestCase {
                year: 2000,
                julian: true,
                gregorian: true,
            },
            TestCase {
                year: 1900,
                julian: true,
                gregorian: false,
            },
            TestCase {
                year: 1500,
                julian: true,
                gregorian: false,
            },
            TestCase {
                year: 2023,
                julian: false,
                gregorian: false,
            },
            TestCase {
                year: 0,
                julian: true,
                gregorian: true,
            },
            TestCase {
                year: -4,
                julian: true,
                gregorian: true,
            },
            TestCase {
                year: -1,
                julian: false,
                gregorian: false,
            },
            TestCase {
                year: -100,
                julian: true,
                gregorian: false,
            },
        ];

        for case in &cases {
            assert_eq!(Calendar::Julian.is_leap_year(case.year), case.julian, "Julian {}", case.year);
            assert_eq!(
                Calendar::Gregorian.is_leap_year(case.year),
                case.gregorian,
                "Gregorian {}",
                case.year
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(Calendar::Gregorian.days_in_month(1900, 2), 28);
        assert_eq!(Calendar::Julian.days_in_month(1500, 2), 29);
        assert_eq!(Calendar::Gregorian.days_in_month(2024, 2), 29);
        for month in [4, 6, 9, 11] {
            assert_eq!(Calendar::Julian.days_in_month(1000, month), 30, "Month {month}");
        }
        for month in [1, 3, 5, 7, 8, 10, 12] {
            assert_eq!(Calendar::Gregorian.days_in_month(2023, month), 31, "Month {month}");
        }
    }

    #[test]
    fn test_calendar_for_date() {
        assert_eq!(Calendar::for_date(1582, 10, 4), Calendar::Julian);
        assert_eq!(Calendar::for_date(1582, 10, 15), Calendar::Gregorian);
        assert_eq!(Calendar::Gregorian.to_string(), "Gregorian");
    }
}
