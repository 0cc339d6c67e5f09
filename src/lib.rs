//! Conversion between civil dates and Julian Day Numbers, plus the
//! chronological cycles that make up the Julian Period.
//!
//! Dates from 1582-10-15 on are read as Gregorian, earlier dates as Julian.
//! Years are astronomical: 1 BCE is `0`, 2 BCE is `-1`.
//!
//! # Examples
//!
//! ```
//! use julian_period::{datetime_to_julian_day, julian_day_to_date};
//!
//! let jd = datetime_to_julian_day(1957, 10, 4, 19, 26, 24.0).unwrap();
//! assert!((jd - 2_436_116.31).abs() < 1e-6);
//!
//! let date = julian_day_to_date(jd).unwrap();
//! assert_eq!((date.year, date.month, date.day), (1957, 10, 4));
//! ```
//!
//! Cycle numbers of a year:
//!
//! ```
//! use julian_period::CyclePositions;
//!
//! let positions = CyclePositions::for_year(2000);
//! assert_eq!(positions.solar, 21);
//! assert_eq!(positions.lunar, 6);
//! assert_eq!(positions.indiction, 8);
//! assert_eq!(positions.julian_period, 6713);
//! ```

mod calendar;
mod consts;
mod convert;
mod cycles;
mod error;
mod prelude;
mod types;

pub use calendar::{
    Calendar, century_correction_factor, day_fraction_from_time, is_on_or_after_calendar_switch,
    non_negative_modulo, shift_january_february, truncate_toward_zero,
};
pub use consts::*;
pub use convert::{
    CivilDateTime, date_to_julian_day, datetime_to_julian_day, julian_day_from_components,
    julian_day_to_date,
};
pub use cycles::{
    CyclePositions, indiction_number, julian_period_year_number, lunar_number, solar_number,
};
pub use error::{ConversionError, ErrorKind};
pub use types::{Day, Hour, Minute, Month, Second};
