//! Solar, lunar and indiction cycle numbers and the year of the Julian Period.
//!
//! All functions take an astronomical year (1 BCE is `0`).

use crate::calendar::non_negative_modulo;
use crate::consts::{
    INDICTION_COEFFICIENT, INDICTION_CYCLE, INDICTION_OFFSET, JULIAN_PERIOD, LUNAR_COEFFICIENT,
    LUNAR_CYCLE, SOLAR_COEFFICIENT, SOLAR_CYCLE, SOLAR_OFFSET,
};
use serde::{Deserialize, Serialize};

/// Position of the year in the 28-year solar cycle, `1..=28`.
pub const fn solar_number(year: i32) -> u32 {
    cycle_position(year as i64 + SOLAR_OFFSET, SOLAR_CYCLE)
}

/// Golden number: position in the 19-year Metonic cycle, `1..=19`.
pub const fn lunar_number(year: i32) -> u32 {
    cycle_position(year as i64, LUNAR_CYCLE)
}

/// Position of the year in the 15-year indiction cycle, `1..=15`.
pub const fn indiction_number(year: i32) -> u32 {
    cycle_position(year as i64 + INDICTION_OFFSET, INDICTION_CYCLE)
}

/// Year of the 7980-year Julian Period, `1..=7980`. Year 1 of the period is
/// 4713 BCE (astronomical -4712).
///
/// # Example
///
/// ```
/// use julian_period::julian_period_year_number;
///
/// assert_eq!(julian_period_year_number(-4712), 1);
/// assert_eq!(julian_period_year_number(1), 4714);
/// ```
pub const fn julian_period_year_number(year: i32) -> u32 {
    let indiction = indiction_number(year) as i64 - 1;
    let lunar = lunar_number(year) as i64 - 1;
    let solar = solar_number(year) as i64 - 1;
    let combined = INDICTION_COEFFICIENT * indiction
        + LUNAR_COEFFICIENT * lunar
        + SOLAR_COEFFICIENT * solar;
    cycle_position(combined, JULIAN_PERIOD)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
const fn cycle_position(n: i64, length: i64) -> u32 {
    non_negative_modulo(n, length) as u32 + 1
}

/// All cycle numbers of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CyclePositions {
    pub solar: u32,
    pub lunar: u32,
    pub indiction: u32,
    pub julian_period: u32,
}

impl CyclePositions {
    pub const fn for_year(year: i32) -> Self {
        Self {
            solar: solar_number(year),
            lunar: lunar_number(year),
            indiction: indiction_number(year),
            julian_period: julian_period_year_number(year),
        }
    }
}
