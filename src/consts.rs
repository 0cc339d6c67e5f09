/// Year of the Julian to Gregorian switchover
pub const SWITCH_YEAR: i64 = 1582;
/// Month of the switchover (October)
pub const SWITCH_MONTH: u32 = 10;
/// Last Julian day of month before the switchover (October 4 is followed by October 15)
pub const LAST_JULIAN_DAY: u32 = 14;

/// JDN of 1582-10-15 (Gregorian) at noon, the first day reckoned in the Gregorian calendar
pub const FIRST_GREGORIAN_JDN: f64 = 2_299_161.0;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for February
pub const FEBRUARY: u32 = 2;
/// Month number for March, the first month of the shifted (March-based) year
pub const MARCH: u32 = 3;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;
/// Maximum day accepted by the forward conversion
pub const MAX_DAY: u32 = 31;
/// First day of month, used for lower bounds
pub const MIN_DAY: u32 = 1;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u32; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i64 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i64 = 400;

pub const HOURS_PER_DAY: u32 = 24;
pub const MINUTES_PER_HOUR: u32 = 60;
pub const SECONDS_PER_MINUTE: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 1440;
pub const SECONDS_PER_DAY: u32 = 86_400;
pub(crate) const MILLIS_PER_SECOND: u32 = 1000;
pub(crate) const MILLIS_PER_MINUTE: u32 = 60_000;
pub(crate) const MILLIS_PER_HOUR: u32 = 3_600_000;
pub(crate) const MILLIS_PER_DAY: f64 = 86_400_000.0;

// Meeus constants
pub(crate) const DAYS_PER_JULIAN_YEAR: f64 = 365.25;
pub(crate) const DAYS_PER_GREGORIAN_CENTURY: f64 = 36_524.25;
pub(crate) const MONTH_LENGTH_FACTOR: f64 = 30.6001;
pub(crate) const EPOCH_YEAR_OFFSET: f64 = 4716.0;
pub(crate) const EPOCH_DAY_OFFSET: f64 = 1524.5;
pub(crate) const GREGORIAN_ALPHA_OFFSET: f64 = 1_867_216.25;
pub(crate) const INVERSE_DAY_OFFSET: f64 = 1524.0;
pub(crate) const INVERSE_YEAR_BIAS: f64 = 122.1;

/// Length of the solar cycle in years
pub const SOLAR_CYCLE: i64 = 28;
/// Length of the Metonic (lunar) cycle in years
pub const LUNAR_CYCLE: i64 = 19;
/// Length of the indiction cycle in years
pub const INDICTION_CYCLE: i64 = 15;
/// Length of the Julian Period in years (28 * 19 * 15)
pub const JULIAN_PERIOD: i64 = 7980;

pub(crate) const SOLAR_OFFSET: i64 = 8;
pub(crate) const INDICTION_OFFSET: i64 = 2;

/// Coefficients reducing to the indiction, lunar and solar residues modulo 7980
pub(crate) const INDICTION_COEFFICIENT: i64 = 6916;
pub(crate) const LUNAR_COEFFICIENT: i64 = 4200;
pub(crate) const SOLAR_COEFFICIENT: i64 = 4845;
