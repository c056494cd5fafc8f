//! Proleptic Gregorian calendar ↔ Julian Day conversion.
//!
//! Integer Julian Day Numbers (JDN) label the day starting at noon UT;
//! the fractional Julian Day therefore has `.0` at noon and `.5` at
//! midnight. J2000.0 = JD 2451545.0 = 2000-01-01 12:00.
//!
//! The integer path is the Fliegel–Van Flandern style algorithm
//! (Jan/Feb treated as months 13/14 of the previous year, Gregorian
//! century correction) written with Euclidean division so it stays
//! exact for years before −4800. Its inverse is Richards' algorithm.
//!
//! No field is range-checked: out-of-range months or days produce a
//! Julian Day, just not a meaningful one. See [`validate_calendar`] for
//! the strict check used by the validating layer.

use std::fmt;
use std::str::FromStr;

use crate::error::TimeError;
use crate::precise::DoubleDouble;

/// Julian Day of J2000.0 (2000-01-01 12:00 UT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Exactly 60 × 60 × 24.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days per Julian century.
pub const JULIAN_CENTURY_DAYS: f64 = 36_525.0;

/// Finest time-of-day resolution the inverse conversion reports.
const MAX_TICKS_PER_SECOND: i64 = 1_000_000;

/// Calendar date without a time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GregorianDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

/// Calendar date and time of day, UT.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GregorianDateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl GregorianDateTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    pub fn date(&self) -> GregorianDate {
        GregorianDate {
            year: self.year,
            month: self.month,
            day: self.day,
        }
    }

    /// Julian Day of this instant.
    pub fn to_julian_day(&self) -> f64 {
        gregorian_date_time_to_julian_day(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }

    /// Calendar fields of a Julian Day.
    pub fn from_julian_day(jd: f64) -> Self {
        julian_day_to_gregorian_date_time(jd)
    }
}

impl fmt::Display for GregorianDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.year < 0 { "-" } else { "" };
        write!(
            f,
            "{sign}{:04}-{:02}-{:02}T{:02}:{:02}:",
            self.year.unsigned_abs(),
            self.month,
            self.day,
            self.hour,
            self.minute
        )?;

        // Rounding to microseconds must not print a sixtieth second.
        let mut micros = (self.second * 1e6).round() as i64;
        if self.second < 60.0 && micros >= 60_000_000 {
            micros = 59_999_999;
        }
        let whole = micros.div_euclid(1_000_000);
        let frac = micros.rem_euclid(1_000_000);
        if frac == 0 {
            write!(f, "{whole:02}Z")
        } else {
            write!(f, "{whole:02}.{frac:06}Z")
        }
    }
}

impl FromStr for GregorianDateTime {
    type Err = TimeError;

    /// Parse `YYYY-MM-DDThh:mm:ss[.fff]Z` (the trailing `Z` is optional,
    /// a space may replace the `T`, and a leading `-` marks a BCE year).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TimeError::Parse(s.to_string());
        let s = s.trim();
        let s = s.strip_suffix('Z').unwrap_or(s);
        let (date, time) = s.split_once(['T', ' ']).unwrap_or((s, "00:00:00"));

        let (negative, date) = match date.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, date),
        };
        let mut parts = date.splitn(3, '-');
        let year: i32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let month: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let day: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;

        let mut parts = time.splitn(3, ':');
        let hour: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let minute: u32 = parts.next().and_then(|p| p.parse().ok()).ok_or_else(bad)?;
        let second: f64 = match parts.next() {
            Some(p) => p.parse().map_err(|_| bad())?,
            None => 0.0,
        };

        let year = if negative { -year } else { year };
        validate_calendar(year, month, day, hour, minute, second)?;
        Ok(Self::new(year, month, day, hour, minute, second))
    }
}

/// Whether `year` is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` of `year`; 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Strict range check of calendar fields.
///
/// The converters themselves never call this; it backs the validating
/// wrappers and the string parser.
pub fn validate_calendar(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<(), TimeError> {
    if !(1..=12).contains(&month) {
        return Err(TimeError::FieldOutOfRange("month must be in 1..=12"));
    }
    if day == 0 || day > days_in_month(year, month) {
        return Err(TimeError::FieldOutOfRange("day is not valid for the month"));
    }
    if hour > 23 {
        return Err(TimeError::FieldOutOfRange("hour must be in 0..=23"));
    }
    if minute > 59 {
        return Err(TimeError::FieldOutOfRange("minute must be in 0..=59"));
    }
    if !(0.0..60.0).contains(&second) {
        return Err(TimeError::FieldOutOfRange("second must be in [0, 60)"));
    }
    Ok(())
}

/// Julian Day Number (the day beginning at noon) of a calendar date.
pub fn gregorian_date_to_julian_day(year: i32, month: u32, day: u32) -> i64 {
    let month = month as i64;
    let a = (14 - month).div_euclid(12);
    let y = year as i64 + 4800 - a;
    let m = month + 12 * a - 3;
    day as i64 + (153 * m + 2).div_euclid(5) + 365 * y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        - 32045
}

/// Calendar date of a Julian Day Number. Exact inverse of
/// [`gregorian_date_to_julian_day`].
pub fn julian_day_to_gregorian_date(jdn: i64) -> GregorianDate {
    let j = jdn.saturating_add(32044);
    let g = j.div_euclid(146_097);
    let dg = j.rem_euclid(146_097);
    let c = (dg / 36_524 + 1) * 3 / 4;
    let dc = dg - c * 36_524;
    let b = dc / 1461;
    let db = dc % 1461;
    let a = (db / 365 + 1) * 3 / 4;
    let da = db - a * 365;
    let y = g * 400 + c * 100 + b * 4 + a;
    let m = (da * 5 + 308) / 153 - 2;
    let d = da - (m + 4) * 153 / 5 + 122;
    GregorianDate {
        year: (y - 4800 + (m + 2) / 12) as i32,
        month: ((m + 2) % 12 + 1) as u32,
        day: (d + 1) as u32,
    }
}

/// Julian Day of a calendar instant, in extended precision.
///
/// The day fraction is assembled in seconds and divided once in
/// double-double arithmetic, so the only rounding happens when the
/// caller finally asks for an `f64`.
pub fn gregorian_date_time_to_julian_day_precise(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> DoubleDouble {
    let jdn = gregorian_date_to_julian_day(year, month, day);
    // Integer JDs fall on noon.
    let whole_seconds = (hour as f64 - 12.0) * 3600.0 + minute as f64 * 60.0;
    let seconds_from_noon = DoubleDouble::from(whole_seconds) + second;
    DoubleDouble::from(jdn) + seconds_from_noon / SECONDS_PER_DAY
}

/// Julian Day of a calendar instant.
pub fn gregorian_date_time_to_julian_day(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> f64 {
    gregorian_date_time_to_julian_day_precise(year, month, day, hour, minute, second).to_f64()
}

/// Calendar instant of a Julian Day.
///
/// The time of day is rounded to the finest decimal step (down to one
/// microsecond) that is still coarser than the spacing of `f64` values
/// around `jd`, then split into fields. An instant on that step
/// round-trips with exact year/month/day/hour/minute. For present-era
/// dates the step is 100 µs, so only seconds in the last 50 µs of a
/// minute land on the next minute: such instants and the next whole
/// minute share the same `f64` Julian Day.
pub fn julian_day_to_gregorian_date_time(jd: f64) -> GregorianDateTime {
    let shifted = jd + 0.5;
    let day_start = shifted.floor();
    let mut jdn = day_start as i64;

    let ticks_per_second = ticks_per_second_near(shifted);
    let ticks_per_minute = 60 * ticks_per_second;
    let ticks_per_hour = 60 * ticks_per_minute;
    let ticks_per_day = 24 * ticks_per_hour;
    let mut ticks = ((shifted - day_start) * ticks_per_day as f64).round() as i64;
    if ticks >= ticks_per_day {
        jdn = jdn.saturating_add(1);
        ticks -= ticks_per_day;
    }

    let date = julian_day_to_gregorian_date(jdn);
    let hour = ticks / ticks_per_hour;
    let minute = (ticks % ticks_per_hour) / ticks_per_minute;
    let second = (ticks % ticks_per_minute) as f64 / ticks_per_second as f64;
    GregorianDateTime {
        year: date.year,
        month: date.month,
        day: date.day,
        hour: hour as u32,
        minute: minute as u32,
        second,
    }
}

/// Decimal ticks per second whose step exceeds the uncertainty of a Julian
/// Day stored as `x` (half the gap to the next `f64`, on either side).
fn ticks_per_second_near(x: f64) -> i64 {
    let x = x.abs();
    let gap_seconds = (f64::from_bits(x.to_bits().wrapping_add(1)) - x) * SECONDS_PER_DAY;
    let mut ticks = MAX_TICKS_PER_SECOND;
    while ticks > 1 && 1.0 / (ticks as f64) < gap_seconds {
        ticks /= 10;
    }
    ticks
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_centuries_since_j2000(jd: f64) -> f64 {
    (jd - J2000_JD) / JULIAN_CENTURY_DAYS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn j2000_noon() {
        assert_eq!(gregorian_date_time_to_julian_day(2000, 1, 1, 12, 0, 0.0), J2000_JD);
    }

    #[test]
    fn midnight_is_half_day() {
        assert_eq!(
            gregorian_date_time_to_julian_day(1999, 12, 31, 0, 0, 0.0),
            2_451_543.5
        );
    }

    #[test]
    fn jdn_known_values() {
        assert_eq!(gregorian_date_to_julian_day(2000, 1, 1), 2_451_545);
        // Unix epoch
        assert_eq!(gregorian_date_to_julian_day(1970, 1, 1), 2_440_588);
        // Start of the Julian period in the proleptic Gregorian calendar.
        assert_eq!(gregorian_date_to_julian_day(-4713, 11, 24), 0);
        // Leap day handling across a century that is not a leap year.
        assert_eq!(
            gregorian_date_to_julian_day(1900, 3, 1) - gregorian_date_to_julian_day(1900, 2, 28),
            1
        );
        assert_eq!(
            gregorian_date_to_julian_day(2000, 3, 1) - gregorian_date_to_julian_day(2000, 2, 28),
            2
        );
    }

    #[test]
    fn jdn_inverse_spot_checks() {
        let d = julian_day_to_gregorian_date(2_451_545);
        assert_eq!((d.year, d.month, d.day), (2000, 1, 1));
        let d = julian_day_to_gregorian_date(0);
        assert_eq!((d.year, d.month, d.day), (-4713, 11, 24));
        let d = julian_day_to_gregorian_date(-1);
        assert_eq!((d.year, d.month, d.day), (-4713, 11, 23));
    }

    #[test]
    fn jdn_roundtrip_dense() {
        // Every day from roughly -5800 to +6300.
        for jdn in (-400_000_i64..4_000_000).step_by(3) {
            let d = julian_day_to_gregorian_date(jdn);
            assert_eq!(gregorian_date_to_julian_day(d.year, d.month, d.day), jdn);
        }
    }

    #[test]
    fn inverse_of_known_instant() {
        let t = julian_day_to_gregorian_date_time(2_454_470.115_474_537);
        assert_eq!((t.year, t.month, t.day), (2008, 1, 4));
        assert_eq!((t.hour, t.minute), (14, 46));
        assert!((t.second - 17.0).abs() < 0.1);
    }

    #[test]
    fn inverse_at_midnight_boundary() {
        let t = julian_day_to_gregorian_date_time(2_451_544.5);
        assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (2000, 1, 1, 0, 0));
        assert_eq!(t.second, 0.0);
    }

    #[test]
    fn end_of_day_carries_into_next_day() {
        // Indistinguishable from the next midnight at this Julian Day.
        let jd = gregorian_date_time_to_julian_day(2023, 12, 31, 23, 59, 59.999_99);
        let t = julian_day_to_gregorian_date_time(jd);
        assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (2024, 1, 1, 0, 0));
    }

    #[test]
    fn garbage_in_does_not_panic() {
        let _ = gregorian_date_time_to_julian_day(i32::MAX, 99, 400, 99, 99, -5.0);
        let _ = julian_day_to_gregorian_date_time(f64::NAN);
        let _ = julian_day_to_gregorian_date_time(f64::INFINITY);
        let _ = julian_day_to_gregorian_date_time(-1.0e300);
    }

    #[test]
    fn display_and_parse() {
        let t = GregorianDateTime::new(2024, 1, 15, 0, 0, 0.0);
        assert_eq!(t.to_string(), "2024-01-15T00:00:00Z");
        let parsed: GregorianDateTime = "2024-01-15T00:00:00Z".parse().unwrap();
        assert_eq!(parsed, t);

        let frac: GregorianDateTime = "1999-08-11 11:03:30.25".parse().unwrap();
        assert_eq!((frac.hour, frac.minute), (11, 3));
        assert!((frac.second - 30.25).abs() < 1e-12);

        let bce: GregorianDateTime = "-0044-03-15T12:00:00Z".parse().unwrap();
        assert_eq!(bce.year, -44);
    }

    #[test]
    fn late_seconds_stay_in_their_minute() {
        for second in [59.999, 59.9996, 59.9999] {
            let jd = gregorian_date_time_to_julian_day(2024, 1, 1, 10, 20, second);
            let t = julian_day_to_gregorian_date_time(jd);
            assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (2024, 1, 1, 10, 20));
            assert!((t.second - second).abs() < 1e-6, "{second} -> {}", t.second);
        }
    }

    #[test]
    fn whole_minutes_do_not_fall_back() {
        for (year, month, day) in [(-4000, 1, 1), (1, 1, 1), (2024, 1, 1), (9999, 12, 31)] {
            let jd = gregorian_date_time_to_julian_day(year, month, day, 10, 21, 0.0);
            let t = julian_day_to_gregorian_date_time(jd);
            assert_eq!((t.year, t.month, t.day, t.hour, t.minute), (year, month, day, 10, 21));
            assert_eq!(t.second, 0.0);
        }
    }

    #[test]
    fn resolution_follows_magnitude() {
        assert_eq!(ticks_per_second_near(2_460_311.0), 10_000);
        assert_eq!(ticks_per_second_near(260_000.0), 100_000);
        assert_eq!(ticks_per_second_near(0.5), MAX_TICKS_PER_SECOND);
        assert_eq!(ticks_per_second_near(1.0e300), 1);
    }

    #[test]
    fn display_bce_year() {
        let t = GregorianDateTime::new(-44, 3, 15, 12, 0, 0.0);
        assert_eq!(t.to_string(), "-0044-03-15T12:00:00Z");
        let back: GregorianDateTime = t.to_string().parse().unwrap();
        assert_eq!(back, t);
        assert_eq!(GregorianDateTime::new(-4713, 11, 24, 12, 0, 0.0).to_string(), "-4713-11-24T12:00:00Z");
    }

    #[test]
    fn display_never_shows_sixty_seconds() {
        let t = GregorianDateTime::new(2024, 1, 1, 10, 20, 59.999_999_6);
        assert_eq!(t.to_string(), "2024-01-01T10:20:59.999999Z");
        let t = GregorianDateTime::new(2024, 1, 1, 10, 20, 30.25);
        assert_eq!(t.to_string(), "2024-01-01T10:20:30.250000Z");
        let t = GregorianDateTime::new(2024, 1, 1, 10, 20, 5.000_000_2);
        assert_eq!(t.to_string(), "2024-01-01T10:20:05Z");
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert!("not a date".parse::<GregorianDateTime>().is_err());
        assert!("2023-02-29T00:00:00Z".parse::<GregorianDateTime>().is_err());
        assert!("2024-13-01T00:00:00Z".parse::<GregorianDateTime>().is_err());
        assert!("2024-01-01T24:00:00Z".parse::<GregorianDateTime>().is_err());
    }

    #[test]
    fn leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(-4));
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2023, 13), 0);
    }

    #[test]
    fn centuries() {
        assert_eq!(julian_centuries_since_j2000(J2000_JD), 0.0);
        assert!((julian_centuries_since_j2000(J2000_JD + 36_525.0) - 1.0).abs() < 1e-15);
    }
}
