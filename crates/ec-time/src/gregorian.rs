//! `GregorianDate` — a proleptic Gregorian date stored as a serial number.
//!
//! # Serial number convention
//! * Serial 1 (R.D. 1) = January 1, year 1, a Monday.
//! * The valid range is 0001-01-01 to 9999-12-31.
//!
//! All conversions are integer day counts; there is no clock or timezone.

use crate::month::{is_leap_year, Month};
use crate::weekday::Weekday;
use ec_core::data_parsers::parse_ymd;
use ec_core::errors::{Error, Result};
use ec_core::{ensure, Serial, Year};

/// A Gregorian calendar date represented as a serial day number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GregorianDate(Serial);

impl GregorianDate {
    /// First supported year.
    pub const MIN_YEAR: Year = 1;

    /// Last supported year.
    pub const MAX_YEAR: Year = 9999;

    /// Minimum valid date: January 1, 0001.
    pub const MIN: GregorianDate = GregorianDate(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: GregorianDate = GregorianDate(3_652_059);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    pub fn from_serial(serial: Serial) -> Result<Self> {
        let d = GregorianDate(serial);
        ensure!(
            (Self::MIN..=Self::MAX).contains(&d),
            InvalidRange,
            "serial {serial} outside [{}, {}]",
            Self::MIN.0,
            Self::MAX.0
        );
        Ok(d)
    }

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// A year outside `[1, 9999]` is an `InvalidRange`; a month or day that
    /// does not exist (e.g. February 30) is an `InvalidDate`.
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        ensure!(
            (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year),
            InvalidRange,
            "Gregorian year {year} outside [{}, {}]",
            Self::MIN_YEAR,
            Self::MAX_YEAR
        );
        let Some(mon) = Month::from_number(month) else {
            return Err(Error::InvalidDate(format!(
                "Gregorian month {month} out of range [1, 12] in {year}/{month}/{day}"
            )));
        };
        let days_in = mon.length(year);
        ensure!(
            (1..=days_in).contains(&day),
            InvalidDate,
            "day {day} out of range [1, {days_in}] for Gregorian {year}-{month:02}"
        );
        Ok(GregorianDate(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a serial number known to be in range.
    pub(crate) fn from_serial_unchecked(serial: Serial) -> Self {
        debug_assert!(
            (Self::MIN.0..=Self::MAX.0).contains(&serial),
            "invalid date serial {serial}"
        );
        GregorianDate(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> Serial {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> Year {
        year_from_serial(self.0)
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.ymd().1
    }

    /// Return the month as a [`Month`].
    pub fn month_enum(&self) -> Month {
        match Month::from_number(self.month()) {
            Some(m) => m,
            None => unreachable!("serials always decompose to a month in 1..=12"),
        }
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.ymd().2
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (Year, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let y = self.year();
        (self.0 - serial_from_ymd(y, 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_serial(self.0)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).ok_or_else(|| {
            Error::InvalidRange(format!("date arithmetic overflow adding {n} days"))
        })?;
        Self::from_serial(serial)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: GregorianDate) -> i32 {
        other.0 - self.0
    }

    /// Long textual form, e.g. `"September 12, 2023"`.
    pub fn long_format(&self) -> String {
        let (y, m, d) = self.ymd();
        let mon = Month::from_number(m).map(|m| m.long_name()).unwrap_or("?");
        format!("{mon} {d:02}, {y}")
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

impl std::ops::Sub<GregorianDate> for GregorianDate {
    type Output = i32;
    fn sub(self, rhs: GregorianDate) -> i32 {
        self.0 - rhs.0
    }
}

impl std::str::FromStr for GregorianDate {
    type Err = Error;

    /// Parse `yyyy-mm-dd` or `yyyy/mm/dd`.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_ymd(s)?;
        Self::from_ymd(y, m, d)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = self.ymd();
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for GregorianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "GregorianDate({self})")
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Convert (year, month, day) to a serial number.  No validation.
pub(crate) fn serial_from_ymd(year: Year, month: u8, day: u8) -> Serial {
    let prior = year - 1;
    let m = month as i32;
    let correction = if m <= 2 {
        0
    } else if is_leap_year(year) {
        -1
    } else {
        -2
    };
    365 * prior + prior.div_euclid(4) - prior.div_euclid(100)
        + prior.div_euclid(400)
        + (367 * m - 362).div_euclid(12)
        + correction
        + day as i32
}

/// Year containing a serial number.
fn year_from_serial(serial: Serial) -> Year {
    let d0 = serial - 1;
    let n400 = d0.div_euclid(146_097);
    let d1 = d0.rem_euclid(146_097);
    let n100 = d1.div_euclid(36_524);
    let d2 = d1.rem_euclid(36_524);
    let n4 = d2.div_euclid(1_461);
    let d3 = d2.rem_euclid(1_461);
    let n1 = d3.div_euclid(365);
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    if n100 == 4 || n1 == 4 {
        year
    } else {
        year + 1
    }
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: Serial) -> (Year, u8, u8) {
    let year = year_from_serial(serial);
    let prior_days = serial - serial_from_ymd(year, 1, 1);
    let correction = if serial < serial_from_ymd(year, 3, 1) {
        0
    } else if is_leap_year(year) {
        1
    } else {
        2
    };
    let month = (12 * (prior_days + correction) + 373).div_euclid(367) as u8;
    let day = (serial - serial_from_ymd(year, month, 1) + 1) as u8;
    (year, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch() {
        let d = GregorianDate::from_ymd(1, 1, 1).unwrap();
        assert_eq!(d.serial(), 1);
        assert_eq!(d.weekday(), Weekday::Monday);
        assert_eq!(GregorianDate::from_ymd(9999, 12, 31).unwrap(), GregorianDate::MAX);
    }

    #[test]
    fn test_roundtrip() {
        let dates = [
            (1, 1, 1),
            (8, 8, 27),
            (1900, 2, 28),
            (2000, 2, 29), // leap
            (2100, 2, 28), // non-leap century
            (2023, 9, 12),
            (9999, 12, 31),
        ];
        for (y, m, d) in dates {
            let date = GregorianDate::from_ymd(y, m, d).unwrap();
            assert_eq!(date.ymd(), (y, m, d), "mismatch for {y}-{m:02}-{d:02}");
        }
    }

    #[test]
    fn test_weekday() {
        // 2024-01-01 is a Monday
        let d = GregorianDate::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(d.weekday(), Weekday::Monday);
        // 2023-09-12 is a Tuesday
        let d2 = GregorianDate::from_ymd(2023, 9, 12).unwrap();
        assert_eq!(d2.weekday(), Weekday::Tuesday);
    }

    #[test]
    fn test_invalid() {
        assert!(matches!(
            GregorianDate::from_ymd(2023, 2, 30),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            GregorianDate::from_ymd(2023, 13, 1),
            Err(Error::InvalidDate(_))
        ));
        assert!(matches!(
            GregorianDate::from_ymd(0, 1, 1),
            Err(Error::InvalidRange(_))
        ));
        assert!(GregorianDate::MAX.add_days(1).is_err());
    }

    #[test]
    fn test_formats() {
        let d: GregorianDate = "2023/9/2".parse().unwrap();
        assert_eq!(d.to_string(), "2023-09-02");
        assert_eq!(d.long_format(), "September 02, 2023");
        assert_eq!(format!("{d:?}"), "GregorianDate(2023-09-02)");
        assert_eq!(d.day_of_year(), 245);
    }
}
