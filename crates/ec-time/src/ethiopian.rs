//! `EthiopianDate` and conversion to and from the Gregorian calendar.
//!
//! Conversion goes through the shared serial day number.  The Ethiopian
//! (Amete Mihret) epoch, Meskerem 1 of year 1, is Julian August 29, 8 A.D.,
//! serial 2796 (Gregorian 0008-08-27).  From there every year has 365 days
//! plus one in leap years (`year mod 4 == 3`), and every month but Pagume has
//! 30 days, so the mapping is a closed-form integer expression in both
//! directions.

use crate::ethiopian_month::{is_leap_year, EthiopianMonth};
use crate::gregorian::GregorianDate;
use crate::time_unit::TimeUnit;
use crate::weekday::Weekday;
use ec_core::data_parsers::parse_ymd;
use ec_core::errors::{Error, Result};
use ec_core::{ensure, Serial, Year};

/// Serial number of Meskerem 1, year 1.
pub const ETHIOPIAN_EPOCH: Serial = 2796;

/// A date in the Ethiopian calendar.
///
/// Always valid: `month` is in 1–13 and `day` within that month's length
/// for `year`.  Ordering is chronological.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EthiopianDate {
    year: Year,
    month: u8,
    day: u8,
}

impl EthiopianDate {
    /// First supported year.
    pub const MIN_YEAR: Year = 1;

    /// Last supported year; its Pagume ends in November 9999.
    pub const MAX_YEAR: Year = 9991;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–13), and day.
    ///
    /// A year outside `[MIN_YEAR, MAX_YEAR]` is an `InvalidRange`.  A month
    /// outside 1–13 or a day beyond the month's length (30, or 5/6 for
    /// Pagume) is an `InvalidDate`.
    pub fn new(year: Year, month: u8, day: u8) -> Result<Self> {
        check_year(year)?;
        let Some(mon) = EthiopianMonth::from_number(month) else {
            return Err(Error::InvalidDate(format!(
                "Ethiopian month {month} out of range [1, 13] in {year}/{month}/{day}"
            )));
        };
        let len = mon.length(year);
        ensure!(
            (1..=len).contains(&day),
            InvalidDate,
            "day {day} out of range [1, {len}] for {mon} {year}"
        );
        Ok(Self { year, month, day })
    }

    /// Convert a Gregorian date.
    ///
    /// Dates before the Ethiopian epoch or after the last supported year
    /// are an `InvalidRange`.
    pub fn from_gregorian(date: GregorianDate) -> Result<Self> {
        Self::from_serial(date.serial())
    }

    /// Create a date from a serial day number.
    pub fn from_serial(serial: Serial) -> Result<Self> {
        ensure!(
            serial >= ETHIOPIAN_EPOCH,
            InvalidRange,
            "serial {serial} precedes the Ethiopian epoch"
        );
        let last = serial_from_ymd(Self::MAX_YEAR, 13, 6);
        ensure!(
            serial <= last,
            InvalidRange,
            "serial {serial} is past the last supported day {last}"
        );
        let year = (4 * (serial - ETHIOPIAN_EPOCH) + 1463).div_euclid(1461);
        check_year(year)?;
        let month = ((serial - serial_from_ymd(year, 1, 1)).div_euclid(30) + 1) as u8;
        let day = (serial + 1 - serial_from_ymd(year, month, 1)) as u8;
        Ok(Self { year, month, day })
    }

    /// Meskerem 1 of `year`.
    pub fn new_year(year: Year) -> Result<Self> {
        Self::new(year, 1, 1)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month (1–13).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the month as an [`EthiopianMonth`].
    pub fn month_enum(&self) -> EthiopianMonth {
        match EthiopianMonth::from_number(self.month) {
            Some(m) => m,
            None => unreachable!("constructor guarantees month in 1..=13"),
        }
    }

    /// Return the day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        (self.month as u16 - 1) * 30 + self.day as u16
    }

    /// Whether this date lies in a leap year.
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Return the serial day number.
    pub fn serial(&self) -> Serial {
        serial_from_ymd(self.year, self.month, self.day)
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        Weekday::from_serial(self.serial())
    }

    /// Convert to the Gregorian calendar.
    pub fn to_gregorian(&self) -> GregorianDate {
        GregorianDate::from_serial_unchecked(self.serial())
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days (negative to go back).
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.serial().checked_add(n).ok_or_else(|| {
            Error::InvalidRange(format!("date arithmetic overflow adding {n} days"))
        })?;
        Self::from_serial(serial)
    }

    /// Advance by `n` units.
    ///
    /// Months count Pagume as the 13th month of the year; when the target
    /// month is shorter than the original day (Pagume), the day is moved to
    /// the month's last day.  Adding years to Pagume 6 lands on Pagume 5 in a
    /// common year.
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        let overflow =
            || Error::InvalidRange(format!("date arithmetic overflow advancing {n} {unit}"));
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Weeks => self.add_days(n.checked_mul(7).ok_or_else(overflow)?),
            TimeUnit::Months => {
                let total = (self.month as i32 - 1).checked_add(n).ok_or_else(overflow)?;
                let year = self.year + total.div_euclid(13);
                check_year(year)?;
                let month = (total.rem_euclid(13) + 1) as u8;
                let len = month_length(year, month);
                Self::new(year, month, self.day.min(len))
            }
            TimeUnit::Years => {
                let year = self.year.checked_add(n).ok_or_else(overflow)?;
                check_year(year)?;
                let day = self.day.min(month_length(year, self.month));
                Self::new(year, self.month, day)
            }
        }
    }

    /// Number of days from `self` to `other`; positive if `other` is later.
    pub fn days_between(self, other: EthiopianDate) -> i32 {
        other.serial() - self.serial()
    }

    /// Whole months from `self` to `other`; positive if `other` is later.
    ///
    /// A month is complete once the day of the month has been reached again.
    pub fn months_between(self, other: EthiopianDate) -> i32 {
        if other < self {
            return -other.months_between(self);
        }
        let months = |d: &EthiopianDate| d.year * 13 + d.month as i32;
        let mut diff = months(&other) - months(&self);
        if other.day < self.day {
            diff -= 1;
        }
        diff
    }

    /// Whole years from `self` to `other`; positive if `other` is later.
    pub fn years_between(self, other: EthiopianDate) -> i32 {
        if other < self {
            return -other.years_between(self);
        }
        let mut diff = other.year - self.year;
        if (other.month, other.day) < (self.month, self.day) {
            diff -= 1;
        }
        diff
    }
}

impl From<EthiopianDate> for GregorianDate {
    fn from(date: EthiopianDate) -> Self {
        date.to_gregorian()
    }
}

impl TryFrom<GregorianDate> for EthiopianDate {
    type Error = Error;

    fn try_from(date: GregorianDate) -> Result<Self> {
        Self::from_gregorian(date)
    }
}

impl std::str::FromStr for EthiopianDate {
    type Err = Error;

    /// Parse `yyyy-mm-dd` or `yyyy/mm/dd`.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_ymd(s)?;
        Self::new(y, m, d)
    }
}

impl std::fmt::Display for EthiopianDate {
    /// `"1 Meskerem 2016"`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.day, self.month_enum(), self.year)
    }
}

impl std::fmt::Debug for EthiopianDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "EthiopianDate({:04}-{:02}-{:02})",
            self.year, self.month, self.day
        )
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn check_year(year: Year) -> Result<()> {
    ensure!(
        (EthiopianDate::MIN_YEAR..=EthiopianDate::MAX_YEAR).contains(&year),
        InvalidRange,
        "Ethiopian year {year} outside [{}, {}]",
        EthiopianDate::MIN_YEAR,
        EthiopianDate::MAX_YEAR
    );
    Ok(())
}

fn month_length(year: Year, month: u8) -> u8 {
    if month == 13 {
        EthiopianMonth::Pagume.length(year)
    } else {
        30
    }
}

/// Serial number of an Ethiopian (year, month, day).  No validation.
fn serial_from_ymd(year: Year, month: u8, day: u8) -> Serial {
    ETHIOPIAN_EPOCH - 1
        + 365 * (year - 1)
        + year.div_euclid(4)
        + 30 * (month as i32 - 1)
        + day as i32
}

// ── Tests ─────────────────────────────────────────────────────────────────────
