//! # ec-time
//!
//! Ethiopian and Gregorian date types, conversion between them, and
//! Ethiopian day arithmetic.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `EthiopianDate` and calendar conversion.
pub mod ethiopian;

/// `EthiopianMonth` and the Ethiopian leap-year rule.
pub mod ethiopian_month;

/// `Evangelist` — the four-year naming cycle.
pub mod evangelist;

/// `GregorianDate` type.
pub mod gregorian;

/// Gregorian `Month` and the Gregorian leap-year rule.
pub mod month;

/// `TimeUnit` — days, weeks, months, years.
pub mod time_unit;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use ethiopian::{EthiopianDate, ETHIOPIAN_EPOCH};
pub use ethiopian_month::EthiopianMonth;
pub use evangelist::Evangelist;
pub use gregorian::GregorianDate;
pub use month::Month;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
