//! Error types for ethcal.
//!
//! Every rejected input is reported as one of the variants of [`Error`];
//! nothing is clamped or coerced.  The [`ensure!`](crate::ensure) and
//! [`fail!`](crate::fail) macros are the usual way of producing them.

use thiserror::Error;

/// The top-level error type used throughout ethcal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A year or month index lies outside the supported domain.
    #[error("out of range: {0}")]
    InvalidRange(String),

    /// A day or month is not valid for the calendar it belongs to
    /// (e.g. Pagume 6 in a common year, or February 30).
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// A holiday key is not part of the reference dataset.
    #[error("not found: {0}")]
    NotFound(String),

    /// A date string does not follow `yyyy-mm-dd` or `yyyy/mm/dd`.
    #[error("invalid date string format: \"{0}\", expected 'yyyy-mm-dd' or 'yyyy/mm/dd'")]
    Parse(String),

    /// A holiday dataset could not be read or is inconsistent.
    #[error("dataset error: {0}")]
    Dataset(String),

    /// A JSON request could not be decoded.
    #[error("malformed request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Stable name of the error class, as reported to API consumers.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::InvalidRange(_) => "InvalidRange",
            Error::InvalidDate(_) => "InvalidDate",
            Error::NotFound(_) => "NotFound",
            Error::Parse(_) => "Parse",
            Error::Dataset(_) => "Dataset",
            Error::InvalidRequest(_) => "InvalidRequest",
        }
    }
}

/// Shorthand `Result` type used throughout ethcal.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with the given [`Error`] variant unless `$cond` holds.
///
/// # Example
/// ```
/// use ec_core::{ensure, errors::Error};
/// fn month(m: u8) -> ec_core::Result<u8> {
///     ensure!((1..=13).contains(&m), InvalidDate, "month {m} out of [1, 13]");
///     Ok(m)
/// }
/// assert!(month(13).is_ok());
/// assert_eq!(month(14).unwrap_err().kind(), "InvalidDate");
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $kind:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$kind(format!($($msg)*)));
        }
    };
}

/// Return early with the given [`Error`] variant.
///
/// # Example
/// ```
/// use ec_core::{fail, errors::Error};
/// fn lookup(key: &str) -> ec_core::Result<()> {
///     fail!(NotFound, "holiday '{key}'");
/// }
/// assert_eq!(lookup("x"), Err(Error::NotFound("holiday 'x'".into())));
/// ```
#[macro_export]
macro_rules! fail {
    ($kind:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$kind(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked(day: u8) -> Result<u8> {
        crate::ensure!(day <= 30, InvalidDate, "day {day} exceeds 30");
        Ok(day)
    }

    #[test]
    fn ensure_passes_and_fails() {
        assert_eq!(checked(30), Ok(30));
        assert_eq!(
            checked(31),
            Err(Error::InvalidDate("day 31 exceeds 30".into()))
        );
    }

    #[test]
    fn display_includes_class() {
        let e = Error::InvalidRange("year 0".into());
        assert_eq!(e.to_string(), "out of range: year 0");
        assert_eq!(e.kind(), "InvalidRange");
        assert_eq!(Error::Parse("x".into()).kind(), "Parse");
    }
}
