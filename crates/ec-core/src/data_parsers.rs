//! Date-string parsing helpers.
//!
//! Both calendars accept the same textual forms: `yyyy-mm-dd` and
//! `yyyy/mm/dd`.  Parsing only splits the fields; validating them against a
//! calendar is the job of the date constructors.

use crate::errors::{Error, Result};

/// Parse a date string in `yyyy-mm-dd` or `yyyy/mm/dd` form.
///
/// Returns `(year, month, day)`.  Year may be any integer (range checks
/// happen later), month and day must fit in a `u8`.
pub fn parse_ymd(s: &str) -> Result<(i32, u8, u8)> {
    let trimmed = s.trim();
    let sep = if trimmed.contains('-') { '-' } else { '/' };
    let parts: Vec<&str> = trimmed.split(sep).collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return Err(Error::Parse(s.to_string()));
    }
    let year: i32 = parts[0].parse().map_err(|_| Error::Parse(s.to_string()))?;
    let month: u8 = parts[1].parse().map_err(|_| Error::Parse(s.to_string()))?;
    let day: u8 = parts[2].parse().map_err(|_| Error::Parse(s.to_string()))?;
    Ok((year, month, day))
}
