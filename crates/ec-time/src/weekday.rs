//! `Weekday` — day-of-week enum.

use ec_core::{Language, Serial};

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7).  Month grids use a
/// Sunday-first column index instead, see [`Weekday::sunday_index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Construct from a Sunday-first index (0 = Sunday … 6 = Saturday).
    pub fn from_sunday_index(n: u8) -> Option<Self> {
        match n {
            0 => Some(Weekday::Sunday),
            1..=6 => Self::from_ordinal(n),
            _ => None,
        }
    }

    /// Weekday of a serial day number.  R.D. 1 (0001-01-01) is a Monday.
    pub fn from_serial(serial: Serial) -> Self {
        match serial.rem_euclid(7) {
            0 => Weekday::Sunday,
            1 => Weekday::Monday,
            2 => Weekday::Tuesday,
            3 => Weekday::Wednesday,
            4 => Weekday::Thursday,
            5 => Weekday::Friday,
            _ => Weekday::Saturday,
        }
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Return the Sunday-first index (0 = Sunday … 6 = Saturday).
    pub fn sunday_index(&self) -> u8 {
        self.ordinal() % 7
    }

    /// English name (`"Monday"`, …).
    pub fn english_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Amharic name (`"ሰኞ"`, …).
    pub fn amharic_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "ሰኞ",
            Weekday::Tuesday => "ማክሰኞ",
            Weekday::Wednesday => "ረቡዕ",
            Weekday::Thursday => "ሐሙስ",
            Weekday::Friday => "ዓርብ",
            Weekday::Saturday => "ቅዳሜ",
            Weekday::Sunday => "እሑድ",
        }
    }

    /// Name in the given language.
    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.english_name(),
            Language::Amharic => self.amharic_name(),
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.english_name())
    }
}
