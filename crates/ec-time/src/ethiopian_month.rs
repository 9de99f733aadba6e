//! `EthiopianMonth` — the twelve 30-day months plus Pagume.

use ec_core::{Language, Year};

/// Ethiopian month of the year (Meskerem = 1 … Pagume = 13).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum EthiopianMonth {
    /// Meskerem (1).
    Meskerem = 1,
    /// Tikimt (2).
    Tikimt = 2,
    /// Hidar (3).
    Hidar = 3,
    /// Tahsas (4).
    Tahsas = 4,
    /// Tir (5).
    Tir = 5,
    /// Yekatit (6).
    Yekatit = 6,
    /// Megabit (7).
    Megabit = 7,
    /// Miazia (8).
    Miazia = 8,
    /// Ginbot (9).
    Ginbot = 9,
    /// Sene (10).
    Sene = 10,
    /// Hamle (11).
    Hamle = 11,
    /// Nehase (12).
    Nehase = 12,
    /// Pagume (13), the intercalary month of 5 or 6 days.
    Pagume = 13,
}

/// All months in calendar order.
pub const ALL_MONTHS: [EthiopianMonth; 13] = [
    EthiopianMonth::Meskerem,
    EthiopianMonth::Tikimt,
    EthiopianMonth::Hidar,
    EthiopianMonth::Tahsas,
    EthiopianMonth::Tir,
    EthiopianMonth::Yekatit,
    EthiopianMonth::Megabit,
    EthiopianMonth::Miazia,
    EthiopianMonth::Ginbot,
    EthiopianMonth::Sene,
    EthiopianMonth::Hamle,
    EthiopianMonth::Nehase,
    EthiopianMonth::Pagume,
];

const ENGLISH: [&str; 13] = [
    "Meskerem", "Tikimt", "Hidar", "Tahsas", "Tir", "Yekatit", "Megabit", "Miazia", "Ginbot",
    "Sene", "Hamle", "Nehase", "Pagume",
];

const AMHARIC: [&str; 13] = [
    "መስከረም", "ጥቅምት", "ህዳር", "ታህሳስ", "ጥር", "የካቲት", "መጋቢት", "ሚያዝያ", "ግንቦት", "ሰኔ", "ሀምሌ",
    "ነሐሴ", "ጳጉሜ",
];

impl EthiopianMonth {
    /// Construct from a 1-based number (1 = Meskerem … 13 = Pagume).
    pub fn from_number(n: u8) -> Option<Self> {
        ALL_MONTHS.get((n as usize).wrapping_sub(1)).copied()
    }

    /// Construct from a 0-based index, as used by month grids (12 = Pagume).
    pub fn from_index(idx: u8) -> Option<Self> {
        ALL_MONTHS.get(idx as usize).copied()
    }

    /// Return the 1-based month number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Return the 0-based index.
    pub fn index(&self) -> u8 {
        self.number() - 1
    }

    /// Number of days in this month of Ethiopian `year`.
    pub fn length(&self, year: Year) -> u8 {
        match self {
            EthiopianMonth::Pagume if is_leap_year(year) => 6,
            EthiopianMonth::Pagume => 5,
            _ => 30,
        }
    }

    /// English transliteration (`"Meskerem"`, …).
    pub fn english_name(&self) -> &'static str {
        ENGLISH[self.index() as usize]
    }

    /// Amharic name (`"መስከረም"`, …).
    pub fn amharic_name(&self) -> &'static str {
        AMHARIC[self.index() as usize]
    }

    /// Name in the given language.
    pub fn name(&self, lang: Language) -> &'static str {
        match lang {
            Language::English => self.english_name(),
            Language::Amharic => self.amharic_name(),
        }
    }
}

impl std::fmt::Display for EthiopianMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.english_name())
    }
}

/// Whether an Ethiopian (Amete Mihret) year is a leap year.
///
/// The year before a Gregorian leap year is Ethiopian leap: `year mod 4 == 3`
/// (e.g. 2015, whose Pagume has 6 days).
pub fn is_leap_year(year: Year) -> bool {
    year.rem_euclid(4) == 3
}

/// Number of days in an Ethiopian year.
pub fn days_in_year(year: Year) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_number() {
        for (i, m) in ALL_MONTHS.iter().enumerate() {
            assert_eq!(m.index() as usize, i);
            assert_eq!(EthiopianMonth::from_index(i as u8), Some(*m));
            assert_eq!(EthiopianMonth::from_number(i as u8 + 1), Some(*m));
        }
        assert!(EthiopianMonth::from_number(0).is_none());
        assert!(EthiopianMonth::from_number(14).is_none());
        assert!(EthiopianMonth::from_index(13).is_none());
    }

    #[test]
    fn pagume_length() {
        assert_eq!(EthiopianMonth::Pagume.length(2015), 6);
        assert_eq!(EthiopianMonth::Pagume.length(2016), 5);
        assert_eq!(EthiopianMonth::Nehase.length(2015), 30);
    }

    #[test]
    fn names() {
        assert_eq!(EthiopianMonth::Pagume.english_name(), "Pagume");
        assert_eq!(EthiopianMonth::Meskerem.name(Language::Amharic), "መስከረም");
        assert_eq!(EthiopianMonth::Tir.to_string(), "Tir");
    }
}
