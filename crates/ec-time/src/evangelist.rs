//! `Evangelist` — the four-year naming cycle of Ethiopian years.

use ec_core::{Language, Year};

/// The evangelist after whom an Ethiopian year is named.
///
/// Keyed by `year mod 4`: 1 → Matthew, 2 → Mark, 3 → Luke, 0 → John.  Luke
/// years are the leap years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Evangelist {
    /// Matthew (Mateos).
    Matthew,
    /// Mark (Markos).
    Mark,
    /// Luke (Lukas).
    Luke,
    /// John (Yohannes).
    John,
}

impl Evangelist {
    /// The evangelist of Ethiopian `year`.
    pub fn of_year(year: Year) -> Self {
        Self::from_remainder(year.rem_euclid(4) as u8)
    }

    /// From the remainder of the year (or Amete Alem) divided by four.
    pub fn from_remainder(r: u8) -> Self {
        match r % 4 {
            1 => Evangelist::Matthew,
            2 => Evangelist::Mark,
            3 => Evangelist::Luke,
            _ => Evangelist::John,
        }
    }

    /// Remainder associated with this evangelist (John = 0).
    pub fn remainder(&self) -> u8 {
        match self {
            Evangelist::Matthew => 1,
            Evangelist::Mark => 2,
            Evangelist::Luke => 3,
            Evangelist::John => 0,
        }
    }

    /// English name.
    pub fn english_name(&self) -> &'static str {
        match self {
            Evangelist::Matthew => "Matthew",
            Evangelist::Mark => "Mark",
            Evangelist::Luke => "Luke",
            Evangelist::John => "John",
        }
    }

    /// Amharic name.
    pub fn amharic_name(&self) -> &'static str {
        match self {
            Evangelist::Matthew => "ማቴዎስ",
            Evangelist::Mark => "ማርቆስ",
            Evangelist::Luke => "ሉቃስ",
            Evangelist::John => "ዮሐንስ",
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

impl std::fmt::Display for Evangelist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.english_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ethiopian_month::is_leap_year;

    #[test]
    fn cycle() {
        assert_eq!(Evangelist::of_year(2013), Evangelist::Matthew);
        assert_eq!(Evangelist::of_year(2014), Evangelist::Mark);
        assert_eq!(Evangelist::of_year(2015), Evangelist::Luke);
        assert_eq!(Evangelist::of_year(2016), Evangelist::John);
    }

    #[test]
    fn luke_years_are_leap() {
        for year in 1..200 {
            assert_eq!(Evangelist::of_year(year) == Evangelist::Luke, is_leap_year(year));
            assert_eq!(Evangelist::of_year(year).remainder() as i32, year % 4);
        }
    }
}
