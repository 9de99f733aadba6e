//! Value types produced by the engine: month metadata, month views, and
//! holiday occurrences.

use ec_core::{Language, Year};
use ec_time::{EthiopianDate, EthiopianMonth, Evangelist, GregorianDate, Weekday};
use std::collections::BTreeMap;

/// Static facts about one Ethiopian month of one year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthInfo {
    /// Ethiopian year.
    pub year: Year,
    /// The month.
    pub month: EthiopianMonth,
    /// Evangelist of the year.
    pub evangelist: Evangelist,
    /// Number of days: 30, or 5/6 for Pagume.
    pub day_count: u8,
    /// Weekday of day 1.
    pub start_weekday: Weekday,
}

impl MonthInfo {
    /// Zero-based month index (Meskerem = 0).
    pub fn index(&self) -> u8 {
        self.month.index()
    }

    /// Column of day 1 in a Sunday-first week grid.
    pub fn start_col(&self) -> u8 {
        self.start_weekday.sunday_index()
    }

    /// Month name in `lang`.
    pub fn name(&self, lang: Language) -> &'static str {
        self.month.name(lang)
    }
}

/// One day of a [`MonthView`] grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    /// Day of the month.
    pub day: u8,
    /// Day of the week.
    pub weekday: Weekday,
    /// Gregorian equivalent.
    pub gregorian: GregorianDate,
    /// Holiday keys on that day.
    pub holidays: Vec<String>,
}

/// Everything needed to render one month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthView {
    /// Month metadata.
    pub info: MonthInfo,
    /// Holiday keys by day number; days without holidays are absent.
    ///
    /// Per day: fixed holidays in dataset order, then movable ones in
    /// resolver order.
    pub holidays: BTreeMap<u8, Vec<String>>,
    /// One cell per day, in order.
    pub grid: Vec<DayCell>,
}

impl MonthView {
    /// Ethiopian year.
    pub fn year(&self) -> Year {
        self.info.year
    }

    /// Zero-based month index.
    pub fn month_index(&self) -> u8 {
        self.info.index()
    }

    /// Month name in `lang`.
    pub fn month_name(&self, lang: Language) -> &'static str {
        self.info.name(lang)
    }

    /// Evangelist of the year.
    pub fn evangelist(&self) -> Evangelist {
        self.info.evangelist
    }

    /// Column of day 1, Sunday = 0.
    pub fn start_col(&self) -> u8 {
        self.info.start_col()
    }

    /// Number of days in the month.
    pub fn num_days(&self) -> u8 {
        self.info.day_count
    }

    /// Holiday keys on `day` (empty when there are none).
    pub fn holidays_on(&self, day: u8) -> &[String] {
        self.holidays.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// A holiday placed on a concrete date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayOccurrence {
    /// Dataset key.
    pub key: String,
    /// Ethiopian date.
    pub date: EthiopianDate,
    /// Gregorian equivalent.
    pub gregorian: GregorianDate,
    /// Whether the position came from a movable-feast resolver.
    pub movable: bool,
}
