//! `HolidayRecord` — one entry of the reference holiday dataset.

use ec_core::LocalizedText;
use serde::{Deserialize, Serialize};

/// Classification tags attached to a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HolidayTag {
    /// Public (non-working) holiday.
    Public,
    /// Religious observance.
    Religious,
    /// Christian observance.
    Christian,
    /// Muslim observance.
    Muslim,
    /// State / civic day.
    State,
    /// Cultural celebration.
    Cultural,
    /// Anything else.
    Other,
}

/// Where a holiday falls in the Ethiopian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayDate {
    /// Same month and day every year.
    Fixed {
        /// Month (1–13).
        month: u8,
        /// Day of the month.
        day: u8,
    },
    /// Position varies by year and is supplied by a movable-feast resolver.
    Movable,
}

/// A holiday of the reference dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayRecord {
    /// Unique identifier, e.g. `"meskel"`.
    pub key: String,
    /// Calendar position.
    pub date: HolidayDate,
    /// Bilingual name.
    pub name: LocalizedText,
    /// Bilingual description.
    pub description: LocalizedText,
    /// Relative path of an illustration; resolving it is left to the caller.
    pub image: Option<String>,
    /// Classification tags.
    pub tags: Vec<HolidayTag>,
}

impl HolidayRecord {
    /// Whether the holiday moves from year to year.
    pub fn is_movable(&self) -> bool {
        matches!(self.date, HolidayDate::Movable)
    }

    /// Whether the record carries `tag`.
    pub fn has_tag(&self, tag: HolidayTag) -> bool {
        self.tags.contains(&tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_and_movable() {
        let meskel = HolidayRecord {
            key: "meskel".into(),
            date: HolidayDate::Fixed { month: 1, day: 17 },
            name: LocalizedText::new("Meskel", "መስቀል"),
            description: LocalizedText::default(),
            image: None,
            tags: vec![HolidayTag::Public, HolidayTag::Christian],
        };
        assert!(!meskel.is_movable());
        assert!(meskel.has_tag(HolidayTag::Public));
        assert!(!meskel.has_tag(HolidayTag::Muslim));
    }
}
