//! `HolidaySet` — the immutable reference dataset of holidays.
//!
//! A set is either the built-in one or read from a TOML file:
//!
//! ```toml
//! include_builtin = true        # start from the built-in records
//!
//! [[holiday]]
//! key = "meskel"
//! month = 1
//! day = 17
//! tags = ["public", "christian"]
//! image = "images/meskel.jpg"
//! name = { english = "Meskel", amharic = "መስቀል" }
//! description = { english = "…", amharic = "…" }
//!
//! [[holiday]]
//! key = "eidFitr"
//! movable = true
//! tags = ["public", "muslim"]
//! name = { english = "Eid al-Fitr", amharic = "ዒድ አል ፈጥር" }
//!
//! [[resolved]]
//! key = "eidFitr"
//! year = 2016
//! month = 8
//! day = 2
//! ```
//!
//! A `[[holiday]]` whose key matches a built-in record replaces it in place,
//! and `[[resolved]]` rows replace the built-in dates of the same holiday in
//! the same year.

use crate::builtin;
use crate::holiday::{HolidayDate, HolidayRecord, HolidayTag};
use crate::resolver::FeastTable;
use ec_core::errors::Result;
use ec_core::{fail, Error, LocalizedText, Year};
use ec_time::EthiopianMonth;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// An ordered, key-indexed collection of holiday records plus the
/// pre-resolved movable dates that came with it.
#[derive(Debug, Clone, Default)]
pub struct HolidaySet {
    records: Vec<HolidayRecord>,
    index: HashMap<String, usize>,
    resolved: FeastTable,
}

impl HolidaySet {
    /// Build a set from records, validating keys and fixed positions.
    pub fn from_records(records: Vec<HolidayRecord>) -> Result<Self> {
        let mut set = Self::default();
        for record in records {
            validate(&record)?;
            let folded = record.key.to_lowercase();
            if set.index.contains_key(&folded) {
                fail!(Dataset, "duplicate holiday key '{}'", record.key);
            }
            set.index.insert(folded, set.records.len());
            set.records.push(record);
        }
        Ok(set)
    }

    /// The built-in dataset, with the built-in Muslim holiday dates.
    pub fn builtin() -> Self {
        let set = Self::from_records(builtin::records()).and_then(|mut set| {
            set.resolved = FeastTable::from_rows(builtin::RESOLVED.iter().copied())?;
            Ok(set)
        });
        match set {
            Ok(set) => set,
            Err(e) => unreachable!("built-in dataset is consistent: {e}"),
        }
    }

    /// Parse a dataset from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let file: DatasetFile =
            toml::from_str(text).map_err(|e| Error::Dataset(e.to_string()))?;

        let mut set = if file.include_builtin {
            Self::builtin()
        } else {
            Self::default()
        };
        let mut seen = HashSet::new();
        for raw in file.holiday {
            if !seen.insert(raw.key.to_lowercase()) {
                fail!(Dataset, "duplicate holiday key '{}'", raw.key);
            }
            set.upsert(raw.into_record()?)?;
        }

        // File rows replace the built-in rows of the same key and year.
        let overridden: HashSet<(String, Year)> = file
            .resolved
            .iter()
            .map(|row| (row.key.to_lowercase(), row.year))
            .collect();
        let mut table = std::mem::take(&mut set.resolved);
        table.retain(|year, feast| {
            !overridden.contains(&(feast.key.to_lowercase(), year))
                && set.get(&feast.key).is_some_and(HolidayRecord::is_movable)
        });
        for row in file.resolved {
            let Some(record) = set.get(&row.key) else {
                fail!(Dataset, "resolved date for unknown holiday '{}'", row.key);
            };
            if !record.is_movable() {
                fail!(Dataset, "resolved date for fixed holiday '{}'", row.key);
            }
            let key = record.key.clone();
            table
                .insert(key, row.year, row.month, row.day)
                .map_err(|e| Error::Dataset(format!("resolved date for '{}': {e}", row.key)))?;
        }
        set.resolved = table;

        log::debug!(
            "parsed holiday dataset: {} records, {} resolved dates",
            set.len(),
            set.resolved.len()
        );
        Ok(set)
    }

    /// Read a dataset file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Dataset(format!("{}: {e}", path.display())))?;
        let set = Self::from_toml_str(&text)?;
        log::debug!("loaded holiday dataset from {}", path.display());
        Ok(set)
    }

    /// Look a record up by key, ignoring case.
    pub fn get(&self, key: &str) -> Option<&HolidayRecord> {
        self.index
            .get(&key.to_lowercase())
            .map(|&i| &self.records[i])
    }

    /// All records in dataset order.
    pub fn records(&self) -> &[HolidayRecord] {
        &self.records
    }

    /// Records fixed anywhere in `month`, in dataset order.
    pub fn fixed_in_month(&self, month: u8) -> impl Iterator<Item = (u8, &HolidayRecord)> + '_ {
        self.records.iter().filter_map(move |r| match r.date {
            HolidayDate::Fixed { month: m, day } if m == month => Some((day, r)),
            _ => None,
        })
    }

    /// Pre-resolved movable dates shipped with the dataset.
    pub fn resolved(&self) -> &FeastTable {
        &self.resolved
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert `record`, replacing an existing one with the same key.
    fn upsert(&mut self, record: HolidayRecord) -> Result<()> {
        validate(&record)?;
        let folded = record.key.to_lowercase();
        match self.index.get(&folded) {
            Some(&i) => self.records[i] = record,
            None => {
                self.index.insert(folded, self.records.len());
                self.records.push(record);
            }
        }
        Ok(())
    }
}

fn validate(record: &HolidayRecord) -> Result<()> {
    if record.key.trim().is_empty() {
        fail!(Dataset, "holiday with an empty key");
    }
    if let HolidayDate::Fixed { month, day } = record.date {
        let Some(m) = EthiopianMonth::from_number(month) else {
            fail!(Dataset, "holiday '{}': month {month} outside [1, 13]", record.key);
        };
        // Pagume 6 exists in leap years only, so it is accepted here.
        let max_day = if m == EthiopianMonth::Pagume { 6 } else { 30 };
        if !(1..=max_day).contains(&day) {
            fail!(
                Dataset,
                "holiday '{}': day {day} outside [1, {max_day}] for {m}",
                record.key
            );
        }
    }
    Ok(())
}

// ── File schema ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DatasetFile {
    #[serde(default)]
    include_builtin: bool,
    #[serde(default)]
    holiday: Vec<RawHoliday>,
    #[serde(default)]
    resolved: Vec<RawResolved>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHoliday {
    key: String,
    month: Option<u8>,
    day: Option<u8>,
    #[serde(default)]
    movable: bool,
    #[serde(default)]
    tags: Vec<HolidayTag>,
    image: Option<String>,
    name: LocalizedText,
    #[serde(default)]
    description: LocalizedText,
}

impl RawHoliday {
    fn into_record(self) -> Result<HolidayRecord> {
        let date = match (self.movable, self.month, self.day) {
            (false, Some(month), Some(day)) => HolidayDate::Fixed { month, day },
            (true, None, None) => HolidayDate::Movable,
            (true, _, _) => fail!(Dataset, "movable holiday '{}' has a month or day", self.key),
            (false, _, _) => fail!(Dataset, "fixed holiday '{}' needs both month and day", self.key),
        };
        Ok(HolidayRecord {
            key: self.key,
            date,
            name: self.name,
            description: self.description,
            image: self.image,
            tags: self.tags,
        })
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawResolved {
    key: String,
    year: Year,
    month: u8,
    day: u8,
}
