//! Movable-feast resolvers.
//!
//! A resolver places the movable holidays of one Ethiopian year.  The engine
//! queries every configured resolver and merges their answers, much like a
//! joint calendar consults each of its member calendars.

use crate::bahire_hasab::BahireHasab;
use ec_core::errors::Result;
use ec_core::{Error, Year};
use ec_time::EthiopianDate;
use std::collections::BTreeMap;

/// A movable holiday placed on a concrete date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFeast {
    /// Holiday key in the dataset.
    pub key: String,
    /// Date on which it falls.
    pub date: EthiopianDate,
}

impl ResolvedFeast {
    /// Convenience constructor.
    pub fn new(key: impl Into<String>, date: EthiopianDate) -> Self {
        Self {
            key: key.into(),
            date,
        }
    }
}

/// Places movable holidays for a given Ethiopian year.
pub trait MovableFeastResolver: std::fmt::Debug + Send + Sync {
    /// Short identifier used in log messages.
    fn name(&self) -> &str;

    /// All movable holidays this resolver knows about in `year`, in
    /// calendar order.  A year it has nothing for yields an empty list.
    fn resolve(&self, year: Year) -> Result<Vec<ResolvedFeast>>;
}

// ── Bahire Hasab ──────────────────────────────────────────────────────────────

/// Resolves the Orthodox movable feasts with the Bahire Hasab computus.
#[derive(Debug, Clone, Copy, Default)]
pub struct BahireHasabResolver;

impl MovableFeastResolver for BahireHasabResolver {
    fn name(&self) -> &str {
        "bahire-hasab"
    }

    fn resolve(&self, year: Year) -> Result<Vec<ResolvedFeast>> {
        let computus = BahireHasab::new(year)?;
        Ok(computus
            .feasts()?
            .into_iter()
            .map(|(feast, date)| ResolvedFeast::new(feast.key(), date))
            .collect())
    }
}

// ── Pre-resolved table ────────────────────────────────────────────────────────

/// Movable holidays given explicitly per year, e.g. the Muslim holidays
/// whose dates follow the lunar Hijri calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeastTable {
    entries: BTreeMap<Year, Vec<ResolvedFeast>>,
}

impl FeastTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key` on the given Ethiopian date.
    ///
    /// Fails with `InvalidDate` / `InvalidRange` when the date does not exist.
    pub fn insert(&mut self, key: impl Into<String>, year: Year, month: u8, day: u8) -> Result<()> {
        let date = EthiopianDate::new(year, month, day)?;
        let list = self.entries.entry(year).or_default();
        list.push(ResolvedFeast::new(key, date));
        list.sort_by_key(|f| f.date);
        Ok(())
    }

    /// Build a table from `(key, year, month, day)` rows.
    pub fn from_rows<I, K>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, Year, u8, u8)>,
        K: Into<String>,
    {
        let mut table = Self::new();
        for (key, year, month, day) in rows {
            let key = key.into();
            table.insert(key.clone(), year, month, day).map_err(|e| {
                Error::Dataset(format!("resolved date for '{key}': {e}"))
            })?;
        }
        Ok(table)
    }

    /// Keep only the entries for which `keep(year, feast)` holds.
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(Year, &ResolvedFeast) -> bool,
    {
        self.entries.retain(|&year, list| {
            list.retain(|feast| keep(year, feast));
            !list.is_empty()
        });
    }

    /// Number of resolved entries across all years.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Years that have at least one entry.
    pub fn years(&self) -> impl Iterator<Item = Year> + '_ {
        self.entries.keys().copied()
    }
}

impl MovableFeastResolver for FeastTable {
    fn name(&self) -> &str {
        "table"
    }

    fn resolve(&self, year: Year) -> Result<Vec<ResolvedFeast>> {
        Ok(self.entries.get(&year).cloned().unwrap_or_default())
    }
}
