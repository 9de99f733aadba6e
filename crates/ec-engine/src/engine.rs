//! `CalendarEngine` — month views, date conversion, and holiday lookup over
//! an immutable holiday dataset.
//!
//! The engine owns no mutable state.  The dataset is shared through an
//! `Arc`, and movable holidays are placed by a list of
//! [`MovableFeastResolver`]s consulted in order, so one engine can serve
//! any number of threads.

use crate::view::{DayCell, HolidayOccurrence, MonthInfo, MonthView};
use ec_core::errors::Result;
use ec_core::{ensure, Error, Year};
use ec_holidays::{
    BahireHasab, BahireHasabResolver, HolidayRecord, HolidaySet, MovableFeastResolver,
    ResolvedFeast,
};
use ec_time::{EthiopianDate, EthiopianMonth, Evangelist, GregorianDate};
use std::collections::BTreeMap;
use std::sync::Arc;

/// The calendar engine.
pub struct CalendarEngine {
    holidays: Arc<HolidaySet>,
    resolvers: Vec<Box<dyn MovableFeastResolver>>,
}

impl std::fmt::Debug for CalendarEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.resolvers.iter().map(|r| r.name()).collect();
        f.debug_struct("CalendarEngine")
            .field("holidays", &self.holidays.len())
            .field("resolvers", &names)
            .finish()
    }
}

impl Default for CalendarEngine {
    fn default() -> Self {
        Self::new(Arc::new(HolidaySet::builtin()))
    }
}

impl CalendarEngine {
    /// Create an engine over `holidays`, resolving movable feasts with the
    /// Bahire Hasab and then with the dataset's own pre-resolved table.
    pub fn new(holidays: Arc<HolidaySet>) -> Self {
        let table = holidays.resolved().clone();
        let mut resolvers: Vec<Box<dyn MovableFeastResolver>> = vec![Box::new(BahireHasabResolver)];
        if !table.is_empty() {
            resolvers.push(Box::new(table));
        }
        Self::with_resolvers(holidays, resolvers)
    }

    /// Create an engine with an explicit resolver list.
    pub fn with_resolvers(
        holidays: Arc<HolidaySet>,
        resolvers: Vec<Box<dyn MovableFeastResolver>>,
    ) -> Self {
        Self {
            holidays,
            resolvers,
        }
    }

    /// Append a resolver; it is consulted after the existing ones.
    pub fn add_resolver(&mut self, resolver: Box<dyn MovableFeastResolver>) {
        self.resolvers.push(resolver);
    }

    /// The holiday dataset.
    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    // ── Months ────────────────────────────────────────────────────────────────

    /// Metadata of month `month_index` (0–12) of `year`.
    ///
    /// Fails with `InvalidRange` when the year is unsupported or the index
    /// is outside 0–12.
    pub fn month_info(&self, year: Year, month_index: i32) -> Result<MonthInfo> {
        ensure!(
            (EthiopianDate::MIN_YEAR..=EthiopianDate::MAX_YEAR).contains(&year),
            InvalidRange,
            "Ethiopian year {year} outside [{}, {}]",
            EthiopianDate::MIN_YEAR,
            EthiopianDate::MAX_YEAR
        );
        let month = u8::try_from(month_index)
            .ok()
            .and_then(EthiopianMonth::from_index)
            .ok_or_else(|| {
                Error::InvalidRange(format!("month index {month_index} outside [0, 12]"))
            })?;
        let first = EthiopianDate::new(year, month.number(), 1)?;
        Ok(MonthInfo {
            year,
            month,
            evangelist: Evangelist::of_year(year),
            day_count: month.length(year),
            start_weekday: first.weekday(),
        })
    }

    /// The render payload for month `month_index` (0–12) of `year`.
    pub fn month_view(&self, year: Year, month_index: i32) -> Result<MonthView> {
        let info = self.month_info(year, month_index)?;
        let month = info.month.number();

        let mut holidays: BTreeMap<u8, Vec<String>> = BTreeMap::new();
        for (day, record) in self.holidays.fixed_in_month(month) {
            // Pagume 6 only exists in leap years
            if day <= info.day_count {
                holidays.entry(day).or_default().push(record.key.clone());
            }
        }
        for feast in self.movable_feasts(year)? {
            if feast.date.month() == month {
                let keys = holidays.entry(feast.date.day()).or_default();
                if !keys.contains(&feast.key) {
                    keys.push(feast.key);
                }
            }
        }

        let grid = (1..=info.day_count)
            .map(|day| {
                let date = EthiopianDate::new(year, month, day)?;
                Ok(DayCell {
                    day,
                    weekday: date.weekday(),
                    gregorian: date.to_gregorian(),
                    holidays: holidays.get(&day).cloned().unwrap_or_default(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(MonthView {
            info,
            holidays,
            grid,
        })
    }

    // ── Conversion ────────────────────────────────────────────────────────────

    /// Convert an Ethiopian date to its Gregorian equivalent.
    pub fn convert(&self, year: Year, month: u8, day: u8) -> Result<GregorianDate> {
        Ok(EthiopianDate::new(year, month, day)?.to_gregorian())
    }

    /// Convert a Gregorian date to its Ethiopian equivalent.
    pub fn convert_reverse(&self, year: Year, month: u8, day: u8) -> Result<EthiopianDate> {
        EthiopianDate::from_gregorian(GregorianDate::from_ymd(year, month, day)?)
    }

    /// Gregorian date of Meskerem 1 of `year`.
    pub fn new_year(&self, year: Year) -> Result<GregorianDate> {
        Ok(EthiopianDate::new_year(year)?.to_gregorian())
    }

    // ── Holidays ──────────────────────────────────────────────────────────────

    /// The record with `key`, compared case-insensitively.
    pub fn holiday_detail(&self, key: &str) -> Result<&HolidayRecord> {
        self.holidays
            .get(key)
            .ok_or_else(|| Error::NotFound(format!("holiday '{key}'")))
    }

    /// Movable holidays of `year` from every resolver, in resolver order.
    ///
    /// Keys missing from the dataset are dropped with a warning, and each
    /// key is reported under its dataset spelling.
    pub fn movable_feasts(&self, year: Year) -> Result<Vec<ResolvedFeast>> {
        let mut feasts = Vec::new();
        for resolver in &self.resolvers {
            for feast in resolver.resolve(year)? {
                let Some(record) = self.holidays.get(&feast.key) else {
                    log::debug!(
                        "{}: movable feast '{}' is not in the holiday dataset",
                        resolver.name(),
                        feast.key
                    );
                    continue;
                };
                feasts.push(ResolvedFeast::new(record.key.clone(), feast.date));
            }
        }
        log::debug!("resolved {} movable feasts for {year}", feasts.len());
        Ok(feasts)
    }

    /// Holidays of month `month_index` (0–12) of `year`, sorted by day.
    pub fn holidays_in_month(&self, year: Year, month_index: i32) -> Result<Vec<HolidayOccurrence>> {
        let view = self.month_view(year, month_index)?;
        let month = view.info.month.number();
        let mut occurrences = Vec::new();
        for (&day, keys) in &view.holidays {
            let date = EthiopianDate::new(year, month, day)?;
            for key in keys {
                let movable = self.holidays.get(key).is_some_and(HolidayRecord::is_movable);
                occurrences.push(HolidayOccurrence {
                    key: key.clone(),
                    date,
                    gregorian: date.to_gregorian(),
                    movable,
                });
            }
        }
        Ok(occurrences)
    }

    /// All holidays of `year`, in calendar order.
    pub fn holidays_for_year(&self, year: Year) -> Result<Vec<HolidayOccurrence>> {
        let mut all = Vec::new();
        for index in 0..13 {
            all.extend(self.holidays_in_month(year, index)?);
        }
        Ok(all)
    }

    /// The Bahire Hasab computation for `year`.
    pub fn bahire_hasab(&self, year: Year) -> Result<BahireHasab> {
        BahireHasab::new(year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ec_holidays::FeastTable;
    use ec_time::Weekday;

    fn engine() -> CalendarEngine {
        CalendarEngine::default()
    }

    #[test]
    fn engine_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CalendarEngine>();
    }

    #[test]
    fn month_info_of_meskerem_2016() {
        let info = engine().month_info(2016, 0).unwrap();
        assert_eq!(info.month, EthiopianMonth::Meskerem);
        assert_eq!(info.evangelist, Evangelist::John);
        assert_eq!(info.day_count, 30);
        assert_eq!(info.start_weekday, Weekday::Tuesday);
        assert_eq!(info.start_col(), 2);
    }

    #[test]
    fn month_view_of_meskerem_2016() {
        let view = engine().month_view(2016, 0).unwrap();
        assert_eq!(view.num_days(), 30);
        assert_eq!(view.holidays_on(1), ["enkutatash"]);
        assert_eq!(view.holidays_on(17), ["meskel"]);
        assert!(view.holidays_on(2).is_empty());
        assert_eq!(view.grid.len(), 30);
        assert_eq!(view.grid[0].gregorian.to_string(), "2023-09-12");
        assert_eq!(view.grid[0].weekday, Weekday::Tuesday);
        assert_eq!(view.grid[16].holidays, ["meskel"]);
    }

    #[test]
    fn fixed_then_movable_on_the_same_day() {
        // Fasika 2016 falls on Miazia 27, Patriots' Victory Day.
        let view = engine().month_view(2016, 7).unwrap();
        assert_eq!(view.holidays_on(27), ["patriots", "fasika"]);
        assert_eq!(view.holidays_on(23), ["labour"]);
    }

    #[test]
    fn builtin_muslim_holidays_are_placed() {
        let e = engine();
        assert_eq!(e.month_view(2016, 0).unwrap().holidays_on(16), ["moulid"]);
        assert_eq!(e.month_view(2016, 7).unwrap().holidays_on(2), ["eidFitr"]);
        assert_eq!(e.month_view(2016, 9).unwrap().holidays_on(9), ["eidAdha"]);
        // two Mawlids in 2017
        let moulid = e
            .movable_feasts(2017)
            .unwrap()
            .into_iter()
            .filter(|f| f.key == "moulid")
            .count();
        assert_eq!(moulid, 2);
    }

    #[test]
    fn invalid_month_requests() {
        let e = engine();
        for (year, idx) in [(0, 0), (-1, 0), (9992, 0), (2016, 13), (2016, -1)] {
            assert!(
                matches!(e.month_view(year, idx), Err(Error::InvalidRange(_))),
                "{year}/{idx}"
            );
        }
    }

    #[test]
    fn holiday_detail_lookup() {
        let e = engine();
        assert_eq!(e.holiday_detail("Timket").unwrap().key, "timket");
        assert!(matches!(
            e.holiday_detail("nonexistent-key"),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn unknown_resolver_keys_are_dropped() {
        let table = FeastTable::from_rows([("unknownFeast", 2016, 3, 3)]).unwrap();
        let e = CalendarEngine::with_resolvers(
            Arc::new(HolidaySet::builtin()),
            vec![Box::new(table)],
        );
        assert!(e.movable_feasts(2016).unwrap().is_empty());
        assert!(e.month_view(2016, 2).unwrap().holidays_on(3).is_empty());
    }

    #[test]
    fn resolver_keys_use_dataset_spelling() {
        let table =
            FeastTable::from_rows([("EIDFITR", 2016, 8, 2), ("EIDFITR", 2016, 8, 3)]).unwrap();
        let mut e = CalendarEngine::default();
        e.add_resolver(Box::new(table));
        let view = e.month_view(2016, 7).unwrap();
        // the built-in date and the added one, each listed once
        assert_eq!(view.holidays_on(2), ["eidFitr"]);
        assert_eq!(view.holidays_on(3), ["eidFitr"]);
    }

    #[test]
    fn year_listing() {
        let e = engine();
        let year = e.holidays_for_year(2016).unwrap();
        assert!(year.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(year.iter().filter(|o| !o.movable).count(), 9);
        // 11 Orthodox feasts and three Muslim holidays
        assert_eq!(year.iter().filter(|o| o.movable).count(), 14);
        let gena = year.iter().find(|o| o.key == "gena").unwrap();
        assert_eq!(gena.gregorian.to_string(), "2024-01-08");
    }

    #[test]
    fn conversions() {
        let e = engine();
        assert_eq!(e.convert(2016, 1, 1).unwrap().to_string(), "2023-09-12");
        assert_eq!(e.new_year(2017).unwrap().to_string(), "2024-09-11");
        assert_eq!(e.convert_reverse(2024, 1, 7).unwrap(), EthiopianDate::new(2016, 4, 28).unwrap());
        assert!(matches!(e.convert(2016, 13, 6), Err(Error::InvalidDate(_))));
        assert!(matches!(e.convert_reverse(2023, 2, 30), Err(Error::InvalidDate(_))));
        assert!(matches!(e.convert_reverse(5, 1, 1), Err(Error::InvalidRange(_))));
    }
}
