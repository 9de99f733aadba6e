//! Checks of the Bahire Hasab computus against the Julian Easter rule and
//! the fixed weekday of the Fast of Nineveh.

use ec_holidays::{BahireHasab, BahireHasabResolver, HolidaySet, MovableFeast, MovableFeastResolver};
use ec_time::{EthiopianDate, GregorianDate, Weekday};
use proptest::prelude::*;

/// Orthodox Easter as a Gregorian date, valid for 1900-03-01 .. 2100-02-28
/// where the Julian calendar lags by 13 days.
fn julian_easter(year: i32) -> GregorianDate {
    let a = year % 4;
    let b = year % 7;
    let c = year % 19;
    let d = (19 * c + 15) % 30;
    let e = (2 * a + 4 * b - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    let julian_as_gregorian = GregorianDate::from_ymd(year, month as u8, day as u8).unwrap();
    julian_as_gregorian.add_days(13).unwrap()
}

#[test]
fn fasika_is_julian_easter() {
    // Ethiopian year y holds the spring of Gregorian year y + 8.
    for year in 1893..=2091 {
        let fasika = BahireHasab::new(year).unwrap().fasika().unwrap();
        assert_eq!(
            fasika.to_gregorian(),
            julian_easter(year + 8),
            "Ethiopian year {year}"
        );
    }
}

#[test]
fn known_dates() {
    let cases = [
        (2012, "2020-04-19"),
        (2013, "2021-05-02"),
        (2014, "2022-04-24"),
        (2015, "2023-04-16"),
        (2016, "2024-05-05"),
        (2017, "2025-04-20"),
    ];
    for (year, easter) in cases {
        let fasika = BahireHasab::new(year).unwrap().fasika().unwrap();
        assert_eq!(fasika.to_gregorian().to_string(), easter, "{year}");
    }
}

#[test]
fn builtin_dataset_knows_every_feast() {
    let set = HolidaySet::builtin();
    for feast in MovableFeast::ALL {
        let record = set.get(feast.key()).unwrap();
        assert!(record.is_movable(), "{feast}");
    }
}

proptest! {
    #[test]
    fn nineveh_is_monday_and_fasika_sunday(year in 1i32..=9991) {
        let bh = BahireHasab::new(year).unwrap();
        prop_assert_eq!(bh.nineveh.weekday(), Weekday::Monday);
        prop_assert_eq!(bh.fasika().unwrap().weekday(), Weekday::Sunday);
        prop_assert_eq!(bh.new_year_weekday(), EthiopianDate::new_year(year).unwrap().weekday());
        prop_assert!(bh.metqi >= 1 && bh.metqi <= 30);
        prop_assert!(bh.nineveh.month() == 5 || bh.nineveh.month() == 6);
    }

    #[test]
    fn resolved_feasts_stay_in_year(year in 1i32..=9991) {
        let feasts = BahireHasabResolver.resolve(year).unwrap();
        prop_assert_eq!(feasts.len(), MovableFeast::ALL.len());
        for f in feasts {
            prop_assert_eq!(f.date.year(), year);
        }
    }
}
