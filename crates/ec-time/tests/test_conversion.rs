//! Conversion laws and reference dates.
//!
//! `chrono` serves as an independent oracle for the Gregorian side.

use chrono::{Datelike, NaiveDate};
use ec_core::Error;
use ec_time::ethiopian_month::{days_in_year, is_leap_year};
use ec_time::{EthiopianDate, EthiopianMonth, GregorianDate, Weekday};
use proptest::prelude::*;

fn eth(y: i32, m: u8, d: u8) -> EthiopianDate {
    EthiopianDate::new(y, m, d).unwrap()
}

fn to_chrono(g: GregorianDate) -> NaiveDate {
    let (y, m, d) = g.ymd();
    NaiveDate::from_ymd_opt(y, m as u32, d as u32).unwrap()
}

/// Strategy producing any valid Ethiopian date in the supported range.
fn any_ethiopian_date() -> impl Strategy<Value = EthiopianDate> {
    (EthiopianDate::MIN_YEAR..=EthiopianDate::MAX_YEAR, 1u8..=13, 1u8..=30).prop_map(
        |(y, m, d)| {
            let len = EthiopianMonth::from_number(m).unwrap().length(y);
            EthiopianDate::new(y, m, d.min(len)).unwrap()
        },
    )
}

// ─── Reference table ─────────────────────────────────────────────────────────

#[test]
fn new_year_reference_table() {
    // Meskerem 1 falls on September 12 after an Ethiopian leap year,
    // September 11 otherwise (1900–2100 era).
    let table = [
        (2011, (2018, 9, 11)),
        (2012, (2019, 9, 12)),
        (2013, (2020, 9, 11)),
        (2014, (2021, 9, 11)),
        (2015, (2022, 9, 11)),
        (2016, (2023, 9, 12)),
        (2017, (2024, 9, 11)),
        (2018, (2025, 9, 11)),
    ];
    for (year, (gy, gm, gd)) in table {
        let g = eth(year, 1, 1).to_gregorian();
        assert_eq!(g.ymd(), (gy, gm, gd), "Meskerem 1, {year}");
        assert_eq!(is_leap_year(year - 1), gd == 12);
    }
}

#[test]
fn gregorian_leap_day_maps_into_yekatit() {
    let g = GregorianDate::from_ymd(2024, 2, 29).unwrap();
    assert_eq!(EthiopianDate::from_gregorian(g).unwrap(), eth(2016, 6, 21));
}

#[test]
fn malformed_gregorian_input_is_invalid_date() {
    assert!(matches!(
        GregorianDate::from_ymd(2023, 2, 30),
        Err(Error::InvalidDate(_))
    ));
    assert!(matches!(
        GregorianDate::from_ymd(2023, 4, 31),
        Err(Error::InvalidDate(_))
    ));
}

#[test]
fn before_epoch_is_out_of_range() {
    let g = GregorianDate::from_ymd(5, 1, 1).unwrap();
    assert!(matches!(
        EthiopianDate::from_gregorian(g),
        Err(Error::InvalidRange(_))
    ));
}

#[test]
fn year_lengths() {
    for year in 1990..2030 {
        let first = eth(year, 1, 1);
        let next = eth(year + 1, 1, 1);
        assert_eq!(first.days_between(next), days_in_year(year) as i32);
    }
}

#[test]
fn consecutive_days_walk_both_calendars() {
    let mut e = eth(2010, 1, 1);
    let mut c = to_chrono(e.to_gregorian());
    for _ in 0..(4 * 366) {
        e = e.add_days(1).unwrap();
        c = c.succ_opt().unwrap();
        assert_eq!(to_chrono(e.to_gregorian()), c);
        assert_eq!(
            e.weekday().sunday_index() as u32,
            c.weekday().num_days_from_sunday()
        );
    }
}

// ─── Properties ──────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn roundtrip_ethiopian(d in any_ethiopian_date()) {
        let back = EthiopianDate::from_gregorian(d.to_gregorian()).unwrap();
        prop_assert_eq!(back, d);
    }

    #[test]
    fn gregorian_agrees_with_chrono(d in any_ethiopian_date()) {
        let g = d.to_gregorian();
        let c = to_chrono(g);
        prop_assert_eq!(c.num_days_from_ce(), g.serial());
        prop_assert_eq!(
            g.weekday(),
            Weekday::from_sunday_index(c.weekday().num_days_from_sunday() as u8).unwrap()
        );
    }

    #[test]
    fn pagume_length_follows_leap_rule(year in 1i32..=9991) {
        let len = EthiopianMonth::Pagume.length(year);
        prop_assert_eq!(len == 6, year % 4 == 3);
        prop_assert_eq!(EthiopianDate::new(year, 13, 6).is_ok(), year % 4 == 3);
    }
}
