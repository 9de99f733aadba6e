//! Bahire Hasab, the Ethiopian Orthodox computus.
//!
//! Every movable feast of a year is a fixed number of days after the Fast of
//! Nineveh, which always begins on a Monday in Tir or Yekatit.  The Nineveh
//! date is found from the epact (`abektie`) and lunar remainder (`metqi`) of
//! the 19-year cycle.
//!
//! # Reference
//! * Amete Alem (years since creation) = 5500 + year.
//! * `tinte_qemer = (amete_alem + amete_alem / 4) mod 7` gives the weekday
//!   of Meskerem 1, counted from Monday = 0.
//! * `medeb = amete_alem mod 19`, `wenber = medeb - 1` (18 when `medeb` is 0).
//! * `abektie = 11 * wenber mod 30`, `metqi = 19 * wenber mod 30` (30 when 0).
//!
//! The resulting Fasika always equals the Julian-calendar Easter.

use ec_core::errors::Result;
use ec_core::Year;
use ec_time::{EthiopianDate, EthiopianMonth, Evangelist, Weekday};

/// The movable Orthodox feasts and fasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MovableFeast {
    /// Fast of Nineveh (Monday).
    Nineveh,
    /// Start of Great Lent (Monday).
    AbiyTsome,
    /// Mid-Lent Sunday.
    DebreZeit,
    /// Palm Sunday.
    Hosanna,
    /// Good Friday.
    Siklet,
    /// Easter Sunday.
    Fasika,
    /// Meeting of the Priests (Wednesday).
    RikbeKahnat,
    /// Ascension (Thursday).
    Erget,
    /// Pentecost (Sunday).
    Paraclete,
    /// Start of the Apostles' Fast (Monday).
    TsomeHawaryat,
    /// Fast of Salvation (Wednesday).
    TsomeDihnet,
}

impl MovableFeast {
    /// All feasts, in calendar order.
    pub const ALL: [MovableFeast; 11] = [
        MovableFeast::Nineveh,
        MovableFeast::AbiyTsome,
        MovableFeast::DebreZeit,
        MovableFeast::Hosanna,
        MovableFeast::Siklet,
        MovableFeast::Fasika,
        MovableFeast::RikbeKahnat,
        MovableFeast::Erget,
        MovableFeast::Paraclete,
        MovableFeast::TsomeHawaryat,
        MovableFeast::TsomeDihnet,
    ];

    /// Dataset key of the feast.
    pub fn key(&self) -> &'static str {
        match self {
            MovableFeast::Nineveh => "nineveh",
            MovableFeast::AbiyTsome => "abiyTsome",
            MovableFeast::DebreZeit => "debreZeit",
            MovableFeast::Hosanna => "hosanna",
            MovableFeast::Siklet => "siklet",
            MovableFeast::Fasika => "fasika",
            MovableFeast::RikbeKahnat => "rikbeKahnat",
            MovableFeast::Erget => "erget",
            MovableFeast::Paraclete => "paraclete",
            MovableFeast::TsomeHawaryat => "tsomeHawaryat",
            MovableFeast::TsomeDihnet => "tsomeDihnet",
        }
    }

    /// Days after the start of the Fast of Nineveh.
    pub fn offset(&self) -> i32 {
        match self {
            MovableFeast::Nineveh => 0,
            MovableFeast::AbiyTsome => 14,
            MovableFeast::DebreZeit => 41,
            MovableFeast::Hosanna => 62,
            MovableFeast::Siklet => 67,
            MovableFeast::Fasika => 69,
            MovableFeast::RikbeKahnat => 93,
            MovableFeast::Erget => 108,
            MovableFeast::Paraclete => 118,
            MovableFeast::TsomeHawaryat => 119,
            MovableFeast::TsomeDihnet => 121,
        }
    }
}

impl std::fmt::Display for MovableFeast {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Intermediate and final values of the computus for one Ethiopian year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BahireHasab {
    /// Ethiopian year.
    pub year: Year,
    /// Years since creation.
    pub amete_alem: i32,
    /// `amete_alem / 4`.
    pub metene_rabiet: i32,
    /// Evangelist of the year.
    pub evangelist: Evangelist,
    /// Weekday key of Meskerem 1 (Monday = 0).
    pub tinte_qemer: u8,
    /// `amete_alem mod 19`.
    pub medeb: u8,
    /// Position in the 19-year cycle.
    pub wenber: u8,
    /// Epact.
    pub abektie: u8,
    /// Lunar remainder, 1–30.
    pub metqi: u8,
    /// Date of the paschal moon reckoning (Meskerem or Tikimt `metqi`).
    pub beale_metqi: EthiopianDate,
    /// Weekday-dependent addend.
    pub tewsak: u8,
    /// `metqi + tewsak`, the day of Nineveh before month carry.
    pub mebaja_hamer: u8,
    /// First day of the Fast of Nineveh.
    pub nineveh: EthiopianDate,
}

impl BahireHasab {
    /// Run the computus for Ethiopian `year`.
    ///
    /// Fails with `InvalidRange` for a year outside the supported range.
    pub fn new(year: Year) -> Result<Self> {
        let new_year = EthiopianDate::new_year(year)?;

        let amete_alem = 5500 + year;
        let metene_rabiet = amete_alem.div_euclid(4);
        let tinte_qemer = (amete_alem + metene_rabiet).rem_euclid(7) as u8;
        let medeb = amete_alem.rem_euclid(19) as u8;
        let wenber = if medeb == 0 { 18 } else { medeb - 1 };
        let abektie = (11 * wenber as u32 % 30) as u8;
        let metqi = match (19 * wenber as u32 % 30) as u8 {
            0 => 30,
            m => m,
        };

        let beale_month = if metqi > 14 {
            EthiopianMonth::Meskerem
        } else {
            EthiopianMonth::Tikimt
        };
        let beale_metqi = EthiopianDate::new(year, beale_month.number(), metqi)?;
        let tewsak = tewsak(beale_metqi.weekday());
        let mebaja_hamer = metqi + tewsak;

        let mut nineveh_month = if metqi > 14 {
            EthiopianMonth::Tir
        } else {
            EthiopianMonth::Yekatit
        }
        .number();
        let mut nineveh_day = mebaja_hamer;
        if nineveh_day > 30 {
            nineveh_month += 1;
            nineveh_day -= 30;
        }
        let nineveh = EthiopianDate::new(year, nineveh_month, nineveh_day)?;
        debug_assert_eq!(new_year.weekday(), weekday_of_tinte(tinte_qemer));
        debug_assert_eq!(nineveh.weekday(), Weekday::Monday);

        Ok(Self {
            year,
            amete_alem,
            metene_rabiet,
            evangelist: Evangelist::of_year(year),
            tinte_qemer,
            medeb,
            wenber,
            abektie,
            metqi,
            beale_metqi,
            tewsak,
            mebaja_hamer,
            nineveh,
        })
    }

    /// Weekday of Meskerem 1 derived from `tinte_qemer`.
    pub fn new_year_weekday(&self) -> Weekday {
        weekday_of_tinte(self.tinte_qemer)
    }

    /// Date of `feast` in this year.
    ///
    /// Every offset lands before Nehase, so the result stays inside the year.
    pub fn date_of(&self, feast: MovableFeast) -> Result<EthiopianDate> {
        self.nineveh.add_days(feast.offset())
    }

    /// Easter Sunday.
    pub fn fasika(&self) -> Result<EthiopianDate> {
        self.date_of(MovableFeast::Fasika)
    }

    /// All movable feasts of the year, in calendar order.
    pub fn feasts(&self) -> Result<Vec<(MovableFeast, EthiopianDate)>> {
        MovableFeast::ALL
            .into_iter()
            .map(|f| Ok((f, self.date_of(f)?)))
            .collect()
    }
}

/// Addend applied to `metqi` by the weekday of the paschal reckoning date.
fn tewsak(w: Weekday) -> u8 {
    match w {
        Weekday::Sunday => 7,
        Weekday::Monday => 6,
        Weekday::Tuesday => 5,
        Weekday::Wednesday => 4,
        Weekday::Thursday => 3,
        Weekday::Friday => 2,
        Weekday::Saturday => 8,
    }
}

fn weekday_of_tinte(tinte_qemer: u8) -> Weekday {
    // tinte_qemer 0 is Monday, ordinal 1
    match Weekday::from_ordinal(tinte_qemer % 7 + 1) {
        Some(w) => w,
        None => unreachable!("ordinal in 1..=7"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ec_core::Error;

    #[test]
    fn year_2016() {
        let bh = BahireHasab::new(2016).unwrap();
        assert_eq!(bh.amete_alem, 7516);
        assert_eq!(bh.metene_rabiet, 1879);
        assert_eq!(bh.evangelist, Evangelist::John);
        assert_eq!(bh.medeb, 11);
        assert_eq!(bh.wenber, 10);
        assert_eq!(bh.abektie, 20);
        assert_eq!(bh.metqi, 10);
        assert_eq!(bh.beale_metqi, EthiopianDate::new(2016, 2, 10).unwrap());
        assert_eq!(bh.nineveh, EthiopianDate::new(2016, 6, 18).unwrap());
        assert_eq!(bh.new_year_weekday(), Weekday::Tuesday);

        let fasika = bh.fasika().unwrap();
        assert_eq!(fasika.to_gregorian().to_string(), "2024-05-05");
        assert_eq!(fasika.weekday(), Weekday::Sunday);
    }

    #[test]
    fn year_2017() {
        let bh = BahireHasab::new(2017).unwrap();
        assert_eq!(bh.nineveh, EthiopianDate::new(2017, 6, 3).unwrap());
        assert_eq!(bh.fasika().unwrap().to_gregorian().to_string(), "2025-04-20");
    }

    #[test]
    fn metqi_zero_becomes_thirty() {
        let bh = BahireHasab::new(2006).unwrap();
        assert_eq!(bh.metqi, 30);
        assert_eq!(bh.fasika().unwrap().to_gregorian().to_string(), "2014-04-20");
    }

    #[test]
    fn feasts_keep_their_weekdays() {
        let bh = BahireHasab::new(2016).unwrap();
        for (feast, date) in bh.feasts().unwrap() {
            let expected = match feast {
                MovableFeast::Nineveh | MovableFeast::AbiyTsome | MovableFeast::TsomeHawaryat => {
                    Weekday::Monday
                }
                MovableFeast::DebreZeit | MovableFeast::Hosanna | MovableFeast::Fasika => {
                    Weekday::Sunday
                }
                MovableFeast::Paraclete => Weekday::Sunday,
                MovableFeast::Siklet => Weekday::Friday,
                MovableFeast::RikbeKahnat | MovableFeast::TsomeDihnet => Weekday::Wednesday,
                MovableFeast::Erget => Weekday::Thursday,
            };
            assert_eq!(date.weekday(), expected, "{feast}");
        }
    }

    #[test]
    fn keys_name_builtin_movable_records() {
        let records = crate::builtin::records();
        for feast in MovableFeast::ALL {
            let record = records.iter().find(|r| r.key == feast.key());
            assert!(record.is_some_and(|r| r.is_movable()), "{feast}");
        }
    }

    #[test]
    fn out_of_range() {
        assert!(matches!(BahireHasab::new(0), Err(Error::InvalidRange(_))));
        assert!(matches!(BahireHasab::new(10_000), Err(Error::InvalidRange(_))));
    }
}
