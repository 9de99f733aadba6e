//! Built-in reference dataset: Ethiopian public, Orthodox and Muslim holidays.
//!
//! Orthodox movable feasts are positioned by the Bahire Hasab resolver.  The
//! Muslim holidays follow the lunar Hijri calendar, so their dates come from
//! the [`RESOLVED`] table, which a dataset file can extend or correct.

use crate::holiday::{HolidayDate, HolidayRecord, HolidayTag};
use ec_core::{LocalizedText, Year};
use HolidayTag::*;

struct Entry {
    key: &'static str,
    date: HolidayDate,
    tags: &'static [HolidayTag],
    name: (&'static str, &'static str),
    description: (&'static str, &'static str),
}

const fn fixed(month: u8, day: u8) -> HolidayDate {
    HolidayDate::Fixed { month, day }
}

const MOVABLE: HolidayDate = HolidayDate::Movable;

const ENTRIES: &[Entry] = &[
    Entry {
        key: "enkutatash",
        date: fixed(1, 1),
        tags: &[Public, Cultural],
        name: ("Ethiopian New Year (Enkutatash)", "እንቁጣጣሽ"),
        description: (
            "Marks the start of the Ethiopian year;\nsymbolizes renewal and the end of the rainy season.",
            "የኢትዮጵያ አዲስ ዓመት መጀመሪያ፤\nየዝናብ ወቅት ማብቃቱን እና ዳግም መታደስን ያመለክታል።",
        ),
    },
    Entry {
        key: "meskel",
        date: fixed(1, 17),
        tags: &[Public, Religious, Christian],
        name: ("Finding of the True Cross (Meskel)", "መስቀል"),
        description: (
            "Commemorates the discovery of the True Cross by Empress Helena in the 4th century.",
            "በ4ኛው መቶ ክፍለ ዘመን በንግሥት እሌኒ አማካኝነት የጌታችን መስቀል መገኘቱን ያከብራል።",
        ),
    },
    Entry {
        key: "beherbehereseb",
        date: fixed(3, 20),
        tags: &[Public, State],
        name: ("Nations, Nationalities, and Peoples' Day", "የብሔር ብሔረሰቦች ቀን"),
        description: (
            "Acknowledges and celebrates the diversity of Ethiopia's ethnic groups, affirming their equal rights and fostering unity.",
            "የኢትዮጵያ ብሔር ብሔረሰቦችን ልዩነት የሚያከብር፣ እኩል መብታቸውን የሚያረጋግጥ እና በባህልና ቋንቋ አንድነትን የሚያጠናክር በዓል ነው።",
        ),
    },
    Entry {
        key: "gena",
        date: fixed(4, 29),
        tags: &[Public, Religious, Christian],
        name: ("Ethiopian Christmas (Genna)", "ገና"),
        description: (
            "Ethiopian Orthodox Christmas celebrating the birth of Jesus Christ.",
            "የኢየሱስ ክርስቶስን ልደት የሚያከብር የኢትዮጵያ ኦርቶዶክስ ተዋሕዶ ቤተ ክርስቲያን በዓል።",
        ),
    },
    Entry {
        key: "timket",
        date: fixed(5, 11),
        tags: &[Public, Religious, Christian],
        name: ("Ethiopian Epiphany (Timket)", "ጥምቀት"),
        description: (
            "Commemorates the baptism of Jesus in the Jordan River.",
            "የኢየሱስ ክርስቶስን በዮርዳኖስ ወንዝ መጠመቁን ያከብራል።",
        ),
    },
    Entry {
        key: "martyrsDay",
        date: fixed(6, 12),
        tags: &[Public, State],
        name: ("Martyrs' Day", "የሰማዕታት ቀን"),
        description: (
            "Honors those who sacrificed their lives for Ethiopia's freedom and independence.",
            "ለኢትዮጵያ ነፃነትና ክብር ሕይወታቸውን የሠዉ ሰማዕታትን ያስባል።",
        ),
    },
    Entry {
        key: "adwa",
        date: fixed(6, 23),
        tags: &[Public, State],
        name: ("Victory of Adwa", "የአድዋ ድል በዓል"),
        description: (
            "Celebrates Ethiopia's victory over Italian colonizers in 1896.",
            "በ1896 ዓ.ም.\nኢትዮጵያ በጣሊያን ቅኝ ገዥዎች ላይ የተቀዳጀችውን ድል ያከብራል።",
        ),
    },
    Entry {
        key: "labour",
        date: fixed(8, 23),
        tags: &[Public, State],
        name: ("International Labour Day", "የሰራተኞች ቀን"),
        description: (
            "A global celebration of workers and labor rights.",
            "ዓለም አቀፍ የሠራተኞችና የሥራ መብቶች ቀን ነው።",
        ),
    },
    Entry {
        key: "patriots",
        date: fixed(8, 27),
        tags: &[Public, State],
        name: ("Patriots' Victory Day", "የአርበኞች ቀን"),
        description: (
            "Honors Ethiopian resistance fighters who defeated Italian occupation.",
            "የጣሊያን ወረራን የተቋቋሙ ኢትዮጵያውያን አርበኞችን ድል ያስባል።",
        ),
    },
    Entry {
        key: "nineveh",
        date: MOVABLE,
        tags: &[Religious, Christian],
        name: ("Fast of Nineveh", "ጾመ ነነዌ"),
        description: (
            "A three-day fast commemorating the repentance of the people of Nineveh.",
            "የነነዌ ሰዎች ንስሐ መግባታቸውን የሚያስታውስ የሦስት ቀን ጾም ነው።",
        ),
    },
    Entry {
        key: "abiyTsome",
        date: MOVABLE,
        tags: &[Religious, Christian],
        name: ("Great Lent", "ዐቢይ ጾም"),
        description: (
            "The Great Lent, a 55-day fasting period before Easter.",
            "ከፋሲካ በፊት የሚጾም የ55 ቀናት የጾም ወቅት ነው።",
        ),
    },
    Entry {
        key: "debreZeit",
        date: MOVABLE,
        tags: &[Religious, Christian],
        name: ("Mid-Lent Sunday", "ደብረ ዘይት"),
        description: (
            "Mid-Lent Sunday, commemorating Jesus's sermon on the Mount of Olives.",
            "ኢየሱስ በደብረ ዘይት ተራራ ያስተማረውን ትምህርት የሚያስታውስ የዐቢይ ጾም አጋማሽ እሑድ።",
        ),
    },
    Entry {
        key: "hosanna",
        date: MOVABLE,
        tags: &[Religious, Christian],
        name: ("Palm Sunday", "ሆሳዕና"),
        description: (
            "Palm Sunday, commemorating Jesus's triumphal entry into Jerusalem.",
            "ኢየሱስ በክብር ወደ ኢየሩሳሌም መግባቱን የሚያስታውስ በዓል።",
        ),
    },
    Entry {
        key: "siklet",
        date: MOVABLE,
        tags: &[Religious, Christian],
        name: ("Good Friday", "ስቅለት"),
        description: (
            "Marks the crucifixion of Jesus Christ.",
            "የኢየሱስ ክርስቶስን ስቅለት የሚያስታውስ ነው።",
        ),
    },
    Entry {
        key: "fasika",
        date: MOVABLE,
        tags: &[Public, Religious, Christian],
        name: ("Ethiopian Easter", "ፋሲካ"),
        description: (
            "Celebrates the resurrection of Jesus Christ.\nOne of the most important Christian holidays in Ethiopia.",
            "የኢየሱስ ክርስቶስን ከሙታን መነሣት ያከብራል።\nበኢትዮጵያ ውስጥ ካሉ ክርስቲያናዊ በዓላት አንዱና ዋነኛው ነው።",
        ),
    },
    Entry {
        key: "rikbeKahnat",
        date: MOVABLE,
        tags: &[Religious, Christian],
        name: ("Meeting of the Priests", "ርክበ ካህናት"),
        description: (
            "The Meeting of the Priests, 24 days after Easter.",
            "ከፋሲካ 24 ቀናት በኋላ የሚከበር የካህናት መሰባሰብ በዓል ነው።",
        ),
    },
    Entry {
        key: "erget",
        date: MOVABLE,
        tags: &[Religious, Christian],
        name: ("Ascension", "ዕርገት"),
        description: (
            "The Ascension of Jesus into heaven, 40 days after Easter.",
            "ከፋሲካ 40 ቀናት በኋላ ኢየሱስ ወደ ሰማይ ማረጉን ያከብራል።",
        ),
    },
    Entry {
        key: "paraclete",
        date: MOVABLE,
        tags: &[Religious, Christian],
        name: ("Pentecost", "ጰራቅሊጦስ"),
        description: (
            "Pentecost, celebrating the descent of the Holy Spirit upon the Apostles, 50 days after Easter.",
            "መንፈስ ቅዱስ በሐዋርያት ላይ መውረዱን የሚያከብር በዓል፣ ከፋሲካ 50 ቀናት በኋላ።",
        ),
    },
    Entry {
        key: "tsomeHawaryat",
        date: MOVABLE,
        tags: &[Religious, Christian],
        name: ("Apostles' Fast", "ጾመ ሐዋርያት"),
        description: (
            "The Fast of the Apostles, which begins the day after Pentecost.",
            "ከጰራቅሊጦስ ማግስት የሚጀምር የሐዋርያት ጾም ነው።",
        ),
    },
    Entry {
        key: "tsomeDihnet",
        date: MOVABLE,
        tags: &[Religious, Christian],
        name: ("Fast of Salvation", "ጾመ ድኅነት"),
        description: (
            "The Fast of Salvation, observed on Wednesdays and Fridays.",
            "በየሳምንቱ ረቡዕ እና ዓርብ የሚጾም የድኅነት ጾም ነው።",
        ),
    },
    Entry {
        key: "eidFitr",
        date: MOVABLE,
        tags: &[Public, Religious, Muslim],
        name: ("Eid al-Fitr", "ዒድ አል ፈጥር"),
        description: (
            "Marks the end of Ramadan, the month of fasting for Muslims.",
            "የረመዳን ጾም ወር መገባደድን የሚያመለክት በዓል።",
        ),
    },
    Entry {
        key: "eidAdha",
        date: MOVABLE,
        tags: &[Public, Religious, Muslim],
        name: ("Eid al-Adha", "ዒድ አል አድሐ"),
        description: (
            "Commemorates Abraham's willingness to sacrifice his son as an act of obedience to God.",
            "አብርሃም ለእግዚአብሔር በመታዘዝ ልጁን ለመሠዋት ፈቃደኝነቱን የሚያስታውስ በዓል።",
        ),
    },
    Entry {
        key: "moulid",
        date: MOVABLE,
        tags: &[Public, Religious, Muslim],
        name: ("Birth of the Prophet", "መውሊድ"),
        description: (
            "Celebrates the birthday of the Prophet Mohammed.",
            "የነቢዩ ሙሐመድን የልደት በዓል ያከብራል።",
        ),
    },
];

/// Ethiopian dates of the Muslim holidays as `(key, year, month, day)`.
///
/// Dates from 2018 on are projected from the astronomical calendar; the
/// observed day depends on moon sighting and may differ by one.
pub const RESOLVED: &[(&str, Year, u8, u8)] = &[
    ("moulid", 2015, 1, 28),
    ("eidFitr", 2015, 8, 13),
    ("eidAdha", 2015, 10, 21),
    ("moulid", 2016, 1, 16),
    ("eidFitr", 2016, 8, 2),
    ("eidAdha", 2016, 10, 9),
    ("moulid", 2017, 1, 5),
    ("eidFitr", 2017, 7, 21),
    ("eidAdha", 2017, 9, 29),
    ("moulid", 2017, 12, 29),
    ("eidFitr", 2018, 7, 11),
    ("eidAdha", 2018, 9, 19),
    ("moulid", 2018, 12, 20),
    ("eidFitr", 2019, 7, 1),
    ("eidAdha", 2019, 9, 8),
    ("moulid", 2019, 12, 9),
];

/// The built-in holiday records, in calendar order of the fixed holidays
/// followed by the movable ones.
pub fn records() -> Vec<HolidayRecord> {
    ENTRIES
        .iter()
        .map(|e| HolidayRecord {
            key: e.key.to_string(),
            date: e.date,
            name: LocalizedText::new(e.name.0, e.name.1),
            description: LocalizedText::new(e.description.0, e.description.1),
            image: None,
            tags: e.tags.to_vec(),
        })
        .collect()
}
