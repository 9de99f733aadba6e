//! JSON binding of the engine.
//!
//! A [`Request`] is a JSON object tagged by `op`:
//!
//! ```json
//! {"op": "month", "year": 2016, "month_idx": 0}
//! {"op": "convert", "year": 2016, "month": 1, "day": 1}
//! {"op": "convert_reverse", "year": 2023, "month": 9, "day": 12}
//! {"op": "holiday", "key": "meskel"}
//! {"op": "bahire_hasab", "year": 2016}
//! ```
//!
//! and every answer is a [`Response`], either `{"ok": true, "data": …}` or
//! `{"ok": false, "error": {"kind": …, "message": …}}`.

use crate::engine::CalendarEngine;
use crate::view::MonthView;
use ec_core::errors::Result;
use ec_core::{Error, Language, LocalizedText, Year};
use ec_holidays::{HolidayDate, HolidayRecord, HolidayTag, ResolvedFeast};
use ec_time::{EthiopianDate, GregorianDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A request to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// Month view; `month_idx` is zero-based.
    Month {
        /// Ethiopian year.
        year: Year,
        /// Month index, 0–12.
        month_idx: i32,
    },
    /// Ethiopian to Gregorian.
    Convert {
        /// Ethiopian year.
        year: Year,
        /// Ethiopian month, 1–13.
        month: i32,
        /// Day of the month.
        day: i32,
    },
    /// Gregorian to Ethiopian.
    ConvertReverse {
        /// Gregorian year.
        year: Year,
        /// Gregorian month, 1–12.
        month: i32,
        /// Day of the month.
        day: i32,
    },
    /// Holiday detail by key.
    Holiday {
        /// Holiday key, any case.
        key: String,
    },
    /// Bahire Hasab for a year.
    BahireHasab {
        /// Ethiopian year.
        year: Year,
    },
}

/// Error part of a failed [`Response`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error class, e.g. `"InvalidRange"`.
    pub kind: String,
    /// Human-readable message.
    pub message: String,
}

/// An answer to a [`Request`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    /// Whether the request succeeded.
    pub ok: bool,
    /// Payload on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Failure description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

impl Response {
    /// A successful response.
    pub fn success(data: Value) -> Self {
        Self {
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    /// A failed response.
    pub fn failure(err: &Error) -> Self {
        Self {
            ok: false,
            data: None,
            error: Some(ErrorBody {
                kind: err.kind().to_string(),
                message: err.to_string(),
            }),
        }
    }
}

impl From<Result<Value>> for Response {
    fn from(result: Result<Value>) -> Self {
        match result {
            Ok(data) => Response::success(data),
            Err(e) => Response::failure(&e),
        }
    }
}

// ── Payloads ──────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct CellPayload {
    day: u8,
    weekday: &'static str,
    gregorian: String,
    holidays: Vec<String>,
}

#[derive(Debug, Serialize)]
struct MonthPayload {
    year: Year,
    month_idx: u8,
    month_name: &'static str,
    formatted: String,
    evangelist: &'static str,
    start_col: u8,
    num_days: u8,
    holidays: BTreeMap<u8, Vec<String>>,
    grid: Vec<CellPayload>,
}

#[derive(Debug, Serialize)]
struct FeastPayload {
    key: String,
    ethiopian: String,
    gregorian: String,
}

#[derive(Debug, Serialize)]
struct ConvertPayload {
    ethiopian: String,
    gregorian: String,
    formatted: String,
    weekday: &'static str,
    movable_feasts: Vec<FeastPayload>,
}

#[derive(Debug, Serialize)]
struct ReversePayload {
    year: Year,
    month: u8,
    day: u8,
    month_name: &'static str,
    ethiopian: String,
    weekday: &'static str,
    evangelist: &'static str,
}

#[derive(Debug, Serialize)]
struct HolidayPayload<'a> {
    key: &'a str,
    name: &'a LocalizedText,
    description: &'a LocalizedText,
    image: Option<String>,
    tags: &'a [HolidayTag],
    movable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    month: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    day: Option<u8>,
}

#[derive(Debug, Serialize)]
struct DatedPayload {
    ethiopian: String,
    gregorian: String,
    weekday: &'static str,
}

#[derive(Debug, Serialize)]
struct BahireHasabPayload {
    year: Year,
    amete_alem: i32,
    metene_rabiet: i32,
    evangelist: &'static str,
    tinte_qemer: u8,
    new_year_weekday: &'static str,
    medeb: u8,
    wenber: u8,
    abektie: u8,
    metqi: u8,
    beale_metqi: DatedPayload,
    tewsak: u8,
    mebaja_hamer: u8,
    nineveh: DatedPayload,
    movable_feasts: Vec<FeastPayload>,
}

// ── Api ───────────────────────────────────────────────────────────────────────

/// Serves [`Request`]s from a [`CalendarEngine`].
#[derive(Debug)]
pub struct Api {
    engine: CalendarEngine,
    language: Language,
    asset_base: Option<String>,
}

impl Api {
    /// Wrap an engine; names are rendered in English.
    pub fn new(engine: CalendarEngine) -> Self {
        Self {
            engine,
            language: Language::default(),
            asset_base: None,
        }
    }

    /// Render month, weekday, and evangelist names in `language`.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Prefix holiday image paths with `base`.
    pub fn with_asset_base(mut self, base: impl Into<String>) -> Self {
        self.asset_base = Some(base.into());
        self
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &CalendarEngine {
        &self.engine
    }

    /// Answer one request.
    pub fn dispatch(&self, request: &Request) -> Response {
        let result = self.handle(request);
        if let Err(e) = &result {
            log::debug!("{request:?} failed: {e}");
        }
        result.into()
    }

    /// Decode a JSON request, answer it, and encode the response.
    pub fn handle_json(&self, text: &str) -> String {
        let response = match serde_json::from_str::<Request>(text) {
            Ok(request) => self.dispatch(&request),
            Err(e) => Response::failure(&Error::InvalidRequest(e.to_string())),
        };
        match serde_json::to_string(&response) {
            Ok(s) => s,
            Err(e) => unreachable!("response payloads always serialize: {e}"),
        }
    }

    /// Answer one request, returning the bare payload.
    pub fn handle(&self, request: &Request) -> Result<Value> {
        match request {
            Request::Month { year, month_idx } => self.month(*year, *month_idx),
            Request::Convert { year, month, day } => {
                self.convert(*year, narrow(*month, "month")?, narrow(*day, "day")?)
            }
            Request::ConvertReverse { year, month, day } => {
                self.convert_reverse(*year, narrow(*month, "month")?, narrow(*day, "day")?)
            }
            Request::Holiday { key } => self.holiday(key),
            Request::BahireHasab { year } => self.bahire_hasab(*year),
        }
    }

    fn month(&self, year: Year, month_idx: i32) -> Result<Value> {
        let view = self.engine.month_view(year, month_idx)?;
        to_value(self.month_payload(&view))
    }

    fn month_payload(&self, view: &MonthView) -> MonthPayload {
        let lang = self.language;
        let month_name = view.month_name(lang);
        MonthPayload {
            year: view.year(),
            month_idx: view.month_index(),
            month_name,
            formatted: format!("{month_name} {}", view.year()),
            evangelist: view.evangelist().name(lang),
            start_col: view.start_col(),
            num_days: view.num_days(),
            holidays: view.holidays.clone(),
            grid: view
                .grid
                .iter()
                .map(|cell| CellPayload {
                    day: cell.day,
                    weekday: cell.weekday.name(lang),
                    gregorian: cell.gregorian.to_string(),
                    holidays: cell.holidays.clone(),
                })
                .collect(),
        }
    }

    fn convert(&self, year: Year, month: u8, day: u8) -> Result<Value> {
        let gregorian = self.engine.convert(year, month, day)?;
        let ethiopian = EthiopianDate::new(year, month, day)?;
        let feasts = self.engine.movable_feasts(year)?;
        to_value(ConvertPayload {
            ethiopian: self.ethiopian_text(ethiopian),
            gregorian: gregorian.to_string(),
            formatted: gregorian.long_format(),
            weekday: gregorian.weekday().name(self.language),
            movable_feasts: self.feast_payloads(&feasts),
        })
    }

    fn convert_reverse(&self, year: Year, month: u8, day: u8) -> Result<Value> {
        let date = self.engine.convert_reverse(year, month, day)?;
        let lang = self.language;
        to_value(ReversePayload {
            year: date.year(),
            month: date.month(),
            day: date.day(),
            month_name: date.month_enum().name(lang),
            ethiopian: self.ethiopian_text(date),
            weekday: date.weekday().name(lang),
            evangelist: ec_time::Evangelist::of_year(date.year()).name(lang),
        })
    }

    fn holiday(&self, key: &str) -> Result<Value> {
        let record = self.engine.holiday_detail(key)?;
        to_value(self.holiday_payload(record))
    }

    fn holiday_payload<'a>(&self, record: &'a HolidayRecord) -> HolidayPayload<'a> {
        let (month, day) = match record.date {
            HolidayDate::Fixed { month, day } => (Some(month), Some(day)),
            HolidayDate::Movable => (None, None),
        };
        HolidayPayload {
            key: &record.key,
            name: &record.name,
            description: &record.description,
            image: record.image.as_deref().map(|path| self.asset_url(path)),
            tags: &record.tags,
            movable: record.is_movable(),
            month,
            day,
        }
    }

    fn bahire_hasab(&self, year: Year) -> Result<Value> {
        let bh = self.engine.bahire_hasab(year)?;
        let feasts = self.engine.movable_feasts(year)?;
        let lang = self.language;
        to_value(BahireHasabPayload {
            year: bh.year,
            amete_alem: bh.amete_alem,
            metene_rabiet: bh.metene_rabiet,
            evangelist: bh.evangelist.name(lang),
            tinte_qemer: bh.tinte_qemer,
            new_year_weekday: bh.new_year_weekday().name(lang),
            medeb: bh.medeb,
            wenber: bh.wenber,
            abektie: bh.abektie,
            metqi: bh.metqi,
            beale_metqi: self.dated(bh.beale_metqi),
            tewsak: bh.tewsak,
            mebaja_hamer: bh.mebaja_hamer,
            nineveh: self.dated(bh.nineveh),
            movable_feasts: self.feast_payloads(&feasts),
        })
    }

    fn feast_payloads(&self, feasts: &[ResolvedFeast]) -> Vec<FeastPayload> {
        feasts
            .iter()
            .map(|f| FeastPayload {
                key: f.key.clone(),
                ethiopian: self.ethiopian_text(f.date),
                gregorian: f.date.to_gregorian().to_string(),
            })
            .collect()
    }

    fn dated(&self, date: EthiopianDate) -> DatedPayload {
        let gregorian: GregorianDate = date.into();
        DatedPayload {
            ethiopian: self.ethiopian_text(date),
            gregorian: gregorian.to_string(),
            weekday: date.weekday().name(self.language),
        }
    }

    /// `"1 Meskerem 2016"`, with the month name in the configured language.
    fn ethiopian_text(&self, date: EthiopianDate) -> String {
        format!(
            "{} {} {}",
            date.day(),
            date.month_enum().name(self.language),
            date.year()
        )
    }

    fn asset_url(&self, path: &str) -> String {
        match &self.asset_base {
            Some(base) => format!(
                "{}/{}",
                base.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            None => path.to_string(),
        }
    }
}

/// Narrow a request field to a month or day number.
fn narrow(value: i32, what: &str) -> Result<u8> {
    u8::try_from(value).map_err(|_| Error::InvalidDate(format!("{what} {value} is not a valid {what}")))
}

fn to_value<T: Serialize>(payload: T) -> Result<Value> {
    serde_json::to_value(payload).map_err(|e| Error::InvalidRequest(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ec_holidays::HolidaySet;
    use serde_json::json;
    use std::sync::Arc;

    fn api() -> Api {
        Api::new(CalendarEngine::default())
    }

    fn call(api: &Api, request: Value) -> Value {
        let text = api.handle_json(&request.to_string());
        serde_json::from_str(&text).unwrap()
    }

    #[test]
    fn request_tags() {
        let r: Request = serde_json::from_value(json!({"op": "month", "year": 2016, "month_idx": 12})).unwrap();
        assert_eq!(r, Request::Month { year: 2016, month_idx: 12 });
        let r: Request = serde_json::from_value(json!({"op": "convert_reverse", "year": 2024, "month": 1, "day": 7})).unwrap();
        assert_eq!(r, Request::ConvertReverse { year: 2024, month: 1, day: 7 });
        let r: Request = serde_json::from_value(json!({"op": "bahire_hasab", "year": 2016})).unwrap();
        assert_eq!(r, Request::BahireHasab { year: 2016 });
    }

    #[test]
    fn month_response() {
        let v = call(&api(), json!({"op": "month", "year": 2016, "month_idx": 0}));
        assert_eq!(v["ok"], true);
        let data = &v["data"];
        assert_eq!(data["month_name"], "Meskerem");
        assert_eq!(data["formatted"], "Meskerem 2016");
        assert_eq!(data["evangelist"], "John");
        assert_eq!(data["start_col"], 2);
        assert_eq!(data["num_days"], 30);
        assert_eq!(data["holidays"]["17"], json!(["meskel"]));
        assert_eq!(data["grid"][0]["weekday"], "Tuesday");
        assert_eq!(data["grid"][0]["gregorian"], "2023-09-12");
    }

    #[test]
    fn convert_response() {
        let v = call(&api(), json!({"op": "convert", "year": 2016, "month": 1, "day": 1}));
        let data = &v["data"];
        assert_eq!(data["ethiopian"], "1 Meskerem 2016");
        assert_eq!(data["formatted"], "September 12, 2023");
        assert_eq!(data["weekday"], "Tuesday");
        let feasts = data["movable_feasts"].as_array().unwrap();
        assert_eq!(feasts.len(), 14);
        assert_eq!(feasts[5]["key"], "fasika");
        assert_eq!(feasts[5]["gregorian"], "2024-05-05");
        assert_eq!(feasts[12]["key"], "eidFitr");
        assert_eq!(feasts[12]["gregorian"], "2024-04-10");
    }

    #[test]
    fn amharic_names() {
        let api = api().with_language(Language::Amharic);
        let v = call(&api, json!({"op": "convert_reverse", "year": 2023, "month": 9, "day": 12}));
        let data = &v["data"];
        assert_eq!(data["month_name"], "መስከረም");
        assert_eq!(data["ethiopian"], "1 መስከረም 2016");
        assert_eq!(data["year"], 2016);
    }

    #[test]
    fn errors_carry_their_kind() {
        let api = api();
        let cases = [
            (json!({"op": "month", "year": 0, "month_idx": 0}), "InvalidRange"),
            (json!({"op": "month", "year": 2016, "month_idx": 13}), "InvalidRange"),
            (json!({"op": "convert", "year": 2016, "month": 13, "day": 6}), "InvalidDate"),
            (json!({"op": "convert", "year": 2016, "month": -1, "day": 6}), "InvalidDate"),
            (json!({"op": "convert_reverse", "year": 2023, "month": 2, "day": 30}), "InvalidDate"),
            (json!({"op": "holiday", "key": "nonexistent-key"}), "NotFound"),
            (json!({"op": "dance"}), "InvalidRequest"),
        ];
        for (request, kind) in cases {
            let v = call(&api, request.clone());
            assert_eq!(v["ok"], false, "{request}");
            assert_eq!(v["error"]["kind"], kind, "{request}");
            assert!(v.get("data").is_none());
        }
        let text = api.handle_json("not json");
        assert!(text.contains("InvalidRequest"));
    }

    #[test]
    fn holiday_images_use_asset_base() {
        let set = HolidaySet::from_toml_str(
            r#"
[[holiday]]
key = "meskel"
month = 1
day = 17
image = "/meskel.png"
name = { english = "Meskel", amharic = "መስቀል" }
"#,
        )
        .unwrap();
        let api = Api::new(CalendarEngine::new(Arc::new(set))).with_asset_base("assets/");
        let v = call(&api, json!({"op": "holiday", "key": "MESKEL"}));
        let data = &v["data"];
        assert_eq!(data["image"], "assets/meskel.png");
        assert_eq!(data["name"]["amharic"], "መስቀል");
        assert_eq!(data["month"], 1);
        assert_eq!(data["movable"], false);
    }

    #[test]
    fn bahire_hasab_response() {
        let v = call(&api(), json!({"op": "bahire_hasab", "year": 2016}));
        let data = &v["data"];
        assert_eq!(data["metqi"], 10);
        assert_eq!(data["tewsak"], 8);
        assert_eq!(data["nineveh"]["gregorian"], "2024-02-26");
        assert_eq!(data["nineveh"]["weekday"], "Monday");
        assert_eq!(data["beale_metqi"]["ethiopian"], "10 Tikimt 2016");
    }
}
