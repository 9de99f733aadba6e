//! # ec-engine
//!
//! The calendar engine and its JSON binding.
//!
//! [`CalendarEngine`] answers month-view, conversion, and holiday queries
//! over a shared [`ec_holidays::HolidaySet`]; [`Api`] maps JSON
//! [`Request`]s onto it and wraps the answers in [`Response`]s.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// JSON request / response binding.
pub mod api;

/// `CalendarEngine`.
pub mod engine;

/// `MonthInfo`, `MonthView`, `HolidayOccurrence`.
pub mod view;

pub use api::{Api, ErrorBody, Request, Response};
pub use engine::CalendarEngine;
pub use view::{DayCell, HolidayOccurrence, MonthInfo, MonthView};
