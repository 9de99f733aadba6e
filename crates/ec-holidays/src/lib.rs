//! # ec-holidays
//!
//! The reference holiday dataset and the machinery that places movable
//! holidays on concrete dates:
//!
//! * [`HolidayRecord`] / [`HolidaySet`]: bilingual holiday records, built in
//!   or loaded from a TOML file.
//! * [`BahireHasab`]: the Ethiopian Orthodox computus.
//! * [`MovableFeastResolver`]: pluggable per-year resolvers, with
//!   [`BahireHasabResolver`] and the pre-resolved [`FeastTable`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Bahire Hasab and the movable Orthodox feasts.
pub mod bahire_hasab;

/// Built-in holiday records.
pub mod builtin;

/// `HolidaySet` and the dataset file format.
pub mod dataset;

/// `HolidayRecord`, `HolidayDate`, `HolidayTag`.
pub mod holiday;

/// Movable-feast resolvers.
pub mod resolver;

pub use bahire_hasab::{BahireHasab, MovableFeast};
pub use dataset::HolidaySet;
pub use holiday::{HolidayDate, HolidayRecord, HolidayTag};
pub use resolver::{BahireHasabResolver, FeastTable, MovableFeastResolver, ResolvedFeast};
