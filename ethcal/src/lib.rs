//! # ethcal
//!
//! Ethiopian calendar engine: Ethiopian ⇄ Gregorian conversion, month
//! views with holidays, and the Bahire Hasab computus.
//!
//! This crate is a façade over the workspace crates plus the configuration
//! layer used by the `ethcal` binary.
//!
//! ```rust
//! use ethcal::engine::CalendarEngine;
//!
//! let engine = CalendarEngine::default();
//! let view = engine.month_view(2016, 0).unwrap();
//! assert_eq!(view.num_days(), 30);
//! assert_eq!(view.holidays_on(17), ["meskel"]);
//! assert_eq!(engine.convert(2016, 1, 1).unwrap().to_string(), "2023-09-12");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Errors, languages, and shared aliases.
pub use ec_core as core;

/// Ethiopian and Gregorian dates.
pub use ec_time as time;

/// Holiday dataset, Bahire Hasab, and movable-feast resolvers.
pub use ec_holidays as holidays;

/// Calendar engine and JSON binding.
pub use ec_engine as engine;

/// Configuration file discovery and loading.
pub mod config;

pub use config::{load_suitable_config, Config, ConfigError};
