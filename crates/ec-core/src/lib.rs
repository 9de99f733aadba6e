//! # ec-core
//!
//! Core types and error definitions for ethcal.
//!
//! This crate provides the building blocks shared across the workspace: the
//! error taxonomy with its `ensure!` / `fail!` macros, the display
//! [`Language`], and date-string parsing.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Date-string parsers.
pub mod data_parsers;

/// Display languages and bilingual text.
pub mod language;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year (Ethiopian or Gregorian, depending on context).
pub type Year = i32;

/// Serial day number: R.D. 1 is 0001-01-01 in the proleptic Gregorian
/// calendar.
pub type Serial = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use language::{Language, LocalizedText};
