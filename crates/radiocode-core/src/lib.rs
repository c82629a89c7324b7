//! Core types for the radio code calculator service
//!
//! Holds everything that works offline: the shared [`ErrorCode`]
//! vocabulary, the pattern layer for the service's `/<body>/<flags>` wire
//! patterns, the [`RadioModel`] validation rules and the built-in model
//! [`catalog`]. No I/O happens in this crate; the HTTP client lives in
//! `radiocode-client`.
//!
//! # Example
//!
//! ```
//! use radiocode_core::{catalog, ErrorCode};
//!
//! let model = &catalog().renault_dacia;
//! assert_eq!(model.validate("Z999", None), ErrorCode::Success);
//! assert_eq!(model.validate("9999", None), ErrorCode::InvalidSerialPattern);
//! ```

mod catalog;
mod error;
mod model;
mod pattern;

pub use catalog::{catalog, RadioModels};
pub use error::ErrorCode;
pub use model::RadioModel;
pub use pattern::{PatternDialect, PatternError, PatternSpec, PatternTable, RegexPattern};
