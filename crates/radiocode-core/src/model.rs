//! Radio model rules and offline input validation

use crate::error::ErrorCode;
use crate::pattern::{PatternDialect, PatternError, PatternTable, RegexPattern};

/// Validation rules for one radio/navigation head unit model.
///
/// A model is immutable after construction. It describes how a serial
/// number (and, for some models, an extra data field) must look before the
/// service can calculate a code for it, so callers can reject bad input
/// without a network round trip.
///
/// # Example
///
/// ```
/// use radiocode_core::{catalog, ErrorCode};
///
/// let model = &catalog().ford_m_series;
/// assert_eq!(model.validate("123456", None), ErrorCode::Success);
/// assert_eq!(model.validate("1", None), ErrorCode::InvalidSerialLength);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RadioModel {
    name: String,
    serial_max_len: u32,
    serial_patterns: PatternTable,
    extra_max_len: u32,
    extra_patterns: PatternTable,
    dialect: PatternDialect,
}

impl RadioModel {
    /// Create a model without an extra data field.
    ///
    /// `serial_pattern` is a `/<body>/<flags>` wire pattern, filed under the
    /// default dialect.
    pub fn new(
        name: impl Into<String>,
        serial_max_len: u32,
        serial_pattern: &str,
    ) -> Result<Self, PatternError> {
        Self::with_extra(name, serial_max_len, serial_pattern, 0, None)
    }

    /// Create a model with an optional extra data field.
    ///
    /// When `extra_max_len` is zero the extra pattern is discarded and the
    /// model performs no extra validation.
    pub fn with_extra(
        name: impl Into<String>,
        serial_max_len: u32,
        serial_pattern: &str,
        extra_max_len: u32,
        extra_pattern: Option<&str>,
    ) -> Result<Self, PatternError> {
        let serial_patterns = PatternTable::parse_single(PatternDialect::DEFAULT, serial_pattern)?;
        let extra_patterns = match extra_pattern {
            Some(wire) if extra_max_len > 0 => {
                PatternTable::parse_single(PatternDialect::DEFAULT, wire)?
            }
            _ => PatternTable::default(),
        };
        Ok(Self::from_tables(
            name,
            serial_max_len,
            serial_patterns,
            extra_max_len,
            extra_patterns,
        ))
    }

    /// Assemble a model from already-built pattern tables.
    ///
    /// Used when reconstructing models from service metadata, where the
    /// tables may carry several dialects.
    pub fn from_tables(
        name: impl Into<String>,
        serial_max_len: u32,
        serial_patterns: PatternTable,
        extra_max_len: u32,
        extra_patterns: PatternTable,
    ) -> Self {
        let extra_patterns = if extra_max_len == 0 {
            PatternTable::default()
        } else {
            extra_patterns
        };
        Self {
            name: name.into(),
            serial_max_len,
            serial_patterns,
            extra_max_len,
            extra_patterns,
            dialect: PatternDialect::DEFAULT,
        }
    }

    /// Stable model identifier, e.g. `"ford-m-series"`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Required serial number length.
    pub fn serial_max_len(&self) -> u32 {
        self.serial_max_len
    }

    /// Required extra data length, zero when the model takes none.
    pub fn extra_max_len(&self) -> u32 {
        self.extra_max_len
    }

    /// Dialect this instance resolves its pattern tables against.
    pub fn dialect(&self) -> PatternDialect {
        self.dialect
    }

    /// Full serial pattern table as received at construction.
    pub fn serial_patterns(&self) -> &PatternTable {
        &self.serial_patterns
    }

    /// Full extra pattern table, empty when no extra field is configured.
    pub fn extra_patterns(&self) -> &PatternTable {
        &self.extra_patterns
    }

    /// Serial pattern for this instance's dialect, if present.
    pub fn serial_pattern(&self) -> Option<&RegexPattern> {
        self.serial_patterns.get(self.dialect)
    }

    /// Extra pattern for this instance's dialect.
    ///
    /// `None` when the model takes no extra data or the table has no entry
    /// for the dialect.
    pub fn extra_pattern(&self) -> Option<&RegexPattern> {
        if self.extra_max_len == 0 {
            return None;
        }
        self.extra_patterns.get(self.dialect)
    }

    /// Validate a serial/extra pair offline.
    ///
    /// Checks run in order and stop at the first failure: serial length,
    /// serial pattern, then (only when `extra` is non-empty) extra length
    /// and extra pattern. A missing extra field is never an error here; a
    /// model that requires one gets that enforced by the service.
    pub fn validate(&self, serial: &str, extra: Option<&str>) -> ErrorCode {
        if serial.chars().count() != self.serial_max_len as usize {
            return ErrorCode::InvalidSerialLength;
        }
        match self.serial_pattern() {
            Some(pattern) if pattern.is_match(serial) => {}
            _ => return ErrorCode::InvalidSerialPattern,
        }

        if let Some(extra) = extra.filter(|extra| !extra.is_empty()) {
            if extra.chars().count() != self.extra_max_len as usize {
                return ErrorCode::InvalidExtraLength;
            }
            // Resolved on the instance; a pattern-less model only checks length.
            if let Some(pattern) = self.extra_pattern() {
                if !pattern.is_match(extra) {
                    return ErrorCode::InvalidExtraPattern;
                }
            }
        }

        ErrorCode::Success
    }
}
