//! Wire request and response types for the radio code service

use chrono::NaiveDate;
use indexmap::IndexMap;
use radiocode_core::{PatternError, PatternSpec, PatternTable, RadioModel};
use serde::{Deserialize, Serialize};

/// License kind attached to an activation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LicenseType {
    Personal,
    Company,
}

impl TryFrom<u8> for LicenseType {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(LicenseType::Personal),
            1 => Ok(LicenseType::Company),
            other => Err(format!("unknown license type {}", other)),
        }
    }
}

impl From<LicenseType> for u8 {
    fn from(value: LicenseType) -> Self {
        match value {
            LicenseType::Personal => 0,
            LicenseType::Company => 1,
        }
    }
}

/// License metadata returned by the `login` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseInfo {
    /// License owner
    #[serde(rename = "userName")]
    pub user_name: String,
    /// Personal or company license
    #[serde(rename = "type")]
    pub license_type: LicenseType,
    /// Day the license stops working
    #[serde(rename = "expirationDate")]
    pub expiration_date: NaiveDate,
    /// Whether the key is currently active
    #[serde(rename = "activationStatus")]
    pub active: bool,
}

/// Successful `login` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub license: LicenseInfo,
}

/// Successful `calc` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalcResponse {
    /// The calculated unlock code
    pub code: String,
}

/// Per-model metadata as returned by `info` and inside `list`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfoResponse {
    pub serial_max_len: u32,
    pub serial_regex_pattern: PatternSpec,
    #[serde(default)]
    pub extra_max_len: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_regex_pattern: Option<PatternSpec>,
}

impl ModelInfoResponse {
    /// Reconstruct a [`RadioModel`] from service metadata.
    ///
    /// The pattern mappings come straight off the wire and may carry
    /// several dialects.
    pub fn to_model(&self, name: &str) -> Result<RadioModel, PatternError> {
        let serial_patterns = PatternTable::from_spec(&self.serial_regex_pattern)?;
        let extra_patterns = match &self.extra_regex_pattern {
            Some(spec) if self.extra_max_len > 0 => PatternTable::from_spec(spec)?,
            _ => PatternTable::default(),
        };
        Ok(RadioModel::from_tables(
            name,
            self.serial_max_len,
            serial_patterns,
            self.extra_max_len,
            extra_patterns,
        ))
    }
}

/// Successful `list` response body.
///
/// The mapping preserves the service's enumeration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(rename = "supportedRadioModels")]
    pub supported_radio_models: IndexMap<String, ModelInfoResponse>,
}
