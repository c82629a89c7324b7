//! Radio code service HTTP client implementation

use std::time::Duration;

use radiocode_core::{ErrorCode, RadioModel};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{RadioCodeError, Result};
use crate::request::{AsModelName, Command, RequestParams};
use crate::types::{CalcResponse, LicenseInfo, ListResponse, LoginResponse, ModelInfoResponse};

/// Production endpoint of the radio code calculation service
pub const DEFAULT_API_URL: &str = "https://www.pelock.com/api/radio-code-calculator/v1";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
/// Default connection timeout
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Radio code service client.
///
/// Holds one activation key for its lifetime and is otherwise stateless:
/// every operation issues exactly one request and produces exactly one
/// result. The client is cheap to clone and safe to share across tasks.
#[derive(Debug, Clone)]
pub struct RadioCodeClient {
    http: Client,
    api_url: Url,
    activation_key: Option<String>,
}

impl RadioCodeClient {
    /// Create a client against the production endpoint.
    ///
    /// An empty `activation_key` leaves the client unlicensed; every
    /// operation then fails with [`ErrorCode::InvalidLicense`] without
    /// touching the network.
    pub fn new(activation_key: &str) -> Result<Self> {
        Self::with_config(
            DEFAULT_API_URL,
            activation_key,
            DEFAULT_TIMEOUT,
            DEFAULT_CONNECT_TIMEOUT,
        )
    }

    /// Create a client with a custom endpoint and timeouts.
    pub fn with_config(
        api_url: &str,
        activation_key: &str,
        timeout: Duration,
        connect_timeout: Duration,
    ) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        let api_url = Url::parse(api_url)?;
        let activation_key = if activation_key.is_empty() {
            None
        } else {
            Some(activation_key.to_string())
        };

        Ok(Self {
            http,
            api_url,
            activation_key,
        })
    }

    /// Service endpoint this client posts to.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Whether an activation key is configured.
    pub fn has_activation_key(&self) -> bool {
        self.activation_key.is_some()
    }

    /// Validate the activation key and fetch its license metadata.
    #[instrument(skip(self))]
    pub async fn login(&self) -> Result<LicenseInfo> {
        let payload = self.post_request(RequestParams::command(Command::Login)).await?;
        let login: LoginResponse = parse_payload(payload)?;
        Ok(login.license)
    }

    /// Calculate an unlock code for `serial` (and `extra` where the model
    /// uses one).
    ///
    /// No local validation runs here; the service performs all checks and
    /// its error code is surfaced as-is. Use
    /// [`RadioModel::validate`](radiocode_core::RadioModel::validate) first
    /// to save the round trip for obviously bad input.
    #[instrument(skip(self, model), fields(radio_model = model.as_model_name()))]
    pub async fn calc(
        &self,
        model: &(impl AsModelName + ?Sized),
        serial: &str,
        extra: &str,
    ) -> Result<String> {
        let params = RequestParams::command(Command::Calc)
            .radio_model(model.as_model_name())
            .serial(serial)
            .extra(extra);

        let payload = self.post_request(params).await?;
        let calc: CalcResponse = parse_payload(payload)?;
        Ok(calc.code)
    }

    /// Fetch the validation rules for one model.
    ///
    /// The returned [`RadioModel`] mirrors the service metadata, including
    /// pattern dictionaries that may span several dialects.
    #[instrument(skip(self, model), fields(radio_model = model.as_model_name()))]
    pub async fn info(&self, model: &(impl AsModelName + ?Sized)) -> Result<RadioModel> {
        let name = model.as_model_name();
        let params = RequestParams::command(Command::Info).radio_model(name);

        let payload = self.post_request(params).await?;
        let info: ModelInfoResponse = parse_payload(payload)?;
        info.to_model(name)
            .map_err(|e| RadioCodeError::MalformedResponse(e.to_string()))
    }

    /// Fetch all models the service supports, in the service's order.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<RadioModel>> {
        let payload = self.post_request(RequestParams::command(Command::List)).await?;
        let list: ListResponse = parse_payload(payload)?;

        let mut models = Vec::with_capacity(list.supported_radio_models.len());
        for (name, entry) in &list.supported_radio_models {
            let model = entry
                .to_model(name)
                .map_err(|e| RadioCodeError::MalformedResponse(e.to_string()))?;
            models.push(model);
        }
        Ok(models)
    }

    /// Issue one command request and apply the uniform error envelope.
    ///
    /// The activation key is checked before any network access, then
    /// prepended as `key` to the ordered parameters. A payload whose
    /// `error` field is non-zero is rejected verbatim; anything that is not
    /// a well-formed envelope resolves to a connection-level failure.
    async fn post_request(&self, params: RequestParams) -> Result<serde_json::Value> {
        let key = self
            .activation_key
            .as_deref()
            .ok_or(RadioCodeError::MissingLicense)?;

        debug!(command = %params.command_kind(), url = %self.api_url, "posting command");

        let mut form: Vec<(&str, &str)> = Vec::with_capacity(params.len() + 1);
        form.push(("key", key));
        for (param, value) in params.entries() {
            form.push((param.name(), value));
        }

        let response = self.http.post(self.api_url.clone()).form(&form).send().await?;
        let payload: serde_json::Value = response.json().await?;

        let raw_code = payload
            .get("error")
            .and_then(serde_json::Value::as_i64)
            .ok_or_else(|| {
                RadioCodeError::MalformedResponse("missing error field".to_string())
            })?;
        let code = i32::try_from(raw_code).map(ErrorCode::from_code).map_err(|_| {
            RadioCodeError::MalformedResponse(format!("error code {} out of range", raw_code))
        })?;

        if code.is_success() {
            Ok(payload)
        } else {
            Err(RadioCodeError::Api { code, payload })
        }
    }
}

fn parse_payload<T: DeserializeOwned>(payload: serde_json::Value) -> Result<T> {
    serde_json::from_value(payload).map_err(|e| RadioCodeError::MalformedResponse(e.to_string()))
}
