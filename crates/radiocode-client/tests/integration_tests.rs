//! Integration tests for radiocode-client
//!
//! These tests spin up an in-process mock of the radio code service and
//! drive the real client against it over HTTP, so the form encoding, the
//! error envelope and the response reshaping are all exercised end to end.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::Form;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use pretty_assertions::assert_eq;
use radiocode_client::testing::TestServer;
use radiocode_client::{catalog, ErrorCode, LicenseType, RadioCodeClient, RadioCodeError};

const TEST_KEY: &str = "test-activation-key";

// =============================================================================
// Mock Service
// =============================================================================

fn mock_router() -> Router {
    Router::new().route("/", post(handle_command))
}

fn json_body(body: &'static str) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

async fn handle_command(Form(params): Form<HashMap<String, String>>) -> Response {
    if params.get("key").map(String::as_str) != Some(TEST_KEY) {
        return json_body(r#"{"error": 100}"#);
    }

    let model = params.get("radio_model").map(String::as_str).unwrap_or("");
    let serial = params.get("serial").map(String::as_str).unwrap_or("");
    let extra = params.get("extra").map(String::as_str).unwrap_or("");

    match params.get("command").map(String::as_str) {
        Some("login") => json_body(
            r#"{"error": 0, "license": {"userName": "Test Garage", "type": 0,
                "expirationDate": "2027-01-31", "activationStatus": true}}"#,
        ),
        Some("calc") => match (model, serial) {
            ("ford-m-series", "123456") => json_body(r#"{"error": 0, "code": "4573"}"#),
            ("ford-m-series", _) => json_body(r#"{"error": 4}"#),
            ("test-extra", "123456") if extra == "ABCD" => {
                json_body(r#"{"error": 0, "code": "9000"}"#)
            }
            ("test-extra", "123456") => json_body(r#"{"error": 8}"#),
            ("future-model", _) => json_body(r#"{"error": 217}"#),
            _ => json_body(r#"{"error": 3}"#),
        },
        Some("info") => match model {
            "ford-m-series" => json_body(
                r#"{"error": 0, "serialMaxLen": 6,
                    "serialRegexPattern": {"js": "/^([0-9]{6})$/", "php": "/^([0-9]{6})$/"},
                    "extraMaxLen": 0}"#,
            ),
            "test-extra" => json_body(
                r#"{"error": 0, "serialMaxLen": 6,
                    "serialRegexPattern": "/^([0-9]{6})$/",
                    "extraMaxLen": 4,
                    "extraRegexPattern": "/^([A-Z]{4})$/i"}"#,
            ),
            _ => json_body(r#"{"error": 3}"#),
        },
        // Key order here is deliberately non-alphabetical; the client must
        // keep it as sent.
        Some("list") => json_body(
            r#"{"error": 0, "supportedRadioModels": {
                "renault-dacia": {"serialMaxLen": 4,
                    "serialRegexPattern": "/^([A-Z]{1}[0-9]{3})$/i"},
                "ford-m-series": {"serialMaxLen": 6,
                    "serialRegexPattern": "/^([0-9]{6})$/"},
                "eclipse-esn": {"serialMaxLen": 6,
                    "serialRegexPattern": "/^([0-9A-F]{6})$/i"}
            }}"#,
        ),
        _ => json_body(r#"{"error": 2}"#),
    }
}

async fn start_server() -> TestServer {
    TestServer::start(mock_router(), TEST_KEY)
        .await
        .expect("failed to start test server")
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn login_returns_license_metadata() {
    let server = start_server().await;

    let license = server.client.login().await.unwrap();
    assert_eq!(license.user_name, "Test Garage");
    assert_eq!(license.license_type, LicenseType::Personal);
    assert_eq!(license.expiration_date.to_string(), "2027-01-31");
    assert!(license.active);
}

#[tokio::test]
async fn rejected_key_surfaces_invalid_license() {
    let server = start_server().await;
    let client = RadioCodeClient::with_config(
        &server.base_url(),
        "wrong-key",
        Duration::from_secs(5),
        Duration::from_secs(2),
    )
    .unwrap();

    let err = client.login().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidLicense);
    // The service payload travels with the error
    assert_eq!(err.payload().unwrap()["error"], 100);
}

#[tokio::test]
async fn missing_key_fails_before_any_network_access() {
    // Nothing listens on this address; a network attempt would surface as
    // a connection error, not an invalid license.
    let client = RadioCodeClient::with_config(
        "http://127.0.0.1:1",
        "",
        Duration::from_millis(200),
        Duration::from_millis(200),
    )
    .unwrap();

    let err = client.login().await.unwrap_err();
    assert!(matches!(err, RadioCodeError::MissingLicense));
    assert_eq!(err.code(), ErrorCode::InvalidLicense);

    let err = client.calc("ford-m-series", "123456", "").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidLicense);

    let err = client.list().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidLicense);
}

// =============================================================================
// Calc
// =============================================================================

#[tokio::test]
async fn calc_returns_the_unlock_code() {
    let server = start_server().await;

    let code = server
        .client
        .calc("ford-m-series", "123456", "")
        .await
        .unwrap();
    assert_eq!(code, "4573");
}

#[tokio::test]
async fn calc_accepts_a_catalog_model() {
    let server = start_server().await;

    let model = &catalog().ford_m_series;
    let code = server.client.calc(model, "123456", "").await.unwrap();
    assert_eq!(code, "4573");
}

#[tokio::test]
async fn calc_transmits_extra_data() {
    let server = start_server().await;

    let code = server
        .client
        .calc("test-extra", "123456", "ABCD")
        .await
        .unwrap();
    assert_eq!(code, "9000");

    let err = server
        .client
        .calc("test-extra", "123456", "1234")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidExtraPattern);
}

#[tokio::test]
async fn calc_surfaces_server_side_validation() {
    let server = start_server().await;

    // The client does not validate locally; the service decides.
    let err = server
        .client
        .calc("ford-m-series", "1", "")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidSerialLength);

    let err = server
        .client
        .calc("no-such-model", "123456", "")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidModel);
}

#[tokio::test]
async fn undocumented_error_codes_are_passed_through() {
    let server = start_server().await;

    let err = server
        .client
        .calc("future-model", "123456", "")
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Unknown(217));
    assert_eq!(err.payload().unwrap()["error"], 217);
}

// =============================================================================
// Info
// =============================================================================

#[tokio::test]
async fn info_reconstructs_the_model() {
    let server = start_server().await;

    let model = server.client.info("ford-m-series").await.unwrap();
    assert_eq!(model.name(), "ford-m-series");
    assert_eq!(model.serial_max_len(), 6);
    assert_eq!(model.extra_max_len(), 0);
    // Both dialect entries survive the round trip
    assert_eq!(model.serial_patterns().len(), 2);
    assert_eq!(model.serial_pattern().unwrap().to_wire(), "/^([0-9]{6})$/");

    // The reconstructed model validates like a built-in one
    assert_eq!(model.validate("123456", None), ErrorCode::Success);
    assert_eq!(model.validate("12345A", None), ErrorCode::InvalidSerialPattern);
}

#[tokio::test]
async fn info_carries_extra_rules() {
    let server = start_server().await;

    let model = server.client.info("test-extra").await.unwrap();
    assert_eq!(model.extra_max_len(), 4);
    assert_eq!(model.extra_pattern().unwrap().to_wire(), "/^([A-Z]{4})$/i");
    assert_eq!(model.validate("123456", Some("abcd")), ErrorCode::Success);
    assert_eq!(
        model.validate("123456", Some("12cd")),
        ErrorCode::InvalidExtraPattern
    );
}

#[tokio::test]
async fn info_rejects_unknown_models() {
    let server = start_server().await;

    let err = server.client.info("no-such-model").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidModel);
}

// =============================================================================
// List
// =============================================================================

#[tokio::test]
async fn list_preserves_service_order() {
    let server = start_server().await;

    let models = server.client.list().await.unwrap();
    let names: Vec<&str> = models.iter().map(|m| m.name()).collect();
    assert_eq!(names, vec!["renault-dacia", "ford-m-series", "eclipse-esn"]);
}

#[tokio::test]
async fn list_models_mirror_the_payload() {
    let server = start_server().await;

    let models = server.client.list().await.unwrap();
    let renault = &models[0];
    assert_eq!(renault.serial_max_len(), 4);
    assert_eq!(
        renault.serial_pattern().unwrap().to_wire(),
        "/^([A-Z]{1}[0-9]{3})$/i"
    );
    assert_eq!(renault.validate("Z999", None), ErrorCode::Success);
}

// =============================================================================
// Transport failures
// =============================================================================

#[tokio::test]
async fn connection_refused_yields_connection_error() {
    let client = RadioCodeClient::with_config(
        "http://127.0.0.1:9",
        TEST_KEY,
        Duration::from_millis(500),
        Duration::from_millis(500),
    )
    .unwrap();

    let err = client.login().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConnectionError);
    assert!(matches!(err, RadioCodeError::Connection(_)));
}

#[tokio::test]
async fn non_json_response_yields_connection_error() {
    let router = Router::new().route("/", post(|| async { "service is down" }));
    let server = TestServer::start(router, TEST_KEY).await.unwrap();

    let err = server.client.login().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConnectionError);
}

#[tokio::test]
async fn out_of_range_error_code_yields_connection_error() {
    // 2^33 does not fit an i32 wire code; must not be truncated into a
    // bogus Unknown value.
    let router = Router::new().route(
        "/",
        post(|| async { ([(header::CONTENT_TYPE, "application/json")], r#"{"error": 8589934592}"#) }),
    );
    let server = TestServer::start(router, TEST_KEY).await.unwrap();

    let err = server.client.login().await.unwrap_err();
    assert!(matches!(err, RadioCodeError::MalformedResponse(_)));
    assert_eq!(err.code(), ErrorCode::ConnectionError);
}

#[tokio::test]
async fn missing_error_field_yields_connection_error() {
    let router = Router::new().route(
        "/",
        post(|| async { ([(header::CONTENT_TYPE, "application/json")], r#"{"code": "4573"}"#) }),
    );
    let server = TestServer::start(router, TEST_KEY).await.unwrap();

    let err = server.client.login().await.unwrap_err();
    assert!(matches!(err, RadioCodeError::MalformedResponse(_)));
    assert_eq!(err.code(), ErrorCode::ConnectionError);
}
