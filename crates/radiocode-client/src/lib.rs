//! Radio code calculator client
//!
//! Typed HTTP client for the remote radio unlock code calculation service.
//! Input rules live in [`radiocode_core`] and work offline; this crate adds
//! the four service commands (`login`, `calc`, `info`, `list`) over a
//! single form-encoded POST endpoint with a uniform error envelope.
//!
//! # Example
//!
//! ```rust,no_run
//! use radiocode_client::{RadioCodeClient, catalog, ErrorCode};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = RadioCodeClient::new("your-activation-key")?;
//!
//!     // Validate offline before spending a round trip
//!     let model = &catalog().ford_m_series;
//!     assert_eq!(model.validate("123456", None), ErrorCode::Success);
//!
//!     // Calculate the unlock code
//!     let code = client.calc(model, "123456", "").await?;
//!     println!("unlock code: {}", code);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Error handling
//!
//! Every failure is a [`RadioCodeError`] resolving to exactly one
//! [`ErrorCode`]: transport problems become `ConnectionError`, a missing
//! activation key becomes `InvalidLicense` before any network access, and
//! business errors carry the service payload verbatim.
//!
//! # Testing
//!
//! The [`testing`] module starts an in-process axum mock of the service:
//!
//! ```rust,ignore
//! use radiocode_client::testing::TestServer;
//!
//! let server = TestServer::start(mock_router(), "test-key").await?;
//! let license = server.client.login().await?;
//! ```

mod client;
mod error;
mod request;
pub mod testing;
mod types;

pub use client::{RadioCodeClient, DEFAULT_API_URL};
pub use error::{RadioCodeError, Result};
pub use request::{AsModelName, Command, ParamKey, RequestParams};
pub use types::{CalcResponse, LicenseInfo, LicenseType, ListResponse, LoginResponse, ModelInfoResponse};

// Re-export core types for convenience
pub use radiocode_core::{catalog, ErrorCode, PatternDialect, RadioModel, RadioModels};
