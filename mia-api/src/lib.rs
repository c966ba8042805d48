//! # MIA API
//!
//! Request validation and dispatch for the Victoriabank MIA QR-payment API.
//!
//! ## Architecture
//!
//! - `api/` - The dispatcher: one method per bank operation
//! - `validate/` - Pure checks run before any request is sent
//!
//! The dispatcher is generic over `T: Transport`, allowing the HTTP
//! transport to be swapped for an in-memory one in tests.
//!
//! ## Example
//! ```no_run
//! use mia_api::MiaApiRequest;
//! use serde_json::json;
//!
//! # async fn run() -> Result<(), mia_types::MiaError> {
//! let api = MiaApiRequest::create(Some(mia_types::TEST_BASE_URL));
//! let status = api.qr_status("d3a1c9c4-3f0e-4c8e-9b1a-2f7e8b6a0c11", None, "access-token").await?;
//! println!("{status}");
//!
//! let data = json!({"qrHeaderUUID": "d3a1c9c4-3f0e-4c8e-9b1a-2f7e8b6a0c11"});
//! api.test_pay(data.as_object(), "access-token").await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod validate;


pub use api::{MiaApi, MiaApiRequest};
pub use mia_client::{ClientConfig, HttpTransport};
pub use mia_types::{MiaError, Params, Payload};
