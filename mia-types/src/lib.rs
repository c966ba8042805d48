//! # MIA Types
//!
//! Shared vocabulary for the Victoriabank MIA QR-payment client.
//! This crate has ZERO external IO dependencies - only data structures,
//! the endpoint catalogue, and trait definitions.
//!
//! ## Architecture
//!
//! - `endpoint/` - Named endpoints of the MIA REST contract
//! - `operation/` - Per-operation descriptors (verb, endpoint, required fields)
//! - `request/` - Request and raw response shapes passed across the transport port
//! - `ports/` - Trait definitions that transports must implement
//! - `error/` - The domain error and its transport-level cause

pub mod endpoint;
pub mod error;
pub mod operation;
pub mod ports;
pub mod request;

// Re-export commonly used types
pub use endpoint::{DEFAULT_BASE_URL, DEFAULT_DEMO_PAY_URL, Endpoint, EndpointError, TEST_BASE_URL};
pub use error::{MiaError, TransportError};
pub use operation::{HttpMethod, Operation};
pub use ports::Transport;
pub use request::{ApiRequest, Params, Payload, RawResponse};
