//! Port traits (interfaces for adapters).
//!
//! The dispatcher depends on these traits, not on a concrete HTTP client.

mod transport;

pub use transport::{Transport, handle_raw_response};
