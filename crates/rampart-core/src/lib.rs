//! rampart-core - Validated types and request models for the rampart client.
//!
//! This crate holds everything the client library needs that does no I/O:
//! the uniform [`ApiResponse`] envelope, authentication credentials, and
//! per-operation request parameter structs that validate their fields at
//! construction time.

pub mod credentials;
pub mod envelope;
pub mod error;
pub mod params;
pub mod types;

pub use credentials::AuthMethod;
pub use envelope::ApiResponse;
pub use error::{Error, InvalidInputError};
pub use types::{ObjectName, Protocol, RuleAction, ServerUrl, TrackType};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
