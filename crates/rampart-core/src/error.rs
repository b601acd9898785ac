//! Error types for the rampart libraries.
//!
//! Expected network and application failures are reported through the
//! [`ApiResponse`](crate::envelope::ApiResponse) envelope, never as errors.
//! The error types here cover input validation and client construction,
//! which fail before any network call is made.

use thiserror::Error;

/// The unified error type for rampart operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation errors (invalid object name, address, port...).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Client configuration or construction errors.
    #[error("configuration error: {message}")]
    Config { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid object name format.
    #[error("invalid object name '{value}': {reason}")]
    ObjectName { value: String, reason: String },

    /// Invalid management server URL.
    #[error("invalid server URL '{value}': {reason}")]
    ServerUrl { value: String, reason: String },

    /// Invalid IPv4 address.
    #[error("invalid IPv4 address '{value}'")]
    IpAddress { value: String },

    /// Invalid subnet mask length.
    #[error("invalid mask length {value}: must be 0-32")]
    MaskLength { value: u8 },

    /// Invalid port number.
    #[error("invalid port {value}: must be 1-65535")]
    Port { value: u32 },

    /// Unknown service protocol.
    #[error("unknown protocol '{value}': expected 'tcp' or 'udp'")]
    Protocol { value: String },

    /// Unknown rule action.
    #[error("unknown rule action '{value}'")]
    RuleAction { value: String },

    /// Unknown track type.
    #[error("unknown track type '{value}'")]
    TrackType { value: String },

    /// Generic invalid input.
    #[error("invalid input: {message}")]
    Other { message: String },
}
