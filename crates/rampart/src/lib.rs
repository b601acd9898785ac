//! rampart - Async client for a security-appliance management REST API.
//!
//! The client owns a single authenticated session. Every domain operation
//! ensures the session is still valid (re-authenticating if it expired),
//! issues the request, and retries transient failures with exponential
//! backoff. All outcomes are reported through the uniform [`ApiResponse`]
//! envelope; expected failures never surface as errors.
//!
//! # Example
//!
//! ```no_run
//! use rampart::{AuthMethod, Client, Config, HostParams, ServerUrl};
//!
//! # async fn example() -> Result<(), rampart::Error> {
//! let server = ServerUrl::new("mgmt.example.com")?;
//! let config = Config::new(server, AuthMethod::api_key("my-api-key", None));
//! let client = Client::new(config)?;
//!
//! let host = HostParams::new("web-01", "10.0.0.5")?;
//! let response = client.create_host(&host).await;
//!
//! if response.success {
//!     println!("created: {:?}", response.data);
//! } else {
//!     eprintln!("failed: {}", response.message.unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
mod executor;
mod retry;
mod session;

pub use client::Client;
pub use config::Config;

// Re-export the core vocabulary so callers only need this crate
pub use rampart_core::params::{
    AccessRuleParams, GroupParams, HostParams, InstallPolicyParams, LogQueryParams,
    NetworkParams, ServiceParams, ThreatExceptionParams,
};
pub use rampart_core::{
    ApiResponse, AuthMethod, Error, ObjectName, Protocol, RuleAction, ServerUrl, TrackType,
};

/// HTTP method type accepted by [`Client::call_api`].
pub use reqwest::Method;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
