//! Client configuration.

use std::time::Duration;

use rampart_core::{AuthMethod, ServerUrl};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
const DEFAULT_RETRY_ATTEMPTS: u32 = 3;
const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Configuration for a management API client.
///
/// Constructed once and owned by the [`Client`](crate::Client); there is no
/// ambient global configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Management server base URL.
    pub server: ServerUrl,
    /// Long-lived credentials used for login and re-authentication.
    pub auth: AuthMethod,
    /// Per-request timeout passed to the transport layer.
    pub timeout: Duration,
    /// Retry budget for transient failures (total tries = attempts + 1).
    pub retry_attempts: u32,
    /// Base delay for exponential backoff between retries.
    pub retry_delay: Duration,
    /// Whether to verify the server's TLS certificate.
    pub tls_verify: bool,
}

impl Config {
    /// Create a configuration with default timeout (30s), retry budget (3)
    /// and backoff base delay (1s).
    pub fn new(server: ServerUrl, auth: AuthMethod) -> Self {
        Self {
            server,
            auth,
            timeout: DEFAULT_TIMEOUT,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            tls_verify: true,
        }
    }

    /// Set the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the retry budget for transient failures.
    pub fn with_retry_attempts(mut self, attempts: u32) -> Self {
        self.retry_attempts = attempts;
        self
    }

    /// Set the base delay for exponential backoff.
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    /// Disable TLS certificate verification (self-signed appliances).
    pub fn with_tls_verify(mut self, verify: bool) -> Self {
        self.tls_verify = verify;
        self
    }
}
