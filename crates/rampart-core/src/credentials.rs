//! Long-lived authentication credentials.

use std::fmt;

/// Credentials for one of the two supported login flows.
///
/// The two flows are mutually exclusive by construction: an `ApiKey` login
/// never carries username or password fields, and vice versa.
///
/// # Security
///
/// Secrets are never exposed in Debug output to prevent accidental logging.
#[derive(Clone)]
pub enum AuthMethod {
    /// API-key login, optionally with a cloud infrastructure token sent as
    /// an extra header.
    ApiKey {
        api_key: String,
        infra_token: Option<String>,
    },

    /// Username/password login against a management domain.
    Password {
        username: String,
        password: String,
        domain: Option<String>,
    },
}

impl AuthMethod {
    /// Create API-key credentials.
    pub fn api_key(api_key: impl Into<String>, infra_token: Option<String>) -> Self {
        Self::ApiKey {
            api_key: api_key.into(),
            infra_token,
        }
    }

    /// Create username/password credentials.
    pub fn password(
        username: impl Into<String>,
        password: impl Into<String>,
        domain: Option<String>,
    ) -> Self {
        Self::Password {
            username: username.into(),
            password: password.into(),
            domain,
        }
    }
}

// Intentionally hide secrets in Debug output
impl fmt::Debug for AuthMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey { infra_token, .. } => f
                .debug_struct("ApiKey")
                .field("api_key", &"[REDACTED]")
                .field("infra_token", &infra_token.as_ref().map(|_| "[REDACTED]"))
                .finish(),
            Self::Password {
                username, domain, ..
            } => f
                .debug_struct("Password")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .field("domain", domain)
                .finish(),
        }
    }
}
