//! Management server URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated management server base URL.
///
/// A bare hostname is promoted to `https://`. Operation paths are joined
/// under the `/web_api` prefix unless the base URL already carries it -
/// hosted management tenants hand out base URLs that include the prefix,
/// on-premise servers do not.
///
/// # Example
///
/// ```
/// use rampart_core::ServerUrl;
///
/// let server = ServerUrl::new("mgmt.example.com").unwrap();
/// assert_eq!(server.operation_url("/add-host"),
///            "https://mgmt.example.com/web_api/add-host");
///
/// let hosted = ServerUrl::new("https://tenant.example.io/app/maas/web_api").unwrap();
/// assert_eq!(hosted.operation_url("/login"),
///            "https://tenant.example.io/app/maas/web_api/login");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ServerUrl(Url);

impl ServerUrl {
    /// Create a new server URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed, uses a scheme other
    /// than http/https, or has no host.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let with_scheme = if s.contains("://") {
            s.to_string()
        } else {
            format!("https://{}", s)
        };

        let url = Url::parse(&with_scheme).map_err(|e| InvalidInputError::ServerUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        if url.scheme() != "https" && url.scheme() != "http" {
            return Err(InvalidInputError::ServerUrl {
                value: s.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ServerUrl {
                value: s.to_string(),
                reason: "missing host".to_string(),
            }
            .into());
        }

        Ok(Self(url))
    }

    /// Returns the full URL for an operation path such as `/add-host`.
    pub fn operation_url(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        // Match /web_api only as a whole path segment; a base like
        // /web_apix still gets the prefix appended.
        if base.ends_with("/web_api") || base.contains("/web_api/") {
            format!("{}{}", base, path)
        } else {
            format!("{}/web_api{}", base, path)
        }
    }

    /// Returns the base URL as a string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the URL scheme.
    pub fn scheme(&self) -> &str {
        self.0.scheme()
    }
}

impl fmt::Display for ServerUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ServerUrl {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
