//! Management object name type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// A validated management object name.
///
/// Object names are 1-63 characters of ASCII letters, digits, hyphens and
/// underscores. Every named entity (rules, hosts, networks, groups,
/// services, exceptions) uses this type.
///
/// # Example
///
/// ```
/// use rampart_core::ObjectName;
///
/// let name = ObjectName::new("web-server-01").unwrap();
/// assert_eq!(name.as_str(), "web-server-01");
/// assert!(ObjectName::new("no spaces allowed").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ObjectName(String);

impl ObjectName {
    /// Create a new object name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, longer than 63 characters,
    /// or contains characters outside `[A-Za-z0-9_-]`.
    pub fn new(s: impl Into<String>) -> Result<Self, Error> {
        let s = s.into();
        Self::validate(&s)?;
        Ok(Self(s))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), Error> {
        if s.is_empty() {
            return Err(InvalidInputError::ObjectName {
                value: s.to_string(),
                reason: "must not be empty".to_string(),
            }
            .into());
        }

        if s.len() > 63 {
            return Err(InvalidInputError::ObjectName {
                value: s.to_string(),
                reason: "must be at most 63 characters".to_string(),
            }
            .into());
        }

        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(InvalidInputError::ObjectName {
                value: s.to_string(),
                reason: "only letters, digits, '-' and '_' are allowed".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ObjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ObjectName {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ObjectName {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ObjectName> for String {
    fn from(name: ObjectName) -> Self {
        name.0
    }
}
