//! Threat exception parameters.

use serde::Serialize;

use crate::error::{Error, InvalidInputError};
use crate::types::ObjectName;

/// Parameters for creating a threat exception under a threat rule.
#[derive(Debug, Clone, Serialize)]
pub struct ThreatExceptionParams {
    name: ObjectName,
    layer: String,
    rule: String,
    #[serde(rename = "exception-type")]
    exception_type: String,
    target: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
}

impl ThreatExceptionParams {
    /// Create threat exception parameters, validating required fields.
    pub fn new(
        name: impl Into<String>,
        layer: impl Into<String>,
        rule: impl Into<String>,
        exception_type: impl Into<String>,
        target: impl Into<String>,
    ) -> Result<Self, Error> {
        let name = ObjectName::new(name)?;
        let layer = layer.into();
        let rule = rule.into();
        let exception_type = exception_type.into();
        let target = target.into();

        for (field, value) in [
            ("layer", &layer),
            ("rule", &rule),
            ("exception-type", &exception_type),
            ("target", &target),
        ] {
            if value.is_empty() {
                return Err(InvalidInputError::Other {
                    message: format!("threat exception {} must not be empty", field),
                }
                .into());
            }
        }

        Ok(Self {
            name,
            layer,
            rule,
            exception_type,
            target,
            comments: None,
        })
    }

    /// Attach a comment to the exception.
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Returns the exception name.
    pub fn name(&self) -> &ObjectName {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_expected_body() {
        let params = ThreatExceptionParams::new(
            "allow-scanner",
            "Standard Threat Prevention",
            "scanner-rule",
            "global",
            "gw-01",
        )
        .unwrap();
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["name"], "allow-scanner");
        assert_eq!(body["exception-type"], "global");
        assert_eq!(body["target"], "gw-01");
    }

    #[test]
    fn rejects_empty_fields() {
        assert!(ThreatExceptionParams::new("x", "", "r", "global", "gw").is_err());
        assert!(ThreatExceptionParams::new("x", "layer", "r", "global", "").is_err());
    }
}
