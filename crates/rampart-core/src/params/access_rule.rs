//! Access rule parameters.

use serde::Serialize;

use crate::error::{Error, InvalidInputError};
use crate::types::{ObjectName, RuleAction, TrackType};

/// Parameters for creating or modifying an access rule.
///
/// # Example
///
/// ```
/// use rampart_core::params::AccessRuleParams;
/// use rampart_core::{RuleAction, TrackType};
///
/// let rule = AccessRuleParams::new(
///     "allow-web",
///     "Network",
///     vec!["Any".into()],
///     vec!["web-server-01".into()],
///     vec!["https".into()],
///     RuleAction::Accept,
///     TrackType::Log,
/// )
/// .unwrap()
/// .with_position(1);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct AccessRuleParams {
    name: ObjectName,
    layer: String,
    source: Vec<String>,
    destination: Vec<String>,
    service: Vec<String>,
    action: RuleAction,
    track: TrackType,
    #[serde(skip_serializing_if = "Option::is_none")]
    position: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comments: Option<String>,
}

impl AccessRuleParams {
    /// Create access rule parameters, validating all required fields.
    ///
    /// Source, destination and service lists must be non-empty; use `"Any"`
    /// for a wildcard entry.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        layer: impl Into<String>,
        source: Vec<String>,
        destination: Vec<String>,
        service: Vec<String>,
        action: RuleAction,
        track: TrackType,
    ) -> Result<Self, Error> {
        let name = ObjectName::new(name)?;
        let layer = layer.into();

        if layer.is_empty() {
            return Err(InvalidInputError::Other {
                message: "rule layer must not be empty".to_string(),
            }
            .into());
        }

        for (field, list) in [
            ("source", &source),
            ("destination", &destination),
            ("service", &service),
        ] {
            if list.is_empty() {
                return Err(InvalidInputError::Other {
                    message: format!("rule {} list must not be empty", field),
                }
                .into());
            }
        }

        Ok(Self {
            name,
            layer,
            source,
            destination,
            service,
            action,
            track,
            position: None,
            comments: None,
        })
    }

    /// Set an explicit position in the rulebase.
    pub fn with_position(mut self, position: u32) -> Self {
        self.position = Some(position);
        self
    }

    /// Attach a comment to the rule.
    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = Some(comments.into());
        self
    }

    /// Returns the rule name.
    pub fn name(&self) -> &ObjectName {
        &self.name
    }

    /// Returns the target layer.
    pub fn layer(&self) -> &str {
        &self.layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_rule() -> Result<AccessRuleParams, Error> {
        AccessRuleParams::new(
            "allow-web",
            "Network",
            vec!["Any".into()],
            vec!["web-01".into()],
            vec!["https".into()],
            RuleAction::Accept,
            TrackType::Log,
        )
    }

    #[test]
    fn builds_expected_body() {
        let rule = valid_rule().unwrap().with_position(2).with_comments("ok");
        let body = serde_json::to_value(&rule).unwrap();
        assert_eq!(body["name"], "allow-web");
        assert_eq!(body["action"], "accept");
        assert_eq!(body["track"], "log");
        assert_eq!(body["position"], 2);
    }

    #[test]
    fn optional_fields_omitted_when_unset() {
        let body = serde_json::to_value(valid_rule().unwrap()).unwrap();
        assert!(body.get("position").is_none());
        assert!(body.get("comments").is_none());
    }

    #[test]
    fn rejects_empty_source_list() {
        let result = AccessRuleParams::new(
            "allow-web",
            "Network",
            vec![],
            vec!["web-01".into()],
            vec!["https".into()],
            RuleAction::Accept,
            TrackType::Log,
        );
        assert!(result.is_err());
    }

    #[test]
    fn rejects_invalid_name() {
        let result = AccessRuleParams::new(
            "bad name!",
            "Network",
            vec!["Any".into()],
            vec!["Any".into()],
            vec!["Any".into()],
            RuleAction::Drop,
            TrackType::None,
        );
        assert!(result.is_err());
    }
}
