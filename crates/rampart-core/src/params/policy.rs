//! Policy installation parameters.

use serde::Serialize;

use crate::error::{Error, InvalidInputError};

/// Parameters for installing a policy package on gateways.
#[derive(Debug, Clone, Serialize)]
pub struct InstallPolicyParams {
    #[serde(rename = "policy-package")]
    policy_package: String,
    targets: Vec<String>,
    access: bool,
    #[serde(rename = "threat-prevention")]
    threat_prevention: bool,
}

impl InstallPolicyParams {
    /// Create install parameters for a policy package and target gateways.
    ///
    /// Access policy installation is enabled by default; threat prevention
    /// is opt-in via [`with_threat_prevention`](Self::with_threat_prevention).
    pub fn new(policy_package: impl Into<String>, targets: Vec<String>) -> Result<Self, Error> {
        let policy_package = policy_package.into();

        if policy_package.is_empty() {
            return Err(InvalidInputError::Other {
                message: "policy package name must not be empty".to_string(),
            }
            .into());
        }

        if targets.is_empty() {
            return Err(InvalidInputError::Other {
                message: "install targets must not be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            policy_package,
            targets,
            access: true,
            threat_prevention: false,
        })
    }

    /// Also install the threat prevention policy.
    pub fn with_threat_prevention(mut self, enabled: bool) -> Self {
        self.threat_prevention = enabled;
        self
    }

    /// Returns the target gateways.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_expected_body() {
        let params = InstallPolicyParams::new("Standard", vec!["gw-01".into()])
            .unwrap()
            .with_threat_prevention(true);
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["policy-package"], "Standard");
        assert_eq!(body["targets"][0], "gw-01");
        assert_eq!(body["access"], true);
        assert_eq!(body["threat-prevention"], true);
    }

    #[test]
    fn rejects_empty_targets() {
        assert!(InstallPolicyParams::new("Standard", vec![]).is_err());
        assert!(InstallPolicyParams::new("", vec!["gw-01".into()]).is_err());
    }
}
