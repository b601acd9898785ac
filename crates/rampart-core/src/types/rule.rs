//! Access rule action and track types.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, InvalidInputError};

/// What an access rule does with matching traffic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleAction {
    Accept,
    Drop,
    Reject,
    Inspect,
    ApplyLayer,
}

impl RuleAction {
    /// Returns the wire representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Drop => "drop",
            Self::Reject => "reject",
            Self::Inspect => "inspect",
            Self::ApplyLayer => "apply-layer",
        }
    }
}

impl FromStr for RuleAction {
    type Err = Error;

    // "allow"/"deny"/"block" are accepted as aliases for the canonical
    // accept/drop actions.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "accept" | "allow" => Ok(Self::Accept),
            "drop" | "deny" | "block" => Ok(Self::Drop),
            "reject" => Ok(Self::Reject),
            "inspect" => Ok(Self::Inspect),
            "apply-layer" => Ok(Self::ApplyLayer),
            _ => Err(InvalidInputError::RuleAction {
                value: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How matches of an access rule are tracked.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackType {
    None,
    Log,
    Alert,
    Mail,
    Snmp,
    UserAlert,
    #[serde(rename = "user-alert-1")]
    UserAlert1,
    #[serde(rename = "user-alert-2")]
    UserAlert2,
    Popup,
}

impl TrackType {
    /// Returns the wire representation of the track type.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Log => "log",
            Self::Alert => "alert",
            Self::Mail => "mail",
            Self::Snmp => "snmp",
            Self::UserAlert => "user-alert",
            Self::UserAlert1 => "user-alert-1",
            Self::UserAlert2 => "user-alert-2",
            Self::Popup => "popup",
        }
    }
}

impl FromStr for TrackType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "log" => Ok(Self::Log),
            "alert" => Ok(Self::Alert),
            "mail" => Ok(Self::Mail),
            "snmp" => Ok(Self::Snmp),
            "user-alert" => Ok(Self::UserAlert),
            "user-alert-1" => Ok(Self::UserAlert1),
            "user-alert-2" => Ok(Self::UserAlert2),
            "popup" => Ok(Self::Popup),
            _ => Err(InvalidInputError::TrackType {
                value: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for TrackType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_parses_aliases() {
        assert_eq!("allow".parse::<RuleAction>().unwrap(), RuleAction::Accept);
        assert_eq!("DENY".parse::<RuleAction>().unwrap(), RuleAction::Drop);
        assert_eq!("block".parse::<RuleAction>().unwrap(), RuleAction::Drop);
    }

    #[test]
    fn action_rejects_unknown() {
        assert!("shred".parse::<RuleAction>().is_err());
    }

    #[test]
    fn action_serializes_kebab_case() {
        let json = serde_json::to_string(&RuleAction::ApplyLayer).unwrap();
        assert_eq!(json, "\"apply-layer\"");
    }

    #[test]
    fn track_parses_case_insensitively() {
        assert_eq!("Log".parse::<TrackType>().unwrap(), TrackType::Log);
        assert_eq!(
            "user-alert".parse::<TrackType>().unwrap(),
            TrackType::UserAlert
        );
    }

    #[test]
    fn numbered_user_alerts_round_trip() {
        assert_eq!(
            "user-alert-1".parse::<TrackType>().unwrap(),
            TrackType::UserAlert1
        );
        assert_eq!(
            "user-alert-2".parse::<TrackType>().unwrap(),
            TrackType::UserAlert2
        );
        let json = serde_json::to_string(&TrackType::UserAlert2).unwrap();
        assert_eq!(json, "\"user-alert-2\"");
    }
}
