//! Log query parameters.

use serde::Serialize;
use std::net::IpAddr;

use crate::error::{Error, InvalidInputError};

const DEFAULT_LIMIT: u32 = 100;

/// Parameters for querying traffic logs.
///
/// The query string uses the management server's own log filter syntax and
/// is passed through opaquely; the optional structured filters are
/// validated here.
#[derive(Debug, Clone, Serialize)]
pub struct LogQueryParams {
    query: String,
    limit: u32,
    offset: u32,
    #[serde(rename = "time-range", skip_serializing_if = "Option::is_none")]
    time_range: Option<String>,
    #[serde(rename = "source-ip", skip_serializing_if = "Option::is_none")]
    source_ip: Option<IpAddr>,
    #[serde(rename = "destination-ip", skip_serializing_if = "Option::is_none")]
    destination_ip: Option<IpAddr>,
    #[serde(skip_serializing_if = "Option::is_none")]
    service: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<String>,
}

impl LogQueryParams {
    /// Create a log query with default limit (100) and offset (0).
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            limit: DEFAULT_LIMIT,
            offset: 0,
            time_range: None,
            source_ip: None,
            destination_ip: None,
            service: None,
            action: None,
        }
    }

    /// Set the maximum number of log entries to return.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Set the pagination offset.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = offset;
        self
    }

    /// Restrict the query to a time range (e.g. "last-24-hours").
    pub fn with_time_range(mut self, time_range: impl Into<String>) -> Self {
        self.time_range = Some(time_range.into());
        self
    }

    /// Filter by source IP address.
    pub fn with_source_ip(mut self, ip: &str) -> Result<Self, Error> {
        self.source_ip = Some(parse_ip(ip)?);
        Ok(self)
    }

    /// Filter by destination IP address.
    pub fn with_destination_ip(mut self, ip: &str) -> Result<Self, Error> {
        self.destination_ip = Some(parse_ip(ip)?);
        Ok(self)
    }

    /// Filter by service name.
    pub fn with_service(mut self, service: impl Into<String>) -> Self {
        self.service = Some(service.into());
        self
    }

    /// Filter by rule action (e.g. "drop").
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }
}

fn parse_ip(ip: &str) -> Result<IpAddr, Error> {
    ip.parse::<IpAddr>()
        .map_err(|_| {
            InvalidInputError::IpAddress {
                value: ip.to_string(),
            }
            .into()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_applied() {
        let body = serde_json::to_value(LogQueryParams::new("blade:Firewall")).unwrap();
        assert_eq!(body["query"], "blade:Firewall");
        assert_eq!(body["limit"], 100);
        assert_eq!(body["offset"], 0);
        assert!(body.get("time-range").is_none());
    }

    #[test]
    fn filters_use_kebab_keys() {
        let params = LogQueryParams::new("")
            .with_time_range("last-hour")
            .with_source_ip("10.0.0.1")
            .unwrap();
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["time-range"], "last-hour");
        assert_eq!(body["source-ip"], "10.0.0.1");
    }

    #[test]
    fn rejects_bad_filter_ip() {
        assert!(LogQueryParams::new("").with_source_ip("10.0.0").is_err());
    }
}
