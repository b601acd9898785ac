//! Log query command.

use anyhow::Result;
use clap::Args;

use rampart::LogQueryParams;

use crate::cli::ConnectArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct LogsArgs {
    /// Free-text log query
    #[arg(long, default_value = "")]
    pub query: String,

    /// Maximum number of records to return
    #[arg(long, default_value_t = 100)]
    pub limit: u32,

    /// Record offset for paging
    #[arg(long)]
    pub offset: Option<u32>,

    /// Time frame (e.g. last-hour, last-24-hours, last-7-days)
    #[arg(long)]
    pub time_range: Option<String>,

    /// Filter by source IP address
    #[arg(long)]
    pub source_ip: Option<String>,

    /// Filter by destination IP address
    #[arg(long)]
    pub destination_ip: Option<String>,

    /// Filter by service name or port
    #[arg(long)]
    pub service: Option<String>,

    /// Filter by rule action
    #[arg(long)]
    pub action: Option<String>,
}

impl LogsArgs {
    fn to_params(&self) -> Result<LogQueryParams> {
        let mut query = LogQueryParams::new(&self.query).with_limit(self.limit);
        if let Some(offset) = self.offset {
            query = query.with_offset(offset);
        }
        if let Some(time_range) = &self.time_range {
            query = query.with_time_range(time_range);
        }
        if let Some(ip) = &self.source_ip {
            query = query.with_source_ip(ip)?;
        }
        if let Some(ip) = &self.destination_ip {
            query = query.with_destination_ip(ip)?;
        }
        if let Some(service) = &self.service {
            query = query.with_service(service);
        }
        if let Some(action) = &self.action {
            query = query.with_action(action);
        }
        Ok(query)
    }
}

pub async fn run(connect: &ConnectArgs, args: LogsArgs) -> Result<()> {
    let query = args.to_params()?;
    let client = connect.client()?;
    let response = client.query_logs(&query).await;
    client.logout().await;
    output::render(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_source_ip_rejected() {
        let args = LogsArgs {
            query: String::new(),
            limit: 100,
            offset: None,
            time_range: None,
            source_ip: Some("not-an-ip".to_string()),
            destination_ip: None,
            service: None,
            action: None,
        };
        assert!(args.to_params().is_err());
    }
}
