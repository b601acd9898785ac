//! CLI argument definitions.

use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use rampart::{AuthMethod, Client, Config, ServerUrl};

use crate::commands::logs::LogsArgs;
use crate::commands::objects::ObjectCommand;
use crate::commands::policy::PolicyCommand;
use crate::commands::rules::RuleCommand;
use crate::commands::threat::ThreatCommand;

/// Management-API CLI.
#[derive(Parser, Debug)]
#[command(name = "rampart")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub connect: ConnectArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify credentials by logging in
    Login,

    /// Show the session the server would grant
    Status,

    /// Manage network objects (hosts, networks, groups, services)
    Object(ObjectCommand),

    /// Manage access rules
    Rule(RuleCommand),

    /// Manage threat prevention exceptions
    Threat(ThreatCommand),

    /// Publish, discard and install policy
    Policy(PolicyCommand),

    /// Query traffic logs
    Logs(LogsArgs),
}

/// Connection and credential settings, shared by every command.
#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Management server host or base URL
    #[arg(long, env = "RAMPART_SERVER", global = true)]
    pub server: Option<String>,

    /// API key for key-based login
    #[arg(long, env = "RAMPART_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Cloud infrastructure token sent on login (hosted tenants)
    #[arg(long, env = "RAMPART_INFRA_TOKEN", global = true, hide_env_values = true)]
    pub infra_token: Option<String>,

    /// Username for password-based login
    #[arg(long, env = "RAMPART_USERNAME", global = true)]
    pub username: Option<String>,

    /// Password for password-based login
    #[arg(long, env = "RAMPART_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Management domain for password-based login
    #[arg(long, env = "RAMPART_DOMAIN", global = true)]
    pub domain: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30, global = true)]
    pub timeout: u64,

    /// Retry budget for transient failures
    #[arg(long, default_value_t = 3, global = true)]
    pub retry_attempts: u32,

    /// Base retry delay in seconds
    #[arg(long, default_value_t = 1, global = true)]
    pub retry_delay: u64,

    /// Skip TLS certificate verification (self-signed appliances)
    #[arg(long, global = true)]
    pub insecure: bool,
}

impl ConnectArgs {
    /// Build the client configuration from flags and environment.
    pub fn to_config(&self) -> Result<Config> {
        let server = self
            .server
            .as_deref()
            .context("--server (or RAMPART_SERVER) is required")?;
        let server = ServerUrl::new(server).context("Invalid server URL")?;

        let auth = if let Some(api_key) = &self.api_key {
            AuthMethod::api_key(api_key, self.infra_token.clone())
        } else if let (Some(username), Some(password)) = (&self.username, &self.password) {
            AuthMethod::password(username, password, self.domain.clone())
        } else {
            anyhow::bail!(
                "either --api-key or --username/--password must be provided \
                 (or the matching RAMPART_* environment variables)"
            );
        };

        Ok(Config::new(server, auth)
            .with_timeout(Duration::from_secs(self.timeout))
            .with_retry_attempts(self.retry_attempts)
            .with_retry_delay(Duration::from_secs(self.retry_delay))
            .with_tls_verify(!self.insecure))
    }

    /// Build a ready-to-use client.
    pub fn client(&self) -> Result<Client> {
        Ok(Client::new(self.to_config()?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_args() -> ConnectArgs {
        ConnectArgs {
            server: Some("mgmt.example.com".into()),
            api_key: None,
            infra_token: None,
            username: None,
            password: None,
            domain: None,
            timeout: 30,
            retry_attempts: 3,
            retry_delay: 1,
            insecure: false,
        }
    }

    #[test]
    fn api_key_selects_key_auth() {
        let mut args = base_args();
        args.api_key = Some("key".into());
        let config = args.to_config().unwrap();
        assert!(matches!(config.auth, AuthMethod::ApiKey { .. }));
    }

    #[test]
    fn username_password_selects_password_auth() {
        let mut args = base_args();
        args.username = Some("admin".into());
        args.password = Some("pw".into());
        let config = args.to_config().unwrap();
        assert!(matches!(config.auth, AuthMethod::Password { .. }));
    }

    #[test]
    fn api_key_takes_precedence_over_password() {
        let mut args = base_args();
        args.api_key = Some("key".into());
        args.username = Some("admin".into());
        args.password = Some("pw".into());
        let config = args.to_config().unwrap();
        assert!(matches!(config.auth, AuthMethod::ApiKey { .. }));
    }

    #[test]
    fn missing_credentials_is_an_error() {
        assert!(base_args().to_config().is_err());
    }

    #[test]
    fn missing_server_is_an_error() {
        let mut args = base_args();
        args.server = None;
        args.api_key = Some("key".into());
        assert!(args.to_config().is_err());
    }
}
