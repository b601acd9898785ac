//! Policy lifecycle commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use rampart::InstallPolicyParams;

use crate::cli::ConnectArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct PolicyCommand {
    #[command(subcommand)]
    pub command: PolicySubcommand,
}

#[derive(Subcommand, Debug)]
pub enum PolicySubcommand {
    /// Publish pending session changes
    Publish(PublishArgs),

    /// Discard pending session changes
    Discard,

    /// Install a policy package on gateways
    Install(InstallArgs),

    /// List security gateways and servers
    Gateways,
}

#[derive(Args, Debug)]
pub struct PublishArgs {
    /// Comma-separated publish targets; omit to publish everywhere
    #[arg(long, value_delimiter = ',')]
    pub targets: Vec<String>,
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Policy package name
    #[arg(long)]
    pub package: String,

    /// Comma-separated gateway targets
    #[arg(long, value_delimiter = ',')]
    pub targets: Vec<String>,

    /// Also install the threat prevention policy
    #[arg(long)]
    pub threat_prevention: bool,
}

pub async fn handle(connect: &ConnectArgs, cmd: PolicyCommand) -> Result<()> {
    let client = connect.client()?;

    let response = match cmd.command {
        PolicySubcommand::Publish(args) => {
            let targets = if args.targets.is_empty() {
                None
            } else {
                Some(args.targets.as_slice())
            };
            client.publish(targets).await
        }
        PolicySubcommand::Discard => client.discard().await,
        PolicySubcommand::Install(args) => {
            let params = InstallPolicyParams::new(&args.package, args.targets)?
                .with_threat_prevention(args.threat_prevention);
            client.install_policy(&params).await
        }
        PolicySubcommand::Gateways => client.show_gateways().await,
    };

    client.logout().await;
    output::render(response)
}
