//! Threat prevention commands.

use anyhow::Result;
use clap::{Args, Subcommand};

use rampart::ThreatExceptionParams;

use crate::cli::ConnectArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct ThreatCommand {
    #[command(subcommand)]
    pub command: ThreatSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ThreatSubcommand {
    /// Create a threat exception on a rule
    AddException(AddExceptionArgs),

    /// Delete a threat exception by UID
    DeleteException(DeleteExceptionArgs),
}

#[derive(Args, Debug)]
pub struct AddExceptionArgs {
    /// Exception name
    #[arg(long)]
    pub name: String,

    /// Threat layer the rule belongs to
    #[arg(long)]
    pub layer: String,

    /// Name or UID of the rule the exception applies to
    #[arg(long)]
    pub rule: String,

    /// Exception type (e.g. protection, source, destination)
    #[arg(long)]
    pub exception_type: String,

    /// Protection or object the exception targets
    #[arg(long)]
    pub target: String,

    /// Comment
    #[arg(long)]
    pub comments: Option<String>,
}

#[derive(Args, Debug)]
pub struct DeleteExceptionArgs {
    /// Exception UID
    #[arg(long)]
    pub uid: String,
}

pub async fn handle(connect: &ConnectArgs, cmd: ThreatCommand) -> Result<()> {
    let client = connect.client()?;

    let response = match cmd.command {
        ThreatSubcommand::AddException(args) => {
            let mut exception = ThreatExceptionParams::new(
                &args.name,
                &args.layer,
                &args.rule,
                &args.exception_type,
                &args.target,
            )?;
            if let Some(comments) = args.comments {
                exception = exception.with_comments(comments);
            }
            client.create_threat_exception(&exception).await
        }
        ThreatSubcommand::DeleteException(args) => {
            client.delete_threat_exception(&args.uid).await
        }
    };

    client.logout().await;
    output::render(response)
}
