//! Command implementations.

mod login;
pub mod logs;
pub mod objects;
pub mod policy;
pub mod rules;
mod status;
pub mod threat;

use anyhow::Result;

use crate::cli::{Commands, ConnectArgs};

pub async fn handle(connect: &ConnectArgs, command: Commands) -> Result<()> {
    match command {
        Commands::Login => login::run(connect).await,
        Commands::Status => status::run(connect).await,
        Commands::Object(cmd) => objects::handle(connect, cmd).await,
        Commands::Rule(cmd) => rules::handle(connect, cmd).await,
        Commands::Threat(cmd) => threat::handle(connect, cmd).await,
        Commands::Policy(cmd) => policy::handle(connect, cmd).await,
        Commands::Logs(args) => logs::run(connect, args).await,
    }
}
