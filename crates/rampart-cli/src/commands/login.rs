//! Login command implementation.

use anyhow::Result;
use colored::Colorize;

use crate::cli::ConnectArgs;
use crate::output;

pub async fn run(connect: &ConnectArgs) -> Result<()> {
    let client = connect.client()?;

    eprintln!("{}", "Logging in...".dimmed());

    if !client.login().await {
        anyhow::bail!("Login failed; check the server address and credentials");
    }

    let status = client.session_status().await;

    output::success("Logged in successfully");
    if let Some(data) = &status.data {
        println!();
        output::field("Server", data["server"].as_str().unwrap_or("-"));
        output::field("Domain", data["domain"].as_str().unwrap_or("-"));
        output::field(
            "Timeout",
            &format!("{}s", data["session-timeout"].as_u64().unwrap_or(0)),
        );
    }

    client.logout().await;
    Ok(())
}
