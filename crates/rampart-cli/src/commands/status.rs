//! Status command implementation.

use anyhow::Result;

use crate::cli::ConnectArgs;
use crate::output;

pub async fn run(connect: &ConnectArgs) -> Result<()> {
    let client = connect.client()?;

    if !client.login().await {
        anyhow::bail!("Login failed; check the server address and credentials");
    }

    let response = client.session_status().await;
    client.logout().await;

    output::render(response)
}
