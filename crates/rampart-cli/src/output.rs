//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use rampart::ApiResponse;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a response envelope: payload on success, error otherwise.
///
/// A failure envelope becomes the process error, so the exit code reflects
/// the outcome.
pub fn render(response: ApiResponse) -> Result<()> {
    if response.success {
        match response.data {
            Some(data) => json_pretty(&data),
            None => {
                success("OK");
                Ok(())
            }
        }
    } else {
        let message = response
            .message
            .unwrap_or_else(|| format!("HTTP {}", response.status_code));
        anyhow::bail!("{} (HTTP {})", message, response.status_code)
    }
}
