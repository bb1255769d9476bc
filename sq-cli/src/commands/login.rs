//! Login command - verify the account credentials.

use console::style;

use sq_api::SleepIqClient;
use sq_core::error::{SqError, SqResult};

use crate::OutputFormat;

/// Run the login command.
pub async fn run(client: &SleepIqClient, format: OutputFormat) -> SqResult<()> {
    let login = client.session().credentials().login().to_string();
    let accepted = client.login().await?;

    match format {
        OutputFormat::Json => {
            super::print_json(&serde_json::json!({
                "login": login,
                "accepted": accepted,
            }))?;
        }
        OutputFormat::Text => {
            if accepted {
                println!("  {} Logged in as {login}.", style("OK").green().bold());
            } else {
                println!("  {} Credentials rejected for {login}.", style("FAIL").red().bold());
            }
        }
    }

    if accepted {
        Ok(())
    } else {
        Err(SqError::AuthFailed(format!("login rejected for {login}")))
    }
}
