//! Sleepers command.

use console::style;

use sq_api::models::ApiObject;
use sq_api::SleepIqClient;
use sq_core::error::SqResult;

use crate::OutputFormat;

/// Run the sleepers command.
pub async fn run(client: &SleepIqClient, format: OutputFormat) -> SqResult<()> {
    let sleepers = client.list_sleepers().await?;

    match format {
        OutputFormat::Json => super::print_json(&sleepers)?,
        OutputFormat::Text => {
            if sleepers.is_empty() {
                println!("  {}", style("No sleepers on this account.").dim());
                return Ok(());
            }

            let mut table = super::styled_table();
            table.set_header(vec!["Sleeper ID", "Name", "Bed ID", "Side"]);
            for sleeper in &sleepers {
                let side = match sleeper.attr("side").ok().and_then(|v| v.as_u64()) {
                    Some(0) => "left",
                    Some(1) => "right",
                    _ => "-",
                };
                table.add_row(vec![
                    sleeper.sleeper_id.clone(),
                    sleeper.first_name().unwrap_or("-").to_string(),
                    sleeper.bed_id.clone().unwrap_or_else(|| "-".into()),
                    side.to_string(),
                ]);
            }
            println!("{table}");
        }
    }

    Ok(())
}
