//! Bed listing and status commands.

use console::style;

use sq_api::models::ApiObject;
use sq_api::{Bed, FamilyStatus, Side, SideStatus, SleepIqClient};
use sq_core::error::SqResult;

use crate::OutputFormat;

/// List beds, optionally merged with live side status.
pub async fn list(client: &SleepIqClient, with_status: bool, format: OutputFormat) -> SqResult<()> {
    let beds = if with_status {
        client.beds_with_sleeper_status().await?
    } else {
        client.list_beds().await?
    };

    match format {
        OutputFormat::Json => super::print_json(&beds)?,
        OutputFormat::Text => {
            if beds.is_empty() {
                println!("  {}", style("No beds on this account.").dim());
                return Ok(());
            }
            if with_status {
                print_bed_status(&beds);
            } else {
                print_beds(&beds);
            }
        }
    }

    Ok(())
}

/// Show the family status of every bed.
pub async fn family_status(client: &SleepIqClient, format: OutputFormat) -> SqResult<()> {
    let statuses = client.bed_family_status().await?;

    match format {
        OutputFormat::Json => super::print_json(&statuses)?,
        OutputFormat::Text => {
            let mut table = super::styled_table();
            table.set_header(vec!["Bed ID", "Side", "In Bed", "Sleep Number"]);
            for status in &statuses {
                for side in Side::BOTH {
                    table.add_row(status_row(status, side));
                }
            }
            println!("{table}");
        }
    }

    Ok(())
}

fn print_beds(beds: &[Bed]) {
    let mut table = super::styled_table();
    table.set_header(vec!["#", "Bed ID", "Name", "Model", "Left Sleeper", "Right Sleeper"]);
    for (index, bed) in beds.iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            bed.bed_id.clone(),
            bed.name().unwrap_or("-").to_string(),
            super::cell(bed.attr("model").ok()),
            bed.sleeper_left_id.clone(),
            bed.sleeper_right_id.clone(),
        ]);
    }
    println!("{table}");
}

fn print_bed_status(beds: &[Bed]) {
    for (index, bed) in beds.iter().enumerate() {
        println!(
            "{} {}",
            style(format!("[{index}]")).bold().dim(),
            style(bed.name().unwrap_or(&bed.bed_id)).bold().underlined()
        );
        for side in Side::BOTH {
            if let Some(status) = bed.side(side) {
                let sleeper = status
                    .sleeper()
                    .and_then(|s| s.first_name())
                    .unwrap_or("-");
                println!(
                    "  {:<6} {:<12} {:<10} sleep number {}",
                    side.to_string(),
                    sleeper,
                    in_bed_label(status),
                    super::cell(status.attr("sleep_number").ok())
                );
            }
        }
    }
}

fn status_row(status: &FamilyStatus, side: Side) -> Vec<String> {
    let side_status = status.side(side);
    vec![
        status.bed_id.clone(),
        side.to_string(),
        in_bed_label(side_status),
        super::cell(side_status.attr("sleep_number").ok()),
    ]
}

fn in_bed_label(status: &SideStatus) -> String {
    match status.is_in_bed() {
        Ok(true) => style("in bed").green().to_string(),
        Ok(false) => style("out").dim().to_string(),
        Err(_) => "-".to_string(),
    }
}
