//! Foundation commands - outlets, presets and firmness.

use console::style;

use sq_api::{Outlet, OutletSetting, Preset, PresetSpeed, Side, SleepIqClient, SleepNumber};
use sq_core::error::SqResult;

use crate::OutputFormat;

/// Switch an outlet on or off.
pub async fn lights(
    client: &SleepIqClient,
    bed: usize,
    outlet: Outlet,
    setting: OutletSetting,
    format: OutputFormat,
) -> SqResult<()> {
    client.set_lights(bed, outlet, setting).await?;
    report(
        format,
        serde_json::json!({"bed": bed, "outlet": outlet.id(), "setting": setting.code()}),
        format!("Outlet {} on bed {bed} turned {setting}.", outlet.id()),
    )
}

/// Apply a preset position to one side.
pub async fn preset(
    client: &SleepIqClient,
    bed: usize,
    side: Side,
    preset: Preset,
    slow: bool,
    format: OutputFormat,
) -> SqResult<()> {
    let speed = if slow { PresetSpeed::Slow } else { PresetSpeed::Fast };
    client.preset(bed, preset, side, speed).await?;
    report(
        format,
        serde_json::json!({
            "bed": bed,
            "side": side.code(),
            "preset": preset.code(),
            "speed": speed.code(),
        }),
        format!("Bed {bed} {side} side moving to {preset}."),
    )
}

/// Set the sleep number of one side.
pub async fn sleep_number(
    client: &SleepIqClient,
    bed: usize,
    side: Side,
    value: SleepNumber,
    format: OutputFormat,
) -> SqResult<()> {
    client.set_sleep_number(bed, side, value).await?;
    report(
        format,
        serde_json::json!({"bed": bed, "side": side.code(), "sleep_number": value.value()}),
        format!("Bed {bed} {side} side set to sleep number {}.", value.value()),
    )
}

fn report(format: OutputFormat, json: serde_json::Value, text: String) -> SqResult<()> {
    match format {
        OutputFormat::Json => super::print_json(&json)?,
        OutputFormat::Text => println!("  {} {text}", style("OK").green().bold()),
    }
    Ok(())
}
