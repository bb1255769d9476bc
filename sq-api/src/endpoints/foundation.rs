//! Foundation control endpoints: outlets, presets and firmness.
//!
//! Every command addresses a bed by its position in the bed list and
//! resolves that position with a fresh `/rest/bed` fetch first.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use sq_core::constants::{paths, sleep_number};
use sq_core::error::{SqError, SqResult};

use crate::client::SleepIqClient;
use crate::models::Side;
use crate::transport::{ApiRequest, Transport};

/// One of the four switchable foundation outlets, numbered 1 to 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Outlet(u8);

impl Outlet {
    pub fn new(id: u8) -> SqResult<Self> {
        if (1..=4).contains(&id) {
            Ok(Self(id))
        } else {
            Err(SqError::InvalidArgument(format!(
                "outlet must be between 1 and 4, got {id}"
            )))
        }
    }

    pub fn id(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Outlet {
    type Error = SqError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Self::new(id)
    }
}

impl From<Outlet> for u8 {
    fn from(outlet: Outlet) -> u8 {
        outlet.0
    }
}

impl FromStr for Outlet {
    type Err = SqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .trim()
            .parse::<u8>()
            .map_err(|_| SqError::InvalidArgument(format!("invalid outlet `{s}`")))?;
        Self::new(id)
    }
}

/// Outlet power state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutletSetting {
    Off = 0,
    On = 1,
}

impl OutletSetting {
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl From<bool> for OutletSetting {
    fn from(on: bool) -> Self {
        if on {
            Self::On
        } else {
            Self::Off
        }
    }
}

impl std::fmt::Display for OutletSetting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::On => "on",
            Self::Off => "off",
        })
    }
}

impl FromStr for OutletSetting {
    type Err = SqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "on" | "1" => Ok(Self::On),
            "off" | "0" => Ok(Self::Off),
            other => Err(SqError::InvalidArgument(format!(
                "outlet setting must be on or off, got `{other}`"
            ))),
        }
    }
}

/// Named foundation positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    Favorite = 1,
    Read = 2,
    WatchTv = 3,
    Flat = 4,
    ZeroGravity = 5,
    Snore = 6,
}

impl Preset {
    pub const ALL: [Preset; 6] = [
        Preset::Favorite,
        Preset::Read,
        Preset::WatchTv,
        Preset::Flat,
        Preset::ZeroGravity,
        Preset::Snore,
    ];

    pub fn code(&self) -> u8 {
        *self as u8
    }

    pub fn from_code(code: u8) -> SqResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.code() == code)
            .ok_or_else(|| {
                SqError::InvalidArgument(format!("preset must be between 1 and 6, got {code}"))
            })
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Favorite => "favorite",
            Self::Read => "read",
            Self::WatchTv => "watch-tv",
            Self::Flat => "flat",
            Self::ZeroGravity => "zero-gravity",
            Self::Snore => "snore",
        };
        f.write_str(name)
    }
}

impl FromStr for Preset {
    type Err = SqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        if let Ok(code) = normalized.parse::<u8>() {
            return Self::from_code(code);
        }
        match normalized.as_str() {
            "favorite" | "fav" => Ok(Self::Favorite),
            "read" => Ok(Self::Read),
            "watch-tv" | "tv" => Ok(Self::WatchTv),
            "flat" => Ok(Self::Flat),
            "zero-gravity" | "zero-g" => Ok(Self::ZeroGravity),
            "snore" => Ok(Self::Snore),
            other => Err(SqError::InvalidArgument(format!("unknown preset `{other}`"))),
        }
    }
}

/// Foundation motor speed for presets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PresetSpeed {
    #[default]
    Fast = 0,
    Slow = 1,
}

impl PresetSpeed {
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

/// Firmness setting: 0 to 100 in steps of 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SleepNumber(u8);

impl SleepNumber {
    pub fn new(value: u8) -> SqResult<Self> {
        if value > sleep_number::MAX || value % sleep_number::STEP != 0 {
            return Err(SqError::InvalidArgument(format!(
                "sleep number must be {}..={} in steps of {}, got {value}",
                sleep_number::MIN,
                sleep_number::MAX,
                sleep_number::STEP
            )));
        }
        Ok(Self(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for SleepNumber {
    type Error = SqError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SleepNumber> for u8 {
    fn from(n: SleepNumber) -> u8 {
        n.0
    }
}

impl FromStr for SleepNumber {
    type Err = SqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<u8>()
            .map_err(|_| SqError::InvalidArgument(format!("invalid sleep number `{s}`")))?;
        Self::new(value)
    }
}

impl<T: Transport> SleepIqClient<T> {
    /// Switch a foundation outlet on or off.
    pub async fn set_lights(
        &self,
        bed_index: usize,
        outlet: Outlet,
        setting: OutletSetting,
    ) -> SqResult<()> {
        let bed_id = self.bed_id_at(bed_index).await?;
        let body = serde_json::json!({
            "outletId": outlet.id(),
            "setting": setting.code(),
        });
        self.execute(&ApiRequest::put(paths::outlet(&bed_id), body))
            .await?;
        info!("bed {bed_id}: outlet {} turned {setting}", outlet.id());
        Ok(())
    }

    /// Move one side of the foundation to a preset position.
    pub async fn preset(
        &self,
        bed_index: usize,
        preset: Preset,
        side: Side,
        speed: PresetSpeed,
    ) -> SqResult<()> {
        let bed_id = self.bed_id_at(bed_index).await?;
        let body = serde_json::json!({
            "preset": preset.code(),
            "side": side.code(),
            "speed": speed.code(),
        });
        self.execute(&ApiRequest::put(paths::preset(&bed_id), body))
            .await?;
        info!("bed {bed_id}: {side} side moved to {preset}");
        Ok(())
    }

    /// Set the firmness of one side.
    ///
    /// `side` is sent both in the body and as a query parameter of this
    /// request only.
    pub async fn set_sleep_number(
        &self,
        bed_index: usize,
        side: Side,
        setting: SleepNumber,
    ) -> SqResult<()> {
        let bed_id = self.bed_id_at(bed_index).await?;
        let body = serde_json::json!({
            "bed": bed_id,
            "side": side.code(),
            "sleepNumber": setting.value(),
        });
        let request =
            ApiRequest::put(paths::sleep_number(&bed_id), body).with_query("side", side.code());
        self.execute(&request).await?;
        info!("bed {bed_id}: {side} side sleep number set to {}", setting.value());
        Ok(())
    }
}
