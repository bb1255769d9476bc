//! Per-bed status snapshots and the side of a bed they describe.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use sq_core::error::{SqError, SqResult};

use super::attributes::{ApiObject, Attributes};
use super::sleeper::Sleeper;

/// One side of a bed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Wire code: `"L"` or `"R"`.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Left => "L",
            Self::Right => "R",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

impl FromStr for Side {
    type Err = SqError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "l" | "left" => Ok(Self::Left),
            "r" | "right" => Ok(Self::Right),
            other => Err(SqError::InvalidArgument(format!(
                "side must be L or R, got `{other}`"
            ))),
        }
    }
}

/// Status of one side of a bed, optionally joined with its sleeper.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SideStatus {
    attributes: Attributes,
    #[serde(skip_serializing_if = "Option::is_none")]
    sleeper: Option<Sleeper>,
}

impl SideStatus {
    pub fn from_raw(value: Value) -> SqResult<Self> {
        Ok(Self {
            attributes: Attributes::from_value(Self::VIEW, value)?,
            sleeper: None,
        })
    }

    /// The sleeper on this side; set only by the sleeper-status merge.
    pub fn sleeper(&self) -> Option<&Sleeper> {
        self.sleeper.as_ref()
    }

    /// `isInBed`.
    pub fn is_in_bed(&self) -> SqResult<bool> {
        let value = self.attr("is_in_bed")?;
        value.as_bool().ok_or_else(|| {
            SqError::Serialization(format!("SideStatus.isInBed: expected a boolean, got {value}"))
        })
    }

    /// `sleepNumber`, the current firmness setting.
    pub fn sleep_number(&self) -> SqResult<u64> {
        let value = self.attr("sleep_number")?;
        value.as_u64().ok_or_else(|| {
            SqError::Serialization(format!("SideStatus.sleepNumber: expected a number, got {value}"))
        })
    }

    pub(crate) fn with_sleeper(mut self, sleeper: Sleeper) -> Self {
        self.sleeper = Some(sleeper);
        self
    }
}

impl ApiObject for SideStatus {
    const VIEW: &'static str = "SideStatus";

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}

/// Status snapshot of one bed, from `/rest/bed/familyStatus`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilyStatus {
    pub bed_id: String,
    pub left: SideStatus,
    pub right: SideStatus,
    #[serde(skip)]
    attributes: Attributes,
}

impl FamilyStatus {
    /// Build from a raw entry; `bedId`, `leftSide` and `rightSide` are required.
    pub fn from_raw(value: Value) -> SqResult<Self> {
        let attributes = Attributes::from_value(Self::VIEW, value)?;
        let bed_id = attributes.require_id(Self::VIEW, "bedId")?;
        let left = SideStatus::from_raw(attributes.require(Self::VIEW, "leftSide")?.clone())?;
        let right = SideStatus::from_raw(attributes.require(Self::VIEW, "rightSide")?.clone())?;

        Ok(Self {
            bed_id,
            left,
            right,
            attributes,
        })
    }

    pub fn side(&self, side: Side) -> &SideStatus {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

impl ApiObject for FamilyStatus {
    const VIEW: &'static str = "FamilyStatus";

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}
