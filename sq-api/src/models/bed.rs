//! Beds from `/rest/bed`.

use serde::Serialize;
use serde_json::Value;

use sq_core::error::SqResult;

use super::attributes::{ApiObject, Attributes};
use super::status::{Side, SideStatus};

/// Merged status of both sides of a bed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BedSides {
    pub left: SideStatus,
    pub right: SideStatus,
}

/// One bed on the account.
///
/// `left`/`right` are populated only by the sleeper-status merge, and always
/// together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bed {
    pub bed_id: String,
    pub sleeper_left_id: String,
    pub sleeper_right_id: String,
    #[serde(flatten)]
    sides: Option<BedSides>,
    attributes: Attributes,
}

impl Bed {
    /// Build from a raw entry; `bedId`, `sleeperLeftId` and `sleeperRightId` are required.
    pub fn from_raw(value: Value) -> SqResult<Self> {
        let attributes = Attributes::from_value(Self::VIEW, value)?;
        let bed_id = attributes.require_id(Self::VIEW, "bedId")?;
        let sleeper_left_id = attributes.require_id(Self::VIEW, "sleeperLeftId")?;
        let sleeper_right_id = attributes.require_id(Self::VIEW, "sleeperRightId")?;

        Ok(Self {
            bed_id,
            sleeper_left_id,
            sleeper_right_id,
            sides: None,
            attributes,
        })
    }

    /// Configured sleeper id for one side.
    pub fn sleeper_id(&self, side: Side) -> &str {
        match side {
            Side::Left => &self.sleeper_left_id,
            Side::Right => &self.sleeper_right_id,
        }
    }

    /// `name`, if present.
    pub fn name(&self) -> Option<&str> {
        self.attributes.raw("name").and_then(Value::as_str)
    }

    pub fn left(&self) -> Option<&SideStatus> {
        self.sides.as_ref().map(|s| &s.left)
    }

    pub fn right(&self) -> Option<&SideStatus> {
        self.sides.as_ref().map(|s| &s.right)
    }

    pub fn side(&self, side: Side) -> Option<&SideStatus> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    pub(crate) fn with_sides(mut self, sides: BedSides) -> Self {
        self.sides = Some(sides);
        self
    }
}

impl ApiObject for Bed {
    const VIEW: &'static str = "Bed";

    fn attributes(&self) -> &Attributes {
        &self.attributes
    }
}
