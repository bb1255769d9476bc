//! Typed views over the raw JSON objects returned by the API.
//!
//! Each view validates the attributes it depends on when it is built, and
//! keeps the full raw object for passthrough access by snake_case name.

pub mod attributes;
pub mod bed;
pub mod merge;
pub mod sleeper;
pub mod status;

pub use attributes::{to_camel_case, ApiObject, Attributes};
pub use bed::{Bed, BedSides};
pub use merge::merge_sleeper_status;
pub use sleeper::Sleeper;
pub use status::{FamilyStatus, Side, SideStatus};
