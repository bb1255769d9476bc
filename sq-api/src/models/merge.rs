//! Joining beds with their family status and sleepers.

use std::collections::HashMap;

use sq_core::error::{SqError, SqResult};

use super::bed::{Bed, BedSides};
use super::sleeper::Sleeper;
use super::status::{FamilyStatus, Side, SideStatus};

/// Attach each bed's family status, and each side's sleeper, to the bed.
///
/// Fails with `DataConsistency` if a bed has no family status entry or names
/// a sleeper that is not in `sleepers`. No bed is partially merged.
pub fn merge_sleeper_status(
    beds: Vec<Bed>,
    sleepers: Vec<Sleeper>,
    statuses: Vec<FamilyStatus>,
) -> SqResult<Vec<Bed>> {
    let sleepers_by_id: HashMap<String, Sleeper> = sleepers
        .into_iter()
        .map(|s| (s.sleeper_id.clone(), s))
        .collect();
    let statuses_by_bed: HashMap<String, FamilyStatus> = statuses
        .into_iter()
        .map(|s| (s.bed_id.clone(), s))
        .collect();

    beds.into_iter()
        .map(|bed| {
            let status = statuses_by_bed.get(&bed.bed_id).ok_or_else(|| {
                SqError::DataConsistency(format!("no family status for bed {}", bed.bed_id))
            })?;

            let left = side_with_sleeper(&bed, status, Side::Left, &sleepers_by_id)?;
            let right = side_with_sleeper(&bed, status, Side::Right, &sleepers_by_id)?;
            Ok(bed.with_sides(BedSides { left, right }))
        })
        .collect()
}

fn side_with_sleeper(
    bed: &Bed,
    status: &FamilyStatus,
    side: Side,
    sleepers_by_id: &HashMap<String, Sleeper>,
) -> SqResult<SideStatus> {
    let sleeper_id = bed.sleeper_id(side);
    let sleeper = sleepers_by_id.get(sleeper_id).ok_or_else(|| {
        SqError::DataConsistency(format!(
            "bed {} {side} side references unknown sleeper {sleeper_id}",
            bed.bed_id
        ))
    })?;

    Ok(status.side(side).clone().with_sleeper(sleeper.clone()))
}
