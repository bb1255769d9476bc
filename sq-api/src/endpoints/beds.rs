//! Bed and bed status endpoints.

use tracing::debug;

use sq_core::constants::paths;
use sq_core::error::{SqError, SqResult};

use crate::client::SleepIqClient;
use crate::models::{merge_sleeper_status, Bed, FamilyStatus};
use crate::response::BedList;
use crate::transport::Transport;

impl<T: Transport> SleepIqClient<T> {
    /// List the beds on the account.
    pub async fn list_beds(&self) -> SqResult<Vec<Bed>> {
        let list: BedList = self.get_json(paths::BEDS).await?;
        list.beds.into_iter().map(Bed::from_raw).collect()
    }

    /// Current status of every bed.
    pub async fn bed_family_status(&self) -> SqResult<Vec<FamilyStatus>> {
        let list: BedList = self.get_json(paths::FAMILY_STATUS).await?;
        list.beds.into_iter().map(FamilyStatus::from_raw).collect()
    }

    /// Beds with both sides' status and sleeper attached.
    ///
    /// Issues three independent requests (beds, sleepers, family status) and
    /// joins them in memory.
    pub async fn beds_with_sleeper_status(&self) -> SqResult<Vec<Bed>> {
        let beds = self.list_beds().await?;
        let sleepers = self.list_sleepers().await?;
        let statuses = self.bed_family_status().await?;
        debug!(
            "merging {} beds, {} sleepers, {} statuses",
            beds.len(),
            sleepers.len(),
            statuses.len()
        );
        merge_sleeper_status(beds, sleepers, statuses)
    }

    /// Id of the bed at `index` in a freshly fetched bed list.
    ///
    /// Positions are not stable across calls; every call fetches the list again.
    pub async fn bed_id_at(&self, index: usize) -> SqResult<String> {
        let beds = self.list_beds().await?;
        let count = beds.len();
        beds.into_iter()
            .nth(index)
            .map(|bed| bed.bed_id)
            .ok_or(SqError::BedIndexOutOfRange { index, count })
    }
}
