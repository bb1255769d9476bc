//! Sleeper endpoints.

use sq_core::constants::paths;
use sq_core::error::SqResult;

use crate::client::SleepIqClient;
use crate::models::Sleeper;
use crate::response::SleeperList;
use crate::transport::Transport;

impl<T: Transport> SleepIqClient<T> {
    /// List the sleepers on the account.
    pub async fn list_sleepers(&self) -> SqResult<Vec<Sleeper>> {
        let list: SleeperList = self.get_json(paths::SLEEPERS).await?;
        list.sleepers.into_iter().map(Sleeper::from_raw).collect()
    }
}
