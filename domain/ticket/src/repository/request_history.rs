use async_trait::async_trait;

use crate::model::entity::RequestHistory;

/// Append-only store for audit rows.
#[async_trait]
pub trait RequestHistoryRepo: Send + Sync {
    async fn add(&self, entry: &RequestHistory) -> anyhow::Result<i32>;
    /// Rows ordered by change date, oldest first.
    async fn get_by_request(&self, request_id: i32) -> anyhow::Result<Vec<RequestHistory>>;
}
