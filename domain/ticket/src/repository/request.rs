use async_trait::async_trait;

use super::DBRepository;
use crate::model::entity::Request;

#[async_trait]
pub trait RequestRepo: DBRepository<Request> + Send + Sync {
    /// Get all requests currently in the given status.
    async fn get_by_status(&self, status_id: i32) -> anyhow::Result<Vec<Request>>;
    /// Get all requests raised by the given employee.
    async fn get_by_author(&self, author_id: i32) -> anyhow::Result<Vec<Request>>;
    /// Get all requests assigned to the given employee.
    async fn get_by_executor(&self, executor_id: i32) -> anyhow::Result<Vec<Request>>;
}
