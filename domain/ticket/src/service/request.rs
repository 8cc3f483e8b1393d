use async_trait::async_trait;

use crate::exception::TicketResult;
use crate::model::entity::{Request, RequestHistory};
use crate::model::vo::Actor;

/// Orchestrates the request lifecycle: validation, transition checks,
/// diffing, persistence, history and notification.
#[async_trait]
pub trait RequestService: Send + Sync {
    /// Returns the id assigned to the new request.
    async fn create(&self, request: Request, actor: &Actor) -> TicketResult<i32>;

    /// Applies the incoming field values to the persisted request. Rejects
    /// no-op updates with `TicketException::NoChanges`.
    async fn update(&self, request: Request, actor: &Actor) -> TicketResult<()>;

    async fn get_by_id(&self, id: i32) -> TicketResult<Request>;

    /// Empty result set is success, not an error.
    async fn get_all(&self) -> TicketResult<Vec<Request>>;

    async fn get_by_status(&self, status_id: i32) -> TicketResult<Vec<Request>>;

    async fn get_by_author(&self, author_id: i32) -> TicketResult<Vec<Request>>;

    async fn get_by_executor(&self, executor_id: i32) -> TicketResult<Vec<Request>>;

    /// Audit trail for one request, oldest first.
    async fn get_history(&self, request_id: i32) -> TicketResult<Vec<RequestHistory>>;

    /// Administrative escape hatch; not part of the lifecycle, leaves no
    /// history and triggers no notification.
    async fn delete(&self, id: i32) -> TicketResult<()>;
}
