use std::sync::Arc;

use chrono::Utc;
use domain_ticket::model::entity::RequestHistory;
use domain_ticket::repository::RequestHistoryRepo;

/// Appends one audit row per successful create or update.
///
/// History is best-effort secondary bookkeeping: a failed write is logged and
/// swallowed, it never rolls back or blocks the primary mutation.
pub struct HistoryRecorder {
    history_repo: Arc<dyn RequestHistoryRepo>,
}

impl HistoryRecorder {
    pub fn new(history_repo: Arc<dyn RequestHistoryRepo>) -> Self {
        Self { history_repo }
    }

    pub async fn record(&self, request_id: i32, status_id: i32, changed_by_id: i32, comment: &str) {
        let entry = RequestHistory {
            id: 0,
            request_id,
            change_date: Utc::now(),
            status_id: Some(status_id),
            comment: comment.to_owned(),
            changed_by_id,
        };
        if let Err(e) = self.history_repo.add(&entry).await {
            tracing::error!("Failed to record history for request {request_id}: {e}");
        }
    }

    pub async fn history_of(&self, request_id: i32) -> anyhow::Result<Vec<RequestHistory>> {
        self.history_repo.get_by_request(request_id).await
    }
}
