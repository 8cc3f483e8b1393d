use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One immutable audit row per state-affecting change to a request.
///
/// Rows are appended by the history recorder and never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestHistory {
    pub id: i32,
    pub request_id: i32,
    pub change_date: DateTime<Utc>,
    /// Status in effect at the time of the change. None if the catalog row
    /// was later removed; the audit row itself persists.
    pub status_id: Option<i32>,
    /// Diff-generated or lifecycle-generated narrative.
    pub comment: String,
    pub changed_by_id: i32,
}

impl Default for RequestHistory {
    fn default() -> Self {
        Self {
            id: 0,
            request_id: 0,
            change_date: Utc::now(),
            status_id: None,
            comment: String::new(),
            changed_by_id: 0,
        }
    }
}
