use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// # Maintenance request
///
/// The central entity of the lifecycle engine. The author, status and type
/// must always resolve to catalog rows; `completion_date` is owned by the
/// lifecycle and is only cleared by an explicit reopen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Request {
    /// 0 until persisted, immutable afterwards.
    pub id: i32,
    pub creation_date: DateTime<Utc>,
    /// The employee who raised the request. Never changes.
    pub author_id: i32,
    pub status_id: i32,
    pub type_id: i32,
    /// Non-empty after trimming, at most 1000 characters.
    pub problem_description: String,
    /// 1 is the most urgent, 5 the least.
    pub priority: i32,
    /// The asset under repair.
    pub equipment_id: Option<i32>,
    /// The employee assigned to resolve the request.
    pub executor_id: Option<i32>,
    pub deadline: Option<DateTime<Utc>>,
    pub completion_date: Option<DateTime<Utc>>,
}

impl Default for Request {
    fn default() -> Self {
        Self {
            id: 0,
            creation_date: Utc::now(),
            author_id: 0,
            status_id: 0,
            type_id: 0,
            problem_description: String::new(),
            priority: 3,
            equipment_id: None,
            executor_id: None,
            deadline: None,
            completion_date: None,
        }
    }
}
