use serde::{Deserialize, Serialize};

/// Collaborator shape of a tracked asset.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    pub department_id: Option<i32>,
}
