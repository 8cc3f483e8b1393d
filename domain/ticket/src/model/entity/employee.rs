use serde::{Deserialize, Serialize};

/// Collaborator shape of an employee; the engine only resolves existence and
/// display names.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Employee {
    pub id: i32,
    pub full_name: String,
    pub department_id: Option<i32>,
}
