use serde::{Deserialize, Serialize};

use crate::model::entity::Request;

/// The authenticated identity performing an operation.
///
/// Passed explicitly into every orchestrator call; the engine never reads
/// ambient auth context.
#[derive(Debug, Clone)]
pub struct Actor {
    pub employee_id: i32,
    /// Notification identity; broadcasts are filtered by it.
    pub username: String,
    pub roles: Vec<Role>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Employee,
    Manager,
    Admin,
}

impl Actor {
    pub fn new(employee_id: i32, username: impl Into<String>, roles: Vec<Role>) -> Self {
        Self {
            employee_id,
            username: username.into(),
            roles,
        }
    }

    /// Department managers and admins share the same lifecycle powers.
    pub fn is_manager(&self) -> bool {
        self.roles.iter().any(|r| matches!(r, Role::Manager | Role::Admin))
    }

    pub fn is_author_of(&self, request: &Request) -> bool {
        self.employee_id == request.author_id
    }

    pub fn is_executor_of(&self, request: &Request) -> bool {
        request.executor_id == Some(self.employee_id)
    }
}
