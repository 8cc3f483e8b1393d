use serde::{Deserialize, Serialize};

/// Categorization of a request.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RequestType {
    pub id: i32,
    pub name: String,
    pub description: String,
}
