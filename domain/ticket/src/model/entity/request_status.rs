use std::fmt;

use num_derive::{FromPrimitive, ToPrimitive};
use serde::{Deserialize, Serialize};

/// A row of the status catalog.
///
/// `processing_order` exists for display sorting only; business rules key off
/// `kind`, never off `name`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RequestStatus {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub processing_order: i32,
    pub kind: StatusKind,
}

/// Identity of a catalog status as the transition table sees it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, FromPrimitive, ToPrimitive,
)]
pub enum StatusKind {
    #[default]
    Created,
    Assigned,
    InProgress,
    PendingReview,
    Paused,
    Completed,
    Reopened,
    Cancelled,
}

impl fmt::Display for StatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Created => "Created",
            Self::Assigned => "Assigned",
            Self::InProgress => "In progress",
            Self::PendingReview => "Pending review",
            Self::Paused => "Paused",
            Self::Completed => "Completed",
            Self::Reopened => "Reopened",
            Self::Cancelled => "Cancelled",
        };
        f.write_str(name)
    }
}
