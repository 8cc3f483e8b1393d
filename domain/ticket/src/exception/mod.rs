use thiserror::Error;

use crate::model::entity::StatusKind;

pub type TicketResult<T> = Result<T, TicketException>;

/// Expected business outcomes of the lifecycle engine.
///
/// Every variant except `Internal` is recovered locally and surfaced to the
/// caller as a typed failure; `Internal` masks infrastructure faults behind a
/// generic message.
#[derive(Debug, Error)]
pub enum TicketException {
    #[error("{message}")]
    Validation { message: String },

    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    #[error("illegal status transition from {from} to {to}")]
    IllegalTransition { from: StatusKind, to: StatusKind },

    /// An update produced an empty diff. Benign, never logged as an error.
    #[error("no changes in the request")]
    NoChanges,

    /// The store accepted the call but reported no affected rows.
    #[error("{message}")]
    Persistence { message: String },

    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl TicketException {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }
}
