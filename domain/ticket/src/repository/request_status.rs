use super::ReadOnlyRepository;
use crate::model::entity::RequestStatus;

/// Status catalog; read-only for the lifecycle engine.
pub trait RequestStatusRepo: ReadOnlyRepository<RequestStatus> {}
