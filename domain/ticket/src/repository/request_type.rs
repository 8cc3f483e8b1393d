use super::ReadOnlyRepository;
use crate::model::entity::RequestType;

pub trait RequestTypeRepo: ReadOnlyRepository<RequestType> {}
