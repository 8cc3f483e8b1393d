use super::ReadOnlyRepository;
use crate::model::entity::Equipment;

pub trait EquipmentRepo: ReadOnlyRepository<Equipment> {}
