use super::ReadOnlyRepository;
use crate::model::entity::Employee;

pub trait EmployeeRepo: ReadOnlyRepository<Employee> {}
