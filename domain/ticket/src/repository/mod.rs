mod employee;
mod equipment;
mod request;
mod request_history;
mod request_status;
mod request_type;

use async_trait::async_trait;

#[rustfmt::skip]
pub use {
    employee::EmployeeRepo,
    equipment::EquipmentRepo,
    request::RequestRepo,
    request_history::RequestHistoryRepo,
    request_status::RequestStatusRepo,
    request_type::RequestTypeRepo,
};

/// Lookup surface of an external persistence collaborator.
#[async_trait]
pub trait ReadOnlyRepository<T>: Send + Sync {
    /// None when the id does not resolve; Err only for infrastructure faults.
    async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<T>>;
    async fn get_all(&self) -> anyhow::Result<Vec<T>>;
}

#[async_trait]
pub trait MutableRepository<T>: Send + Sync {
    /// Returns the id assigned by the store.
    async fn add(&self, entity: &T) -> anyhow::Result<i32>;
    /// Returns the affected row count.
    async fn update(&self, entity: &T) -> anyhow::Result<u64>;
    /// Returns the affected row count.
    async fn delete(&self, id: i32) -> anyhow::Result<u64>;
}

pub trait DBRepository<T>: ReadOnlyRepository<T> + MutableRepository<T> {}
