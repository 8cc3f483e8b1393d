use async_trait::async_trait;
use mockall::mock;

use crate::model::entity::{
    Employee, Equipment, Request, RequestHistory, RequestStatus, RequestType,
};
use crate::repository::{
    DBRepository, EmployeeRepo, EquipmentRepo, MutableRepository, ReadOnlyRepository,
    RequestHistoryRepo, RequestRepo, RequestStatusRepo, RequestTypeRepo,
};

mock! {
    pub RequestRepo {}
    #[async_trait]
    impl RequestRepo for RequestRepo {
        async fn get_by_status(&self, status_id: i32) -> anyhow::Result<Vec<Request>>;
        async fn get_by_author(&self, author_id: i32) -> anyhow::Result<Vec<Request>>;
        async fn get_by_executor(&self, executor_id: i32) -> anyhow::Result<Vec<Request>>;
    }
    #[async_trait]
    impl ReadOnlyRepository<Request> for RequestRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Request>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Request>>;
    }
    #[async_trait]
    impl MutableRepository<Request> for RequestRepo {
        async fn add(&self, entity: &Request) -> anyhow::Result<i32>;
        async fn update(&self, entity: &Request) -> anyhow::Result<u64>;
        async fn delete(&self, id: i32) -> anyhow::Result<u64>;
    }
    impl DBRepository<Request> for RequestRepo {}
}

mock! {
    pub RequestHistoryRepo {}
    #[async_trait]
    impl RequestHistoryRepo for RequestHistoryRepo {
        async fn add(&self, entry: &RequestHistory) -> anyhow::Result<i32>;
        async fn get_by_request(&self, request_id: i32) -> anyhow::Result<Vec<RequestHistory>>;
    }
}

mock! {
    pub RequestStatusRepo {}
    #[async_trait]
    impl ReadOnlyRepository<RequestStatus> for RequestStatusRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<RequestStatus>>;
        async fn get_all(&self) -> anyhow::Result<Vec<RequestStatus>>;
    }
    impl RequestStatusRepo for RequestStatusRepo {}
}

mock! {
    pub RequestTypeRepo {}
    #[async_trait]
    impl ReadOnlyRepository<RequestType> for RequestTypeRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<RequestType>>;
        async fn get_all(&self) -> anyhow::Result<Vec<RequestType>>;
    }
    impl RequestTypeRepo for RequestTypeRepo {}
}

mock! {
    pub EmployeeRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Employee> for EmployeeRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Employee>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Employee>>;
    }
    impl EmployeeRepo for EmployeeRepo {}
}

mock! {
    pub EquipmentRepo {}
    #[async_trait]
    impl ReadOnlyRepository<Equipment> for EquipmentRepo {
        async fn get_by_id(&self, id: i32) -> anyhow::Result<Option<Equipment>>;
        async fn get_all(&self) -> anyhow::Result<Vec<Equipment>>;
    }
    impl EquipmentRepo for EquipmentRepo {}
}
