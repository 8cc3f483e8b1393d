use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use domain_ticket::exception::{TicketException, TicketResult};
use domain_ticket::model::entity::{
    Employee, Equipment, Request, RequestHistory, RequestStatus, RequestType, StatusKind,
};
use domain_ticket::model::vo::{Actor, RequestEvent};
use domain_ticket::repository::{
    EmployeeRepo, EquipmentRepo, RequestRepo, RequestStatusRepo, RequestTypeRepo,
};
use domain_ticket::service::lifecycle::{self, Capacities};
use domain_ticket::service::RequestService;
use typed_builder::TypedBuilder;

use crate::diff::ChangeNarrator;
use crate::history::HistoryRecorder;
use crate::notify::NotificationHub;

/// Orchestrates a mutation end to end: validate, load, check the transition,
/// diff, persist, record history, notify everyone else.
#[derive(TypedBuilder)]
pub struct RequestServiceImpl {
    request_repo: Arc<dyn RequestRepo>,
    status_repo: Arc<dyn RequestStatusRepo>,
    type_repo: Arc<dyn RequestTypeRepo>,
    employee_repo: Arc<dyn EmployeeRepo>,
    equipment_repo: Arc<dyn EquipmentRepo>,
    narrator: ChangeNarrator,
    history: HistoryRecorder,
    hub: Arc<NotificationHub>,
}

#[async_trait]
impl RequestService for RequestServiceImpl {
    async fn create(&self, request: Request, actor: &Actor) -> TicketResult<i32> {
        match self.create_inner(request, actor).await {
            Ok(id) => {
                tracing::info!("Request created with ID: {id}");
                Ok(id)
            }
            Err(e) => Err(log_rejection("create", e)),
        }
    }

    async fn update(&self, request: Request, actor: &Actor) -> TicketResult<()> {
        let id = request.id;
        match self.update_inner(request, actor).await {
            Ok(()) => {
                tracing::info!("Request {id} updated");
                Ok(())
            }
            Err(e) => Err(log_rejection("update", e)),
        }
    }

    async fn get_by_id(&self, id: i32) -> TicketResult<Request> {
        if id <= 0 {
            return Err(TicketException::validation("Invalid request identifier"));
        }
        self.request_repo
            .get_by_id(id)
            .await?
            .ok_or(TicketException::not_found("request", id))
    }

    async fn get_all(&self) -> TicketResult<Vec<Request>> {
        Ok(self.request_repo.get_all().await?)
    }

    async fn get_by_status(&self, status_id: i32) -> TicketResult<Vec<Request>> {
        Ok(self.request_repo.get_by_status(status_id).await?)
    }

    async fn get_by_author(&self, author_id: i32) -> TicketResult<Vec<Request>> {
        Ok(self.request_repo.get_by_author(author_id).await?)
    }

    async fn get_by_executor(&self, executor_id: i32) -> TicketResult<Vec<Request>> {
        Ok(self.request_repo.get_by_executor(executor_id).await?)
    }

    async fn get_history(&self, request_id: i32) -> TicketResult<Vec<RequestHistory>> {
        if request_id <= 0 {
            return Err(TicketException::validation("Invalid request identifier"));
        }
        Ok(self.history.history_of(request_id).await?)
    }

    async fn delete(&self, id: i32) -> TicketResult<()> {
        if id <= 0 {
            return Err(TicketException::validation("Invalid request identifier"));
        }
        self.request_repo
            .get_by_id(id)
            .await?
            .ok_or(TicketException::not_found("request", id))?;
        let affected = self.request_repo.delete(id).await?;
        if affected == 0 {
            return Err(TicketException::persistence("Failed to delete the request"));
        }
        tracing::info!("Request {id} deleted");
        Ok(())
    }
}

impl RequestServiceImpl {
    async fn create_inner(&self, request: Request, actor: &Actor) -> TicketResult<i32> {
        validate_shape(&request)?;
        self.resolve_author(request.author_id).await?;
        self.resolve_status(request.status_id).await?;
        self.resolve_type(request.type_id).await?;
        if let Some(equipment_id) = request.equipment_id {
            self.resolve_equipment(equipment_id).await?;
        }

        let entity = Request {
            id: 0,
            creation_date: Utc::now(),
            problem_description: request.problem_description.trim().to_owned(),
            completion_date: None,
            ..request
        };
        let id = self.request_repo.add(&entity).await?;

        self.history
            .record(
                id,
                entity.status_id,
                actor.employee_id,
                &format!("Request created with ID: {id}"),
            )
            .await;
        self.hub.broadcast(&RequestEvent::created(id, &actor.username)).await;
        Ok(id)
    }

    async fn update_inner(&self, request: Request, actor: &Actor) -> TicketResult<()> {
        validate_shape(&request)?;

        let mut existing = self
            .request_repo
            .get_by_id(request.id)
            .await?
            .ok_or(TicketException::not_found("request", request.id))?;

        let new_status = self.resolve_status(request.status_id).await?;
        self.resolve_type(request.type_id).await?;
        if let Some(equipment_id) = request.equipment_id {
            self.resolve_equipment(equipment_id).await?;
        }

        let current_status = self.resolve_status(existing.status_id).await?;
        let caps = Capacities::of(actor, &existing);

        let mut incoming = request;
        // The lifecycle owns the completion date; clients cannot edit it.
        incoming.completion_date = existing.completion_date;

        if existing.status_id != incoming.status_id {
            lifecycle::check_transition(current_status.kind, new_status.kind, caps)?;
            match new_status.kind {
                StatusKind::Completed => incoming.completion_date = Some(Utc::now()),
                StatusKind::Reopened => incoming.completion_date = None,
                _ => {}
            }
        }

        if existing.executor_id != incoming.executor_id
            && !lifecycle::can_assign_executor(current_status.kind, caps)
        {
            return Err(TicketException::validation(
                "Executor can only be assigned by a department manager while the request is in Created",
            ));
        }

        if existing.deadline != incoming.deadline
            && !lifecycle::can_edit_deadline(current_status.kind, caps)
        {
            return Err(TicketException::validation(
                "Deadline can only be changed by a department manager while the request is in Created",
            ));
        }

        let narrative = self.narrator.narrate(&mut existing, &incoming).await;
        if narrative.is_empty() {
            return Err(TicketException::NoChanges);
        }

        let affected = self.request_repo.update(&existing).await?;
        if affected == 0 {
            return Err(TicketException::persistence("Failed to update the request"));
        }

        self.history
            .record(existing.id, existing.status_id, actor.employee_id, &narrative)
            .await;
        self.hub.broadcast(&RequestEvent::updated(existing.id, &actor.username)).await;
        Ok(())
    }

    async fn resolve_author(&self, id: i32) -> TicketResult<Employee> {
        self.employee_repo
            .get_by_id(id)
            .await?
            .ok_or(TicketException::not_found("request author", id))
    }

    async fn resolve_status(&self, id: i32) -> TicketResult<RequestStatus> {
        self.status_repo
            .get_by_id(id)
            .await?
            .ok_or(TicketException::not_found("request status", id))
    }

    async fn resolve_type(&self, id: i32) -> TicketResult<RequestType> {
        self.type_repo
            .get_by_id(id)
            .await?
            .ok_or(TicketException::not_found("request type", id))
    }

    async fn resolve_equipment(&self, id: i32) -> TicketResult<Equipment> {
        self.equipment_repo
            .get_by_id(id)
            .await?
            .ok_or(TicketException::not_found("equipment", id))
    }
}

fn validate_shape(request: &Request) -> TicketResult<()> {
    if request.author_id <= 0 {
        return Err(TicketException::validation("Request author is required"));
    }
    if request.status_id <= 0 {
        return Err(TicketException::validation("Request status is required"));
    }
    if request.type_id <= 0 {
        return Err(TicketException::validation("Request type is required"));
    }
    let description = request.problem_description.trim();
    if description.is_empty() {
        return Err(TicketException::validation("Problem description is required"));
    }
    if description.chars().count() > 1000 {
        return Err(TicketException::validation("Problem description is too long"));
    }
    if !(1..=5).contains(&request.priority) {
        return Err(TicketException::validation("Priority must be between 1 and 5"));
    }
    Ok(())
}

/// Business rejections stay at warn; only infrastructure faults are errors.
fn log_rejection(op: &str, e: TicketException) -> TicketException {
    match &e {
        TicketException::Internal(source) => {
            tracing::error!("Unexpected failure during request {op}: {source:#}");
        }
        other => tracing::warn!("Request {op} rejected: {other}"),
    }
    e
}
