use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain_ticket::model::entity::Request;
use domain_ticket::repository::{EmployeeRepo, EquipmentRepo, RequestStatusRepo, RequestTypeRepo};
use typed_builder::TypedBuilder;

/// Sentinel for a reference that does not resolve to a display name.
const NOT_ASSIGNED: &str = "not assigned";
/// Sentinel for an unset date.
const NOT_SET: &str = "not set";
const DATE_FORMAT: &str = "%d.%m.%Y %H:%M";

/// Compares the persisted request against the incoming one, field by field,
/// and narrates every difference for the audit trail.
///
/// Accepted changes are written into the persisted copy as they are found, so
/// the final entity reflects exactly what the narrative describes. Display
/// name lookups are cosmetic: a failed or absent lookup falls back to the
/// "not assigned" sentinel and never fails the diff.
#[derive(TypedBuilder)]
pub struct ChangeNarrator {
    status_repo: Arc<dyn RequestStatusRepo>,
    type_repo: Arc<dyn RequestTypeRepo>,
    equipment_repo: Arc<dyn EquipmentRepo>,
    employee_repo: Arc<dyn EmployeeRepo>,
}

impl ChangeNarrator {
    /// Returns the narrative, one line per changed field, empty when nothing
    /// differs. Empty output signals the caller to refuse the update.
    pub async fn narrate(&self, existing: &mut Request, incoming: &Request) -> String {
        let mut lines = Vec::new();

        if existing.status_id != incoming.status_id {
            let old = self.status_name(existing.status_id).await;
            let new = self.status_name(incoming.status_id).await;
            lines.push(format!("Status changed from {old} to {new}; "));
            existing.status_id = incoming.status_id;
        }

        if existing.type_id != incoming.type_id {
            let old = self.type_name(existing.type_id).await;
            let new = self.type_name(incoming.type_id).await;
            lines.push(format!("Request type changed from {old} to {new}; "));
            existing.type_id = incoming.type_id;
        }

        if existing.problem_description.trim() != incoming.problem_description.trim() {
            lines.push("Problem description changed; ".to_owned());
            existing.problem_description = incoming.problem_description.trim().to_owned();
        }

        if existing.priority != incoming.priority {
            lines.push(format!(
                "Priority changed from {} to {}; ",
                existing.priority, incoming.priority
            ));
            existing.priority = incoming.priority;
        }

        if existing.equipment_id != incoming.equipment_id {
            let old = self.equipment_name(existing.equipment_id).await;
            let new = self.equipment_name(incoming.equipment_id).await;
            lines.push(format!("Equipment changed from '{old}' to '{new}'; "));
            existing.equipment_id = incoming.equipment_id;
        }

        if existing.executor_id != incoming.executor_id {
            let old = self.employee_name(existing.executor_id).await;
            let new = self.employee_name(incoming.executor_id).await;
            lines.push(format!("Executor changed from '{old}' to '{new}';"));
            existing.executor_id = incoming.executor_id;
        }

        if existing.deadline != incoming.deadline {
            let old = format_date(existing.deadline);
            let new = format_date(incoming.deadline);
            lines.push(format!("Deadline changed from '{old}' to '{new}'; "));
            existing.deadline = incoming.deadline;
        }

        if existing.completion_date != incoming.completion_date {
            let old = format_date(existing.completion_date);
            let new = format_date(incoming.completion_date);
            lines.push(format!("Completion date changed from '{old}' to '{new}'; "));
            existing.completion_date = incoming.completion_date;
        }

        lines.join("\n").trim().to_owned()
    }

    async fn status_name(&self, id: i32) -> String {
        match self.status_repo.get_by_id(id).await {
            Ok(Some(status)) => status.name,
            _ => NOT_ASSIGNED.to_owned(),
        }
    }

    async fn type_name(&self, id: i32) -> String {
        match self.type_repo.get_by_id(id).await {
            Ok(Some(r#type)) => r#type.name,
            _ => NOT_ASSIGNED.to_owned(),
        }
    }

    async fn equipment_name(&self, id: Option<i32>) -> String {
        let Some(id) = id else {
            return NOT_ASSIGNED.to_owned();
        };
        match self.equipment_repo.get_by_id(id).await {
            Ok(Some(equipment)) => equipment.name,
            _ => NOT_ASSIGNED.to_owned(),
        }
    }

    async fn employee_name(&self, id: Option<i32>) -> String {
        let Some(id) = id else {
            return NOT_ASSIGNED.to_owned();
        };
        match self.employee_repo.get_by_id(id).await {
            Ok(Some(employee)) => employee.full_name,
            _ => NOT_ASSIGNED.to_owned(),
        }
    }
}

fn format_date(value: Option<DateTime<Utc>>) -> String {
    match value {
        Some(value) => value.format(DATE_FORMAT).to_string(),
        None => NOT_SET.to_owned(),
    }
}
