//! The fixed transition table of the request lifecycle.
//!
//! Each capacity sees at most one next step from a given status, so the
//! workflow stays linear and auditable. An actor holding several capacities
//! (an admin who also authored the request) may reach any of their targets.

use crate::exception::{TicketException, TicketResult};
use crate::model::entity::{Request, StatusKind};
use crate::model::vo::Actor;

/// The actor's capacities relative to one concrete request.
#[derive(Debug, Clone, Copy, Default)]
pub struct Capacities {
    pub author: bool,
    pub executor: bool,
    pub manager: bool,
}

impl Capacities {
    pub fn of(actor: &Actor, request: &Request) -> Self {
        Self {
            author: actor.is_author_of(request),
            executor: actor.is_executor_of(request),
            manager: actor.is_manager(),
        }
    }
}

/// All targets reachable from `current` by an actor with `caps`, in the
/// author, executor, manager capacity order.
pub fn legal_transitions(current: StatusKind, caps: Capacities) -> Vec<StatusKind> {
    use StatusKind::*;

    let mut targets = Vec::new();

    if caps.author {
        match current {
            PendingReview => targets.push(Completed),
            Completed => targets.push(Reopened),
            Cancelled => {}
            _ => targets.push(Cancelled),
        }
    }

    if caps.executor {
        match current {
            Assigned => targets.push(InProgress),
            InProgress => targets.push(PendingReview),
            _ => {}
        }
    }

    if caps.manager {
        match current {
            Created => targets.push(Assigned),
            InProgress => targets.push(Paused),
            Paused => targets.push(InProgress),
            _ => {}
        }
    }

    targets
}

/// The single next step offered to the actor, first capacity wins.
pub fn next_legal_status(current: StatusKind, caps: Capacities) -> Option<StatusKind> {
    legal_transitions(current, caps).into_iter().next()
}

/// Rejects a transition not present in the table for any of the actor's
/// capacities.
pub fn check_transition(
    current: StatusKind,
    attempted: StatusKind,
    caps: Capacities,
) -> TicketResult<()> {
    if legal_transitions(current, caps).contains(&attempted) {
        Ok(())
    } else {
        Err(TicketException::IllegalTransition {
            from: current,
            to: attempted,
        })
    }
}

/// An executor may only be assigned by a manager while the request is still
/// in `Created`.
pub fn can_assign_executor(current: StatusKind, caps: Capacities) -> bool {
    caps.manager && current == StatusKind::Created
}

/// The deadline may only be changed by a manager while the request is still
/// in `Created`.
pub fn can_edit_deadline(current: StatusKind, caps: Capacities) -> bool {
    caps.manager && current == StatusKind::Created
}
