use serde::{Deserialize, Serialize};

/// Change notification pushed to every connected session except the actor's.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEvent {
    pub request_id: i32,
    pub event_name: EventName,
    pub event_type: String,
    #[serde(rename = "userName")]
    pub username: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventName {
    Create,
    Update,
}

impl RequestEvent {
    pub fn created(request_id: i32, username: &str) -> Self {
        Self::new(request_id, EventName::Create, username)
    }

    pub fn updated(request_id: i32, username: &str) -> Self {
        Self::new(request_id, EventName::Update, username)
    }

    fn new(request_id: i32, event_name: EventName, username: &str) -> Self {
        Self {
            request_id,
            event_name,
            event_type: "notification".to_owned(),
            username: username.to_owned(),
        }
    }
}
