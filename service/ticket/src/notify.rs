use dashmap::DashMap;
use domain_ticket::model::vo::RequestEvent;
use uuid::Uuid;

struct SessionHandle {
    username: String,
    sender: flume::Sender<String>,
}

/// Registry of live client sessions and the broadcast fan-out.
///
/// Sessions are inserted on connect and removed on disconnect or on the first
/// failed delivery. Broadcast snapshots the registry, skips every session
/// belonging to the acting identity and sends to the rest independently, so
/// one dead session cannot block the others or the mutation path.
#[derive(Default)]
pub struct NotificationHub {
    sessions: DashMap<Uuid, SessionHandle>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a connected session. The returned id is the unregister key.
    pub fn register(&self, username: &str, sender: flume::Sender<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.sessions.insert(
            id,
            SessionHandle {
                username: username.to_owned(),
                sender,
            },
        );
        tracing::info!("Session opened, id={id}, user={username}");
        id
    }

    pub fn unregister(&self, id: Uuid) {
        if self.sessions.remove(&id).is_some() {
            tracing::info!("Session closed, id={id}");
        }
        self.log_active_sessions();
    }

    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Deliver the event to every registered session except the actor's.
    /// At-most-once, fire-and-forget; per-session failures are logged,
    /// the session discarded, and nothing surfaces to the caller.
    pub async fn broadcast(&self, event: &RequestEvent) {
        let payload = match serde_json::to_string(event) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::error!("Failed to serialize event for request {}: {e}", event.request_id);
                return;
            }
        };

        // Snapshot, so sessions connecting or dropping mid-broadcast cannot
        // skew this delivery round.
        let targets: Vec<(Uuid, flume::Sender<String>)> = self
            .sessions
            .iter()
            .filter(|entry| entry.username != event.username)
            .map(|entry| (*entry.key(), entry.sender.clone()))
            .collect();

        let sends = targets.into_iter().map(|(id, sender)| {
            let payload = payload.clone();
            async move { sender.send_async(payload).await.err().map(|_| id) }
        });

        for dead in futures::future::join_all(sends).await.into_iter().flatten() {
            tracing::error!("Session closed before delivery, id={dead}");
            self.sessions.remove(&dead);
        }
    }

    fn log_active_sessions(&self) {
        let ids: Vec<Uuid> = self.sessions.iter().map(|e| *e.key()).collect();
        tracing::info!("Active sessions: {ids:?}");
    }
}
