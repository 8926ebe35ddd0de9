use core_sim::SessionSnapshot;
use runtime::{SessionHandle, SessionUpdate, UpdateCause};
use tokio::sync::broadcast;

#[derive(Clone, Debug, serde::Serialize)]
#[serde(tag = "event_type", rename_all = "snake_case")]
pub enum StreamEvent {
    Connected {
        snapshot: SessionSnapshot,
    },
    StateChanged {
        cause: UpdateCause,
        snapshot: SessionSnapshot,
    },
}

impl StreamEvent {
    pub fn connected(snapshot: SessionSnapshot) -> Self {
        Self::Connected { snapshot }
    }
}

impl From<SessionUpdate> for StreamEvent {
    fn from(update: SessionUpdate) -> Self {
        Self::StateChanged {
            cause: update.cause,
            snapshot: update.snapshot,
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppState {
    session: SessionHandle,
}

impl AppState {
    pub fn new(session: SessionHandle) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &SessionHandle {
        &self.session
    }

    pub fn subscribe_updates(&self) -> broadcast::Receiver<SessionUpdate> {
        self.session.subscribe()
    }
}
