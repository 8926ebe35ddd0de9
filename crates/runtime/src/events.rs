use core_sim::SessionSnapshot;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateCause {
    Started,
    Tick,
    PricesUpdated,
    Trade,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionUpdate {
    pub cause: UpdateCause,
    pub snapshot: SessionSnapshot,
}

impl SessionUpdate {
    pub fn new(cause: UpdateCause, snapshot: SessionSnapshot) -> Self {
        Self { cause, snapshot }
    }
}
