pub mod engine;
pub mod events;
pub mod lifecycle;

pub use engine::{SessionEngine, SessionError, SessionHandle};
pub use events::{SessionUpdate, UpdateCause};
pub use lifecycle::SessionPhase;
