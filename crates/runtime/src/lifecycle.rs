use serde::Serialize;

/// A session is idle until its scheduler starts and then runs until the
/// process goes away. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionPhase {
    Idle,
    Running,
}

impl SessionPhase {
    pub fn start(self) -> Self {
        match self {
            Self::Idle | Self::Running => Self::Running,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SessionPhase;

    #[test]
    fn idle_session_transitions_to_running_on_start() {
        let phase = SessionPhase::Idle;

        assert_eq!(phase.as_str(), "idle");
        assert_eq!(phase.start(), SessionPhase::Running);
    }

    #[test]
    fn running_is_terminal() {
        assert_eq!(SessionPhase::Running.start(), SessionPhase::Running);
        assert_eq!(SessionPhase::Running.as_str(), "running");
    }
}
