//! Lifecycle of a single request: `Idle → Requesting → {Succeeded | Failed}`.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestState {
    #[default]
    Idle,
    Requesting,
    Succeeded,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("illegal request transition {from:?} -> {to:?}")]
pub struct StateError {
    pub from: RequestState,
    pub to: RequestState,
}

impl RequestState {
    pub fn is_terminal(self) -> bool {
        matches!(self, RequestState::Succeeded | RequestState::Failed)
    }

    /// Move to `next`, rejecting anything but the forward edges.
    pub fn transition(self, next: RequestState) -> Result<RequestState, StateError> {
        use RequestState::*;
        match (self, next) {
            (Idle, Requesting) | (Requesting, Succeeded) | (Requesting, Failed) => Ok(next),
            (from, to) => Err(StateError { from, to }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_path() {
        let s = RequestState::default();
        let s = s.transition(RequestState::Requesting).unwrap();
        let s = s.transition(RequestState::Succeeded).unwrap();
        assert!(s.is_terminal());
    }

    #[test]
    fn test_no_way_back() {
        assert!(RequestState::Failed.transition(RequestState::Requesting).is_err());
        assert!(RequestState::Succeeded.transition(RequestState::Idle).is_err());
        assert!(RequestState::Idle.transition(RequestState::Succeeded).is_err());
        assert!(RequestState::Requesting.transition(RequestState::Requesting).is_err());
    }
}
