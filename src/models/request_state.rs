/// Lifecycle of a screen's single outstanding request.
///
/// Transitions are linear: Idle -> Loading -> Success | Failed, and back to
/// Loading on resubmit. There is no fencing between overlapping submissions;
/// whichever response arrives last wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Loading,
    Success(T),
    Failed(String),
}

impl<T> RequestState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading)
    }

    pub fn success(&self) -> Option<&T> {
        match self {
            RequestState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle() {
        let state: RequestState<u32> = RequestState::default();
        assert_eq!(state, RequestState::Idle);
        assert!(!state.is_loading());
        assert!(state.success().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn accessors_follow_the_lifecycle() {
        let mut state: RequestState<u32> = RequestState::Loading;
        assert!(state.is_loading());

        state = RequestState::Success(7);
        assert_eq!(state.success(), Some(&7));
        assert!(state.error().is_none());

        state = RequestState::Failed("boom".to_string());
        assert_eq!(state.error(), Some("boom"));
        assert!(state.success().is_none());
    }
}
