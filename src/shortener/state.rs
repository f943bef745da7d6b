use crate::service::{ShortenError, ShortenResult};
use crate::ui::mvi::UiState;

/// Tag assigned to each issued request. Strictly increasing per controller.
pub type RequestId = u64;

/// Where the current submission stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Requesting,
    Resolved {
        short_url: String,
        long_url: String,
    },
    Failed {
        error: ShortenError,
    },
}

impl SubmissionState {
    pub fn is_requesting(&self) -> bool {
        matches!(self, Self::Requesting)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn error(&self) -> Option<&ShortenError> {
        match self {
            Self::Failed { error } => Some(error),
            _ => None,
        }
    }

    /// The `(short_url, long_url)` pair when resolved.
    pub fn resolved(&self) -> Option<(&str, &str)> {
        match self {
            Self::Resolved {
                short_url,
                long_url,
            } => Some((short_url, long_url)),
            _ => None,
        }
    }
}

impl From<ShortenResult> for SubmissionState {
    fn from(result: ShortenResult) -> Self {
        Self::Resolved {
            short_url: result.short_url,
            long_url: result.long_url,
        }
    }
}

/// Reducer state: the visible submission state plus the id of the newest
/// request, which is the only one allowed to settle it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionLifecycle {
    pub state: SubmissionState,
    pub latest_request: Option<RequestId>,
}

impl UiState for SubmissionLifecycle {}

impl SubmissionLifecycle {
    /// True when a completion for `request_id` would be applied.
    pub fn accepts(&self, request_id: RequestId) -> bool {
        self.state.is_requesting() && self.latest_request == Some(request_id)
    }
}
