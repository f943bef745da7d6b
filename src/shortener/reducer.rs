use crate::ui::mvi::Reducer;

use super::intent::SubmissionIntent;
use super::state::{SubmissionLifecycle, SubmissionState};

/// Pure transitions for the submission lifecycle.
///
/// Completions only apply when they carry the newest request id and the
/// state is still `Requesting`; anything else leaves the state untouched.
pub struct SubmissionReducer;

impl Reducer for SubmissionReducer {
    type State = SubmissionLifecycle;
    type Intent = SubmissionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            SubmissionIntent::Submit { request_id } => SubmissionLifecycle {
                state: SubmissionState::Requesting,
                latest_request: Some(request_id),
            },

            SubmissionIntent::Succeeded { request_id, result } => {
                if !state.accepts(request_id) {
                    return state;
                }
                SubmissionLifecycle {
                    state: SubmissionState::from(result),
                    latest_request: state.latest_request,
                }
            }

            SubmissionIntent::Failed { request_id, error } => {
                if !state.accepts(request_id) {
                    return state;
                }
                SubmissionLifecycle {
                    state: SubmissionState::Failed { error },
                    latest_request: state.latest_request,
                }
            }

            SubmissionIntent::Reset => SubmissionLifecycle::default(),
        }
    }
}
