use crate::service::{ShortenError, ShortenResult};
use crate::ui::mvi::Intent;

use super::state::RequestId;

#[derive(Debug, Clone)]
pub enum SubmissionIntent {
    /// A request was issued for the current input.
    Submit { request_id: RequestId },

    /// The service answered with a usable result.
    Succeeded {
        request_id: RequestId,
        result: ShortenResult,
    },

    /// The service call failed or returned nothing usable.
    Failed {
        request_id: RequestId,
        error: ShortenError,
    },

    /// Back to `Idle`; any in-flight request becomes stale.
    Reset,
}

impl Intent for SubmissionIntent {}
