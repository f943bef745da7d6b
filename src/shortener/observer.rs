use crate::service::{ShortenError, ShortenResult};

/// Receives settled submissions from the controller.
///
/// Presentation concerns (toasts, clearing the input) hang off this trait so
/// the controller can run without any rendering environment. Called after the
/// state has changed; stale completions never reach observers.
pub trait SubmissionObserver: Send {
    fn on_resolved(&mut self, _result: &ShortenResult) {}

    fn on_failed(&mut self, _error: &ShortenError) {}
}
