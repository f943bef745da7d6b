//! Drives the submission lifecycle: issues service calls and applies their
//! completions through [`SubmissionReducer`].

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use crate::config::{Config, SubmitPolicy};
use crate::service::{ShortenError, ShortenRequest, ShortenResult, ShorteningService};
use crate::ui::mvi::Reducer;

use super::intent::SubmissionIntent;
use super::observer::SubmissionObserver;
use super::reducer::SubmissionReducer;
use super::state::{RequestId, SubmissionLifecycle, SubmissionState};

/// Result of one service call, tagged with the request that issued it.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub request_id: RequestId,
    pub outcome: Result<ShortenResult, ShortenError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerOptions {
    pub policy: SubmitPolicy,
    /// Upper bound on a single call; expiry settles as `ServiceUnavailable`.
    pub request_timeout: Duration,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            policy: SubmitPolicy::default(),
            request_timeout: Duration::from_secs(15),
        }
    }
}

impl From<&Config> for ControllerOptions {
    fn from(config: &Config) -> Self {
        // A little slack over the HTTP timeout so the client reports first.
        let seconds = u64::from(config.service.timeout_seconds) + 2;
        Self {
            policy: config.submit.policy,
            request_timeout: Duration::from_secs(seconds),
        }
    }
}

/// Owner of the submission state.
///
/// `submit` must be called from within a tokio runtime. Completions come back
/// over a channel and are applied by `drain_completions` or
/// `next_completion`, so the state has a single writer.
pub struct SubmissionController {
    service: Arc<dyn ShorteningService>,
    options: ControllerOptions,
    lifecycle: SubmissionLifecycle,
    next_request: RequestId,
    completions_tx: mpsc::UnboundedSender<Completion>,
    completions_rx: mpsc::UnboundedReceiver<Completion>,
    observers: Vec<Box<dyn SubmissionObserver>>,
}

impl SubmissionController {
    pub fn new(service: Arc<dyn ShorteningService>, options: ControllerOptions) -> Self {
        let (completions_tx, completions_rx) = mpsc::unbounded_channel();
        Self {
            service,
            options,
            lifecycle: SubmissionLifecycle::default(),
            next_request: 1,
            completions_tx,
            completions_rx,
            observers: Vec::new(),
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn SubmissionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn add_observer(&mut self, observer: Box<dyn SubmissionObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &SubmissionState {
        &self.lifecycle.state
    }

    pub fn lifecycle(&self) -> &SubmissionLifecycle {
        &self.lifecycle
    }

    pub fn policy(&self) -> SubmitPolicy {
        self.options.policy
    }

    /// Start a request for `text`.
    ///
    /// The state is `Requesting` when this returns. Returns `None` when the
    /// policy rejects a submit while another request is in flight.
    pub fn submit(&mut self, text: &str) -> Option<RequestId> {
        if self.lifecycle.state.is_requesting()
            && self.options.policy == SubmitPolicy::IgnoreWhileRequesting
        {
            tracing::debug!(
                in_flight = ?self.lifecycle.latest_request,
                "Submit ignored while a request is in flight"
            );
            return None;
        }

        let request_id = self.next_request;
        self.next_request += 1;

        if self.lifecycle.state.is_requesting() {
            tracing::debug!(
                superseded = ?self.lifecycle.latest_request,
                request_id,
                "Superseding in-flight request"
            );
        }

        self.dispatch(SubmissionIntent::Submit { request_id });
        tracing::info!(request_id, long_url = %text, "Shorten request issued");

        let service = Arc::clone(&self.service);
        let tx = self.completions_tx.clone();
        let request = ShortenRequest::new(text);
        let deadline = self.options.request_timeout;

        tokio::spawn(async move {
            // Inner task so a panicking service still produces a completion.
            let call = tokio::spawn(async move {
                match timeout(deadline, service.shorten(&request)).await {
                    Ok(response) => response.and_then(ShortenResult::from_response),
                    Err(_) => Err(ShortenError::unavailable(format!(
                        "Request timed out after {}s",
                        deadline.as_secs()
                    ))),
                }
            });

            let outcome = match call.await {
                Ok(outcome) => outcome,
                Err(join_err) => Err(ShortenError::unavailable(format!(
                    "Shorten task failed: {join_err}"
                ))),
            };

            let _ = tx.send(Completion {
                request_id,
                outcome,
            });
        });

        Some(request_id)
    }

    /// Return to `Idle`. A request still in flight will be ignored.
    pub fn reset(&mut self) {
        self.dispatch(SubmissionIntent::Reset);
    }

    /// Apply a completion. Returns `true` if it changed the state.
    pub fn apply(&mut self, completion: Completion) -> bool {
        let Completion {
            request_id,
            outcome,
        } = completion;

        if !self.lifecycle.accepts(request_id) {
            tracing::debug!(
                request_id,
                latest = ?self.lifecycle.latest_request,
                "Dropping stale completion"
            );
            return false;
        }

        match outcome {
            Ok(result) => {
                tracing::info!(request_id, short_url = %result.short_url, "Shorten request resolved");
                self.dispatch(SubmissionIntent::Succeeded {
                    request_id,
                    result: result.clone(),
                });
                for observer in &mut self.observers {
                    observer.on_resolved(&result);
                }
            }
            Err(error) => {
                tracing::warn!(request_id, error = %error, "Shorten request failed");
                self.dispatch(SubmissionIntent::Failed {
                    request_id,
                    error: error.clone(),
                });
                for observer in &mut self.observers {
                    observer.on_failed(&error);
                }
            }
        }
        true
    }

    /// Apply every completion already received. Never blocks.
    pub fn drain_completions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completions_rx.try_recv() {
            if self.apply(completion) {
                applied += 1;
            }
        }
        applied
    }

    /// Wait for the next completion and apply it.
    ///
    /// Returns `true` if it changed the state, `false` for a stale one.
    pub async fn next_completion(&mut self) -> bool {
        // The controller keeps a sender alive, so `recv` only returns `None`
        // after the channel is closed, which never happens here.
        match self.completions_rx.recv().await {
            Some(completion) => self.apply(completion),
            None => false,
        }
    }

    /// Wait until the state leaves `Requesting`.
    pub async fn settle(&mut self) -> &SubmissionState {
        while self.lifecycle.state.is_requesting() {
            self.next_completion().await;
        }
        &self.lifecycle.state
    }

    fn dispatch(&mut self, intent: SubmissionIntent) {
        self.lifecycle = SubmissionReducer::reduce(std::mem::take(&mut self.lifecycle), intent);
    }
}
