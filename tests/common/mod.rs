//! Shared test utilities: a scripted Shortening Service stub, a recording
//! observer and an in-memory clipboard.

#![allow(dead_code, unused_imports)]

pub mod mock_service;

use async_trait::async_trait;
use linkshrink::clipboard::{ClipboardError, ClipboardSink};
use linkshrink::config::SubmitPolicy;
use linkshrink::service::{ShortenError, ShortenRequest, ShortenResult, ShortenedLink, ShorteningService};
use linkshrink::shortener::{ControllerOptions, SubmissionController, SubmissionObserver};
use parking_lot::Mutex;
use std::collections::{HashMap, VecDeque};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;

pub type Outcome = Result<Vec<ShortenedLink>, ShortenError>;

struct Scripted {
    outcome: Outcome,
    gate: Option<oneshot::Receiver<()>>,
}

/// Deterministic Shortening Service keyed by the submitted text.
///
/// Scripted outcomes are consumed in order per text; `fallback` answers
/// anything unscripted. A gated outcome is held back until its sender fires
/// (or is dropped).
pub struct StubService {
    scripts: Mutex<HashMap<String, VecDeque<Scripted>>>,
    fallback: Mutex<Outcome>,
    calls: Mutex<Vec<String>>,
}

impl StubService {
    pub fn new() -> Arc<Self> {
        Self::always(Ok(Vec::new()))
    }

    pub fn always(outcome: Outcome) -> Arc<Self> {
        Arc::new(Self {
            scripts: Mutex::new(HashMap::new()),
            fallback: Mutex::new(outcome),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn respond(&self, text: &str, outcome: Outcome) {
        self.scripts
            .lock()
            .entry(text.to_string())
            .or_default()
            .push_back(Scripted {
                outcome,
                gate: None,
            });
    }

    /// Script a response that is released by the returned sender.
    pub fn respond_gated(&self, text: &str, outcome: Outcome) -> oneshot::Sender<()> {
        let (tx, rx) = oneshot::channel();
        self.scripts
            .lock()
            .entry(text.to_string())
            .or_default()
            .push_back(Scripted {
                outcome,
                gate: Some(rx),
            });
        tx
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl ShorteningService for StubService {
    async fn shorten(&self, request: &ShortenRequest) -> Result<Vec<ShortenedLink>, ShortenError> {
        self.calls.lock().push(request.long_url.clone());

        let scripted = self
            .scripts
            .lock()
            .get_mut(&request.long_url)
            .and_then(|queue| queue.pop_front());

        match scripted {
            Some(Scripted { outcome, gate }) => {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                outcome
            }
            None => self.fallback.lock().clone(),
        }
    }
}

/// One response entry with `long` and `link` set.
pub fn link(long: &str, short: &str) -> Vec<ShortenedLink> {
    vec![ShortenedLink {
        long: long.to_string(),
        code: None,
        tiny: None,
        link: Some(short.to_string()),
    }]
}

pub fn controller(service: Arc<StubService>, policy: SubmitPolicy) -> SubmissionController {
    controller_with_timeout(service, policy, Duration::from_secs(5))
}

pub fn controller_with_timeout(
    service: Arc<StubService>,
    policy: SubmitPolicy,
    request_timeout: Duration,
) -> SubmissionController {
    let service: Arc<dyn ShorteningService> = service;
    SubmissionController::new(
        service,
        ControllerOptions {
            policy,
            request_timeout,
        },
    )
}

#[derive(Debug, Clone, PartialEq)]
pub enum Observed {
    Resolved(ShortenResult),
    Failed(ShortenError),
}

/// Observer that records every notification.
#[derive(Clone, Default)]
pub struct RecordingObserver {
    pub events: Arc<Mutex<Vec<Observed>>>,
}

impl RecordingObserver {
    pub fn events(&self) -> Vec<Observed> {
        self.events.lock().clone()
    }
}

impl SubmissionObserver for RecordingObserver {
    fn on_resolved(&mut self, result: &ShortenResult) {
        self.events.lock().push(Observed::Resolved(result.clone()));
    }

    fn on_failed(&mut self, error: &ShortenError) {
        self.events.lock().push(Observed::Failed(error.clone()));
    }
}

/// Clipboard that keeps copied text in memory.
#[derive(Clone, Default)]
pub struct MemoryClipboard {
    pub copied: Arc<Mutex<Vec<String>>>,
    pub fail: bool,
}

impl MemoryClipboard {
    pub fn last(&self) -> Option<String> {
        self.copied.lock().last().cloned()
    }
}

impl ClipboardSink for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write("denied".to_string()));
        }
        self.copied.lock().push(text.to_string());
        Ok(())
    }
}

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}
