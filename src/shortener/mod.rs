//! Request lifecycle for shorten submissions.
//!
//! # Architecture
//!
//! Uses the MVI primitives from [`crate::ui::mvi`]:
//! - `state.rs` - `SubmissionState` (Idle → Requesting → Resolved | Failed)
//! - `intent.rs` - submit and completion events, tagged with a request id
//! - `reducer.rs` - pure transitions, stale completions dropped
//! - `controller.rs` - spawns service calls and feeds completions back
//! - `observer.rs` - hooks for side effects such as toasts

mod controller;
mod intent;
mod observer;
mod reducer;
mod state;

pub use controller::{Completion, ControllerOptions, SubmissionController};
pub use intent::SubmissionIntent;
pub use observer::SubmissionObserver;
pub use reducer::SubmissionReducer;
pub use state::{RequestId, SubmissionLifecycle, SubmissionState};
