//! Model-View-Intent (MVI) primitives shared by every stateful piece of the app.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain value describing what the view shows
//! - **Intent**: a key press, a paste, a service completion, a timer tick
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! The submission lifecycle, the URL input and the toast line are all built
//! on these traits.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
