//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen.
///
/// `reduce` must stay pure: anything with an effect (spawning a request,
/// writing the clipboard, showing a toast) happens around the dispatch,
/// never inside it.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
