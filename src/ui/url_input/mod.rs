//! URL text field.
//!
//! Holds what the user is typing. No validation happens here; a bad URL is
//! only reported after the Shortening Service rejects it.

mod intent;
mod reducer;
mod state;

pub use intent::UrlInputIntent;
pub use reducer::UrlInputReducer;
pub use state::UrlInputState;
