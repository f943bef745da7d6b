//! Transient one-line notifications ("Copied", "Could not shorten URL").

mod intent;
mod reducer;
mod state;

pub use intent::ToastIntent;
pub use reducer::ToastReducer;
pub use state::{ToastLevel, ToastState};
