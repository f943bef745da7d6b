//! Marker trait for intents.

/// Something that happened: user input or a system event such as a
/// service completion. Reducers consume intents to produce new states.
pub trait Intent: Send + 'static {}
