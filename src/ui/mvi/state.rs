//! Marker trait for reducer-owned state.

/// State values are cloned to produce new states, compared to detect
/// changes, and start from `Default`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
