//! Shortening Service boundary.
//!
//! The service is an external system that maps a long URL to a short one.
//! [`ShorteningService`] is the seam the lifecycle controller talks to;
//! [`GotinyClient`] is the HTTP implementation used by the binary.

mod client;
mod error;
mod types;

pub use client::GotinyClient;
pub use error::ShortenError;
pub use types::{ShortenRequest, ShortenResult, ShortenedLink};

use async_trait::async_trait;

/// An external service that shortens URLs.
///
/// Implementations return the raw response entries; normalization into a
/// [`ShortenResult`] happens in [`ShortenResult::from_response`].
#[async_trait]
pub trait ShorteningService: Send + Sync {
    async fn shorten(&self, request: &ShortenRequest) -> Result<Vec<ShortenedLink>, ShortenError>;
}
