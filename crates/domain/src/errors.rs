//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Dogdex
///
/// `BreedNotFound` is the only variant that crosses the `BreedProvider`
/// boundary: provider implementations collapse every underlying failure
/// mode (transport, protocol, parsing) into it before returning. The
/// remaining variants exist so infrastructure code can describe what
/// actually went wrong before that collapse happens.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DogdexError {
    /// The requested breed is unknown or the lookup could not be completed.
    /// Carries the requested breed name.
    #[error("Breed not found: {0}")]
    BreedNotFound(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl DogdexError {
    /// Whether this error is the not-found kind for the given breed.
    pub fn is_breed_not_found(&self, breed: &str) -> bool {
        matches!(self, Self::BreedNotFound(b) if b == breed)
    }
}

/// Result type alias for Dogdex operations
pub type Result<T> = std::result::Result<T, DogdexError>;
