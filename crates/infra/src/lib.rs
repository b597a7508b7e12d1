//! # Dogdex Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - The dog.ceo breed-listing client (`DogApiBreedProvider`)
//! - A thin HTTP client wrapper with request logging
//! - Configuration loading (environment and file)
//!
//! ## Architecture
//! - Implements traits defined in `dogdex-core`
//! - Depends on `dogdex-domain` and `dogdex-core`
//! - Contains all "impure" code (I/O)

pub mod config;
pub mod errors;
pub mod http;
pub mod integrations;

// Re-export commonly used items
pub use http::HttpClient;
pub use integrations::dogapi::DogApiBreedProvider;
