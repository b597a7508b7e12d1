//! # Dogdex Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The `BreedProvider` port trait
//! - The `CachingBreedProvider` memoizing decorator
//!
//! ## Architecture Principles
//! - Only depends on `dogdex-domain`
//! - No HTTP or platform code
//! - All external lookups via traits

pub mod breeds;

// Re-export specific items to avoid ambiguity
pub use breeds::caching::CachingBreedProvider;
pub use breeds::ports::BreedProvider;
