//! Breed lookup: the provider port and its caching decorator

pub mod caching;
pub mod ports;

pub use caching::CachingBreedProvider;
pub use ports::BreedProvider;
