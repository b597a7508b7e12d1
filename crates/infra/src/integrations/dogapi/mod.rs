//! dog.ceo breed-listing API integration

pub mod client;
pub(crate) mod types;

pub use client::DogApiBreedProvider;
