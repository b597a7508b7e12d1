//! External service integrations

pub mod dogapi;

pub use dogapi::DogApiBreedProvider;
