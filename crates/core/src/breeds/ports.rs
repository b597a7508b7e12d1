//! Port interfaces for breed lookup

use async_trait::async_trait;
use dogdex_domain::{Result, SubBreeds};

/// Trait for looking up the recognized sub-breeds of a breed
///
/// Implementations must collapse every underlying failure mode (transport,
/// protocol, parsing) into `DogdexError::BreedNotFound` carrying the
/// requested breed name; no other error kind may cross this boundary.
#[async_trait]
pub trait BreedProvider: Send + Sync {
    /// Return the sub-breed names for the given breed, in provider order
    async fn sub_breeds(&self, breed: &str) -> Result<SubBreeds>;
}
