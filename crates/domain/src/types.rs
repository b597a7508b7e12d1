//! Common data types used throughout the application

/// Name of a breed, used as the lookup key for sub-breed queries.
///
/// Must be non-empty. Case handling and normalization are the concern of
/// the provider performing the lookup, not of callers or caches.
pub type BreedName = String;

/// Ordered list of sub-breed names as returned by a provider.
///
/// Order is preserved end to end; no uniqueness is imposed.
pub type SubBreeds = Vec<String>;
