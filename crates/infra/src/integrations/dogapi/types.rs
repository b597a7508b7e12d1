//! dog.ceo API response types

use serde::Deserialize;
use serde_json::Value;

pub(crate) const STATUS_SUCCESS: &str = "success";

/// Envelope returned by every dog.ceo endpoint.
///
/// On success `message` holds the payload (an array of sub-breed names for
/// the list endpoint); on error it holds a human-readable string, which is
/// why it is kept as a raw [`Value`] until the status has been checked.
#[derive(Debug, Deserialize)]
pub(crate) struct BreedListResponse {
    pub status: String,
    #[serde(default)]
    pub message: Value,
}

impl BreedListResponse {
    pub(crate) fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}
