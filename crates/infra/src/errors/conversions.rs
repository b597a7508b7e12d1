//! Conversions from external infrastructure errors into domain errors.

use dogdex_domain::DogdexError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DogdexError);

impl From<InfraError> for DogdexError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DogdexError> for InfraError {
    fn from(value: DogdexError) -> Self {
        InfraError(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → DogdexError */
/* -------------------------------------------------------------------------- */

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        if value.is_timeout() {
            return InfraError(DogdexError::Network("HTTP request timed out".into()));
        }

        if value.is_connect() {
            return InfraError(DogdexError::Network("HTTP connection failure".into()));
        }

        if value.is_builder() {
            return InfraError(DogdexError::Config(format!("invalid HTTP client setup: {value}")));
        }

        if value.is_decode() {
            return InfraError(DogdexError::InvalidResponse(value.to_string()));
        }

        if let Some(status) = value.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
            return InfraError(DogdexError::Network(message));
        }

        InfraError(DogdexError::Network(value.to_string()))
    }
}
