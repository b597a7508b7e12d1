use std::time::Duration;

use dogdex_domain::{DogApiConfig, DogdexError};
use reqwest::{Client as ReqwestClient, Response};
use tracing::debug;

use crate::errors::InfraError;

/// HTTP client with request/response logging.
///
/// Requests are sent exactly once; whether a failed call should be
/// reissued is the caller's decision.
#[derive(Clone)]
pub struct HttpClient {
    client: ReqwestClient,
}

impl HttpClient {
    /// Start building a new HTTP client.
    pub fn builder() -> HttpClientBuilder {
        HttpClientBuilder::default()
    }

    /// Build a client from the dog.ceo API configuration.
    pub fn from_config(config: &DogApiConfig) -> Result<Self, DogdexError> {
        Self::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()
    }

    /// Send a GET request to the given URL.
    pub async fn get(&self, url: &str) -> Result<Response, DogdexError> {
        debug!(%url, "sending HTTP GET request");

        let response = self.client.get(url).send().await.map_err(|err| {
            debug!(%url, error = %err, "HTTP request failed");
            let infra: InfraError = err.into();
            DogdexError::from(infra)
        })?;

        debug!(%url, status = %response.status(), "received HTTP response");
        Ok(response)
    }
}

/// Builder for [`HttpClient`].
#[derive(Debug)]
pub struct HttpClientBuilder {
    timeout: Duration,
    user_agent: Option<String>,
}

impl Default for HttpClientBuilder {
    fn default() -> Self {
        Self { timeout: Duration::from_secs(30), user_agent: None }
    }
}

impl HttpClientBuilder {
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<HttpClient, DogdexError> {
        let mut builder = ReqwestClient::builder().timeout(self.timeout).no_proxy();

        if let Some(agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }

        let client = builder.build().map_err(|err| {
            let infra: InfraError = err.into();
            DogdexError::from(infra)
        })?;

        Ok(HttpClient { client })
    }
}
