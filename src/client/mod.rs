//! Server client for fetching the pipeline configuration

pub mod config;
pub mod error;

use crate::core::Configuration;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

pub use config::{ClientConfig, Settings};
pub use error::{FetchError, SettingsError};

/// Trait for configuration sources - allows for different implementations
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Fetch and decode one configuration snapshot
    async fn fetch_config(&self) -> Result<Configuration, FetchError>;
}

/// Client reading the config XML from a GoCD server
#[derive(Debug, Clone)]
pub struct GoCdClient {
    config: ClientConfig,
    http: Client,
}

impl GoCdClient {
    /// Create a new server client
    ///
    /// # Errors
    /// Returns [`FetchError::Transport`] if the HTTP client can't be built.
    pub fn new(config: ClientConfig) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout_secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(timeout_secs));
        }
        let http = builder.build().map_err(FetchError::Transport)?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

#[async_trait]
impl ConfigSource for GoCdClient {
    /// Fetch the config XML with a single authenticated GET
    ///
    /// # Errors
    /// - [`FetchError::Transport`] when the server can't be reached
    /// - [`FetchError::ResponseRead`] when the body can't be read
    /// - [`FetchError::Server`] for any status other than 200
    /// - [`FetchError::Parse`] when the body isn't a valid configuration
    async fn fetch_config(&self) -> Result<Configuration, FetchError> {
        let url = self.config.config_xml_url();
        debug!(url = %url, "Fetching server configuration");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.config.username, Some(&self.config.password))
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        let body = response.bytes().await.map_err(FetchError::ResponseRead)?;

        if status != StatusCode::OK {
            warn!(url = %url, status = %status, "Server rejected config request");
            return Err(FetchError::Server {
                status: status.as_u16(),
            });
        }

        debug!(url = %url, bytes = body.len(), "Received server configuration");
        Ok(Configuration::from_xml_bytes(&body)?)
    }
}
