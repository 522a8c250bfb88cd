/*
[INPUT]:  Optional YAML configuration file and CLI overrides
[OUTPUT]: Endpoint configuration and a ready LoginManager
[POS]:    Configuration layer - challenge service endpoints
[UPDATE]: When adding new configuration options
*/

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use memo_auth_adapter::http::client::{
    LENS_BASE_URL, LENS_ORIGIN, MIDDLEWARE_BASE_URL, MIDDLEWARE_ORIGIN,
};
use memo_auth_adapter::{
    ClientConfig, FetchMode, LensClient, LoginManager, MemoAuthError, MiddlewareClient,
};

/// Top-level configuration for the login helper
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EndpointsConfig {
    /// MEMO middleware challenge endpoint
    #[serde(default = "default_middleware")]
    pub middleware: ServiceEndpoint,
    /// Lens GraphQL endpoint
    #[serde(default = "default_lens")]
    pub lens: ServiceEndpoint,
    /// Sequential or concurrent challenge fetching
    #[serde(default)]
    pub fetch_mode: FetchMode,
}

/// Endpoint of one challenge-issuing service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceEndpoint {
    /// Base URL of the service
    pub url: String,
    /// Value of the `Origin` header sent with every request
    pub origin: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            middleware: default_middleware(),
            lens: default_lens(),
            fetch_mode: FetchMode::default(),
        }
    }
}

fn default_middleware() -> ServiceEndpoint {
    ServiceEndpoint {
        url: MIDDLEWARE_BASE_URL.to_string(),
        origin: MIDDLEWARE_ORIGIN.to_string(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_lens() -> ServiceEndpoint {
    ServiceEndpoint {
        url: LENS_BASE_URL.to_string(),
        origin: LENS_ORIGIN.to_string(),
        timeout_secs: default_timeout_secs(),
    }
}

fn default_timeout_secs() -> u64 {
    60
}

impl ServiceEndpoint {
    /// HTTP client settings for this endpoint
    pub fn client_config(&self) -> Result<ClientConfig, MemoAuthError> {
        if self.timeout_secs == 0 {
            return Err(MemoAuthError::Config(format!(
                "timeout_secs for {} must be greater than zero",
                self.url
            )));
        }

        let defaults = ClientConfig::default();
        let timeout = Duration::from_secs(self.timeout_secs);
        Ok(ClientConfig {
            timeout,
            connect_timeout: defaults.connect_timeout.min(timeout),
        })
    }
}

impl EndpointsConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Apply command-line overrides on top of file values
    pub fn apply_overrides(
        &mut self,
        middleware_url: Option<String>,
        lens_url: Option<String>,
        concurrent: bool,
    ) {
        if let Some(url) = middleware_url {
            self.middleware.url = url;
        }
        if let Some(url) = lens_url {
            self.lens.url = url;
        }
        if concurrent {
            self.fetch_mode = FetchMode::Concurrent;
        }
    }

    /// Middleware then Lens, in the order their output is printed
    pub fn build_login_manager(&self) -> Result<LoginManager, MemoAuthError> {
        let middleware = MiddlewareClient::with_config_and_base_url(
            self.middleware.client_config()?,
            &self.middleware.url,
            &self.middleware.origin,
        )?;
        let lens = LensClient::with_config_and_base_url(
            self.lens.client_config()?,
            &self.lens.url,
            &self.lens.origin,
        )?;

        Ok(LoginManager::new(vec![Box::new(middleware), Box::new(lens)])
            .with_fetch_mode(self.fetch_mode))
    }
}
