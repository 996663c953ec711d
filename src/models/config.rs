//! Configuration model loaded from external sources.

use std::collections::HashMap;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Environment prefix, e.g. `PRODUCTS_BASE_URL`.
const ENV_PREFIX: &str = "PRODUCTS";

#[derive(Clone, Debug, Deserialize)]
/// HTTP client settings for talking to the product API.
///
/// `base_url` is the proxy target every relative request path is resolved
/// against. The remaining fields are passed to the client builder untouched;
/// when absent the client defaults apply.
pub struct ClientConfig {
    pub base_url: String,
    #[serde(default)]
    pub proxy: Option<String>,
    /// Honour `HTTP_PROXY`/`HTTPS_PROXY`/`NO_PROXY` from the environment.
    #[serde(default = "default_system_proxy")]
    pub system_proxy: bool,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_system_proxy() -> bool {
    true
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            proxy: None,
            system_proxy: true,
            timeout_secs: None,
            headers: HashMap::new(),
        }
    }

    /// Loads the configuration from an optional YAML file, overridden by
    /// `PRODUCTS_*` environment variables.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Self::load_from(path, env_source())
    }

    fn load_from(path: &str, env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
