use crate::{ConfigError, ConfigErrorResult};

use std::str::FromStr;
use std::time::Duration;

use serde::Deserialize;

pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Which user-store implementation to construct
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    /// Process-local map, lost on exit
    #[default]
    Memory,
    /// Realtime database REST endpoint
    Realtime,
}

impl StoreBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Realtime => "realtime",
        }
    }
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    #[track_caller]
    fn from_str(s: &str) -> ConfigErrorResult<Self> {
        match s.to_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "realtime" => Ok(Self::Realtime),
            other => Err(ConfigError::store(format!(
                "unknown store backend '{other}' (expected memory|realtime)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Database root URL, e.g. https://<project>.firebaseio.com/users
    pub base_url: Option<String>,
    /// Database secret or ID token, sent as the `auth` query parameter
    pub auth_token: Option<String>,
    /// Per-request timeout. 0 = transport default
    pub request_timeout_secs: u64,
}

impl StoreConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0).then(|| Duration::from_secs(self.request_timeout_secs))
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS {
            return Err(ConfigError::store(format!(
                "store.request_timeout_secs must be 0-{}, got {}",
                MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        if self.backend == StoreBackend::Realtime {
            let Some(url) = self.base_url.as_deref() else {
                return Err(ConfigError::store(
                    "store.base_url is required when store.backend = \"realtime\"",
                ));
            };
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::store(format!(
                    "store.base_url must start with http:// or https://, got '{url}'"
                )));
            }
        }

        Ok(())
    }
}
