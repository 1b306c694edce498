use std::fmt;

use serde::Deserialize;

use super::defaults::*;

#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub settings: Settings,
}

/// Secrets read from the process environment.
#[derive(Clone)]
pub struct Credentials {
    pub practicum_token: String,
    pub telegram_token: String,
    pub telegram_chat_id: String,
}

// Tokens must never reach the log stream.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("practicum_token", &"***")
            .field("telegram_token", &"***")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default = "default_retry_period_secs")]
    pub retry_period_secs: u64,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            retry_period_secs: default_retry_period_secs(),
            endpoint: default_endpoint(),
        }
    }
}
