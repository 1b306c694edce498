use reqwest::Url;
use teloxide::types::{ChatId, Recipient};
use thiserror::Error;

use super::defaults::{PRACTICUM_TOKEN_VAR, TELEGRAM_CHAT_ID_VAR, TELEGRAM_TOKEN_VAR};
use super::schema::{Config, Credentials, Settings};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse settings file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("missing required environment variables: {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),
    #[error("invalid config: {0}")]
    Validation(String),
}

impl Credentials {
    /// Collects the three secrets through `lookup`, reporting every missing
    /// one at once. Whitespace-only values count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing = Vec::new();
        let mut read = |name: &'static str| match lookup(name) {
            Some(value) if !value.trim().is_empty() => value,
            _ => {
                log::debug!("credential_missing name={}", name);
                missing.push(name);
                String::new()
            }
        };

        let practicum_token = read(PRACTICUM_TOKEN_VAR);
        let telegram_token = read(TELEGRAM_TOKEN_VAR);
        let telegram_chat_id = read(TELEGRAM_CHAT_ID_VAR);

        if !missing.is_empty() {
            return Err(ConfigError::MissingCredentials(missing));
        }

        Ok(Self {
            practicum_token,
            telegram_token,
            telegram_chat_id: telegram_chat_id.trim().to_string(),
        })
    }
}

impl Settings {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry_period_secs == 0 {
            return Err(ConfigError::Validation(
                "retry_period_secs must be greater than 0".to_string(),
            ));
        }

        let endpoint = Url::parse(&self.endpoint).map_err(|error| {
            ConfigError::Validation(format!("endpoint is not a valid URL: {}", error))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "endpoint must use http or https, got {}",
                endpoint.scheme()
            )));
        }

        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.settings.validate()?;
        self.chat_recipient()?;
        Ok(())
    }

    /// Numeric chat ids address users and groups, `@name` addresses a public
    /// channel.
    pub fn chat_recipient(&self) -> Result<Recipient, ConfigError> {
        let raw = self.credentials.telegram_chat_id.as_str();

        if let Ok(id) = raw.parse::<i64>() {
            return Ok(Recipient::Id(ChatId(id)));
        }

        if raw.len() > 1 && raw.starts_with('@') {
            return Ok(Recipient::ChannelUsername(raw.to_string()));
        }

        Err(ConfigError::Validation(format!(
            "{} must be a numeric chat id or an @channel username",
            TELEGRAM_CHAT_ID_VAR
        )))
    }
}
