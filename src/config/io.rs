use std::{io::ErrorKind, path::Path};

use super::{
    schema::{Config, Credentials, Settings},
    validate::ConfigError,
};

/// Reads the optional settings file. A missing file yields the defaults.
pub fn load_settings(path: impl AsRef<Path>) -> Result<Settings, ConfigError> {
    let path = path.as_ref();
    let path_str = path.display().to_string();

    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(error) if error.kind() == ErrorKind::NotFound => {
            log::info!("settings_file_absent path={} using=defaults", path_str);
            return Ok(Settings::default());
        }
        Err(source) => {
            return Err(ConfigError::Read {
                path: path_str,
                source,
            });
        }
    };

    let settings: Settings = toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path_str,
        source,
    })?;
    settings.validate()?;
    Ok(settings)
}

/// Loads `.env` if present, then secrets from the environment and settings
/// from `settings_path`.
pub fn load_config(settings_path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    if let Err(error) = dotenvy::dotenv()
        && !error.not_found()
    {
        log::warn!("dotenv_load_failed error={}", error);
    }

    let credentials = Credentials::from_lookup(|name| std::env::var(name).ok())?;
    let settings = load_settings(settings_path)?;

    let config = Config {
        credentials,
        settings,
    };
    config.validate()?;
    Ok(config)
}
