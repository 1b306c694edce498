use std::{collections::HashMap, fs};

use tempfile::tempdir;
use teloxide::types::{ChatId, Recipient};

use super::{Config, ConfigError, Credentials, Settings, load_settings};

fn env_with(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

fn config_with_chat(chat_id: &str) -> Config {
    Config {
        credentials: Credentials {
            practicum_token: "practicum-secret".to_string(),
            telegram_token: "123456:abc".to_string(),
            telegram_chat_id: chat_id.to_string(),
        },
        settings: Settings::default(),
    }
}

#[test]
fn credentials_are_read_when_all_present() {
    let env = env_with(&[
        ("PRACTICUM_TOKEN", "practicum"),
        ("TELEGRAM_TOKEN", "123456:abc"),
        ("TELEGRAM_CHAT_ID", " 42 "),
    ]);

    let credentials =
        Credentials::from_lookup(|name| env.get(name).cloned()).expect("credentials present");

    assert_eq!(credentials.practicum_token, "practicum");
    assert_eq!(credentials.telegram_token, "123456:abc");
    assert_eq!(credentials.telegram_chat_id, "42");
}

#[test]
fn every_missing_credential_is_reported() {
    let env = env_with(&[("TELEGRAM_TOKEN", "123456:abc"), ("TELEGRAM_CHAT_ID", "   ")]);

    let error = Credentials::from_lookup(|name| env.get(name).cloned())
        .expect_err("two credentials are missing");

    match error {
        ConfigError::MissingCredentials(names) => {
            assert_eq!(names, vec!["PRACTICUM_TOKEN", "TELEGRAM_CHAT_ID"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn credentials_debug_hides_tokens() {
    let config = config_with_chat("42");
    let rendered = format!("{:?}", config.credentials);

    assert!(!rendered.contains("123456:abc"));
    assert!(!rendered.contains("practicum-secret"));
    assert!(rendered.contains("42"));
}

#[test]
fn missing_settings_file_falls_back_to_defaults() {
    let temp = tempdir().expect("temp dir");
    let settings = load_settings(temp.path().join("absent.toml")).expect("defaults");

    assert_eq!(settings.retry_period_secs, 600);
    assert_eq!(
        settings.endpoint,
        "https://practicum.yandex.ru/api/user_api/homework_statuses/"
    );
}

#[test]
fn settings_file_overrides_defaults() {
    let temp = tempdir().expect("temp dir");
    let path = temp.path().join("homework_bot.toml");
    fs::write(
        &path,
        "retry_period_secs = 60\nendpoint = \"http://127.0.0.1:8080/statuses/\"\n",
    )
    .expect("write settings");

    let settings = load_settings(&path).expect("settings parse");

    assert_eq!(settings.retry_period_secs, 60);
    assert_eq!(settings.endpoint, "http://127.0.0.1:8080/statuses/");
}

#[test]
fn zero_retry_period_is_rejected() {
    let temp = tempdir().expect("temp dir");
    let path = temp.path().join("homework_bot.toml");
    fs::write(&path, "retry_period_secs = 0\n").expect("write settings");

    let error = load_settings(&path).expect_err("zero interval must fail");
    assert!(matches!(error, ConfigError::Validation(_)));
}

#[test]
fn non_http_endpoint_is_rejected() {
    let settings = Settings {
        endpoint: "ftp://example.com/statuses".to_string(),
        ..Settings::default()
    };

    assert!(matches!(
        settings.validate(),
        Err(ConfigError::Validation(_))
    ));
}

#[test]
fn unknown_settings_key_is_a_parse_error() {
    let temp = tempdir().expect("temp dir");
    let path = temp.path().join("homework_bot.toml");
    fs::write(&path, "retry_period = 60\n").expect("write settings");

    let error = load_settings(&path).expect_err("unknown key must fail");
    assert!(matches!(error, ConfigError::Parse { .. }));
}

#[test]
fn chat_recipient_accepts_ids_and_channel_names() {
    assert!(matches!(
        config_with_chat("-1001234567890").chat_recipient(),
        Ok(Recipient::Id(ChatId(-1001234567890)))
    ));
    assert!(matches!(
        config_with_chat("@homework_updates").chat_recipient(),
        Ok(Recipient::ChannelUsername(name)) if name == "@homework_updates"
    ));
    assert!(config_with_chat("not-a-chat").validate().is_err());
}
