mod config;
mod error;
mod homework;
mod jobs;
mod notifier;
mod poller;
mod practicum;

use std::process::ExitCode;

use chrono::Utc;
use teloxide::prelude::*;
use tokio::net::lookup_host;
use tokio::time::Duration;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, ConfigError, load_config};
use crate::jobs::run_poll_job;
use crate::notifier::TelegramSink;
use crate::poller::PollState;
use crate::practicum::PracticumClient;

const SETTINGS_PATH_VAR: &str = "HOMEWORK_BOT_CONFIG";
const DEFAULT_SETTINGS_PATH: &str = "homework_bot.toml";

fn init_json_logging() {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

async fn log_dns_probe(host: &str) {
    match lookup_host((host, 443)).await {
        Ok(mut addresses) => {
            if let Some(address) = addresses.next() {
                log::info!("dns_probe_ok host={} address={}", host, address);
            } else {
                log::warn!("dns_probe_degraded host={} reason=no_records", host);
            }
        }
        Err(error) => {
            log::warn!(
                "dns_probe_degraded host={} reason=lookup_failed error={}",
                host,
                error
            );
        }
    }
}

fn endpoint_host(endpoint: &str) -> Option<String> {
    reqwest::Url::parse(endpoint)
        .ok()?
        .host_str()
        .map(|host| host.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    init_json_logging();

    let settings_path =
        std::env::var(SETTINGS_PATH_VAR).unwrap_or_else(|_| DEFAULT_SETTINGS_PATH.to_string());

    let config: Config = match load_config(&settings_path) {
        Ok(config) => config,
        Err(error @ ConfigError::MissingCredentials(_)) => {
            log::error!("CRITICAL: {}", error);
            return ExitCode::FAILURE;
        }
        Err(error) => {
            log::error!("Configuration error: {}", error);
            return ExitCode::FAILURE;
        }
    };
    log::debug!("credentials_present settings={:?}", config.settings);

    let recipient = match config.chat_recipient() {
        Ok(recipient) => recipient,
        Err(error) => {
            log::error!("Configuration error: {}", error);
            return ExitCode::FAILURE;
        }
    };

    log::info!("Homework status bot is starting...");
    log_dns_probe("api.telegram.org").await;
    if let Some(host) = endpoint_host(&config.settings.endpoint) {
        log_dns_probe(&host).await;
    }

    let source = PracticumClient::new(
        config.settings.endpoint.clone(),
        config.credentials.practicum_token.clone(),
    );
    let sink = TelegramSink::new(Bot::new(&config.credentials.telegram_token), recipient);
    let state = PollState::starting_at(Utc::now().timestamp());

    log::info!(
        "poll_loop_started endpoint={} retry_period_secs={} cursor={}",
        source.endpoint(),
        config.settings.retry_period_secs,
        state.cursor()
    );

    run_poll_job(
        source,
        sink,
        state,
        Duration::from_secs(config.settings.retry_period_secs),
    )
    .await;

    ExitCode::SUCCESS
}
