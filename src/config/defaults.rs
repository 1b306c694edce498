pub(super) const PRACTICUM_TOKEN_VAR: &str = "PRACTICUM_TOKEN";
pub(super) const TELEGRAM_TOKEN_VAR: &str = "TELEGRAM_TOKEN";
pub(super) const TELEGRAM_CHAT_ID_VAR: &str = "TELEGRAM_CHAT_ID";

pub(super) fn default_retry_period_secs() -> u64 {
    600
}

pub(super) fn default_endpoint() -> String {
    "https://practicum.yandex.ru/api/user_api/homework_statuses/".to_string()
}
