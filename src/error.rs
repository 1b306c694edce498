use thiserror::Error;

/// Everything that can abort one poll cycle.
///
/// Display texts end up in the chat alert, so they are written for the
/// learner reading it.
#[derive(Debug, Error)]
pub enum PollError {
    #[error("ошибка при запросе к основному API: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("не удалось разобрать ответ API как JSON: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("некорректный статус ответа API: {status}")]
    UnexpectedStatus { status: u16 },
    #[error("в ответе приходит неожиданный тип данных, ожидался {expected}")]
    Shape { expected: &'static str },
    #[error("отсутствуют ключи: {}", .fields.join(", "))]
    MissingField { fields: Vec<&'static str> },
    #[error("неожиданный тип данных для ключа \"{field}\", ожидался {expected}")]
    TypeMismatch {
        field: &'static str,
        expected: &'static str,
    },
    #[error("неожиданный статус домашней работы в ответе API: {status}")]
    UnknownStatus { status: String },
}

impl PollError {
    pub fn missing(field: &'static str) -> Self {
        Self::MissingField {
            fields: vec![field],
        }
    }
}
