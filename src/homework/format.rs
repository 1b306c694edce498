use serde_json::Value;

use crate::error::PollError;

use super::verdict::HomeworkStatus;

const REQUIRED_KEYS: [&str; 2] = ["homework_name", "status"];

/// Builds the chat message for one homework record.
pub fn parse_status(homework: &Value) -> Result<String, PollError> {
    let Value::Object(fields) = homework else {
        return Err(PollError::Shape { expected: "объект" });
    };

    let missing: Vec<&'static str> = REQUIRED_KEYS
        .into_iter()
        .filter(|key| !fields.contains_key(*key))
        .collect();
    if !missing.is_empty() {
        return Err(PollError::MissingField { fields: missing });
    }

    let homework_name = fields["homework_name"]
        .as_str()
        .ok_or(PollError::TypeMismatch {
            field: "homework_name",
            expected: "строка",
        })?;

    let status = match &fields["status"] {
        Value::String(raw) => HomeworkStatus::parse(raw),
        _ => None,
    }
    .ok_or_else(|| PollError::UnknownStatus {
        status: status_text(&fields["status"]),
    })?;

    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        homework_name,
        status.verdict()
    ))
}

fn status_text(value: &Value) -> String {
    match value {
        Value::String(raw) => raw.clone(),
        other => other.to_string(),
    }
}
