use serde_json::Value;

use crate::error::PollError;

/// API payload after its shape has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedResponse {
    pub homeworks: Vec<Value>,
    pub current_date: i64,
}

/// Checks the decoded payload: object first, then `homeworks` (presence,
/// array), then `current_date` (presence, integer).
pub fn check_response(raw: Value) -> Result<ValidatedResponse, PollError> {
    let Value::Object(mut fields) = raw else {
        return Err(PollError::Shape { expected: "объект" });
    };

    let homeworks = match fields.remove("homeworks") {
        None => return Err(PollError::missing("homeworks")),
        Some(Value::Array(homeworks)) => homeworks,
        Some(_) => {
            return Err(PollError::TypeMismatch {
                field: "homeworks",
                expected: "список",
            });
        }
    };

    let current_date = match fields.get("current_date") {
        None => return Err(PollError::missing("current_date")),
        Some(value) => value.as_i64().ok_or(PollError::TypeMismatch {
            field: "current_date",
            expected: "целое число",
        })?,
    };

    Ok(ValidatedResponse {
        homeworks,
        current_date,
    })
}
