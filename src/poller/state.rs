/// Everything the poll loop carries from one cycle to the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    cursor: i64,
    last_error_message: Option<String>,
}

impl PollState {
    pub fn starting_at(cursor: i64) -> Self {
        Self {
            cursor,
            last_error_message: None,
        }
    }

    pub fn cursor(&self) -> i64 {
        self.cursor
    }

    #[cfg(test)]
    pub fn last_error_message(&self) -> Option<&str> {
        self.last_error_message.as_deref()
    }

    /// A zero `current_date` keeps the previous window start.
    pub(crate) fn advance_cursor(&mut self, current_date: i64) {
        if current_date != 0 {
            self.cursor = current_date;
        }
    }

    pub(crate) fn is_repeat_error(&self, message: &str) -> bool {
        self.last_error_message.as_deref() == Some(message)
    }

    pub(crate) fn remember_error(&mut self, message: String) {
        self.last_error_message = Some(message);
    }
}
