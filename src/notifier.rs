use teloxide::{prelude::*, types::Recipient};
use thiserror::Error;

#[derive(Debug, Error, Clone)]
#[error("{message}")]
pub struct DeliveryError {
    message: String,
}

impl DeliveryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<teloxide::RequestError> for DeliveryError {
    fn from(error: teloxide::RequestError) -> Self {
        Self::new(error.to_string())
    }
}

/// Outbound text channel to the learner's chat.
pub trait MessageSink {
    async fn send_text(&self, text: &str) -> Result<(), DeliveryError>;
}

pub struct TelegramSink {
    bot: Bot,
    chat: Recipient,
}

impl TelegramSink {
    pub fn new(bot: Bot, chat: Recipient) -> Self {
        Self { bot, chat }
    }
}

impl MessageSink for TelegramSink {
    async fn send_text(&self, text: &str) -> Result<(), DeliveryError> {
        self.bot.send_message(self.chat.clone(), text).await?;
        Ok(())
    }
}

/// Delivers `text` and reports whether it arrived. Failures are logged and
/// never propagated.
pub async fn send_message<S: MessageSink>(sink: &S, text: &str) -> bool {
    match sink.send_text(text).await {
        Ok(()) => {
            log::debug!("message_sent chars={}", text.chars().count());
            true
        }
        Err(error) => {
            log::error!("message_send_failed error={}", error);
            false
        }
    }
}
