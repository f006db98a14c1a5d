//! Telegram delivery of controller replies.

use async_trait::async_trait;
use mana_core::dialogue::{Reply, Responder};
use mana_core::session::ChatId;
use mana_core::{ManaError, Result};
use teloxide::Bot;
use teloxide::payloads::SendMessageSetters;
use teloxide::requests::Requester;
use teloxide::types::ParseMode;

/// `Responder` backed by the Telegram Bot API.
pub struct TelegramResponder {
    bot: Bot,
}

impl TelegramResponder {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Responder for TelegramResponder {
    async fn send(&self, chat: ChatId, reply: Reply) -> Result<()> {
        let request = self.bot.send_message(teloxide::types::ChatId(chat), reply.text);
        let request = if reply.html {
            request.parse_mode(ParseMode::Html)
        } else {
            request
        };

        request
            .await
            .map_err(|err| ManaError::delivery(format!("telegram send failed: {err}")))?;
        Ok(())
    }
}
