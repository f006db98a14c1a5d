//! Telegram update routing into the dialogue controller.

use std::sync::Arc;

use mana_core::dialogue::DialogueController;
use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;
use tracing::warn;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "начать заполнение формы")]
    Start,
    #[command(description = "как пользоваться ботом")]
    Help,
    #[command(description = "отменить текущую заявку")]
    Cancel,
}

pub async fn handle_command(
    msg: Message,
    cmd: Command,
    controller: Arc<DialogueController>,
) -> ResponseResult<()> {
    let chat = msg.chat.id.0;
    let result = match cmd {
        Command::Start => controller.handle_start(chat).await,
        Command::Help => controller.handle_help(chat).await,
        Command::Cancel => controller.handle_cancel(chat).await,
    };

    if let Err(err) = result {
        warn!(chat, error = %err, "command handling failed");
    }
    Ok(())
}

pub async fn handle_message(
    msg: Message,
    controller: Arc<DialogueController>,
) -> ResponseResult<()> {
    // Stickers, photos and the like have no text to interpret
    let Some(text) = msg.text() else {
        return Ok(());
    };

    let chat = msg.chat.id.0;
    if let Err(err) = controller.handle_text(chat, text).await {
        warn!(chat, error = %err, "message handling failed");
    }
    Ok(())
}
