//! Two-phase dialogue sequencing.

mod controller;
pub mod reply;

pub use controller::DialogueController;
pub use reply::Reply;

use async_trait::async_trait;

use crate::Result;
use crate::session::ChatId;

/// Outbound side of the chat transport.
///
/// The controller emits replies through this trait as the dialogue
/// advances, so the confirmation summary reaches the user before the
/// submission round-trip completes. The bot binary implements it with
/// Telegram; tests record the replies.
#[async_trait]
pub trait Responder: Send + Sync {
    async fn send(&self, chat: ChatId, reply: Reply) -> Result<()>;
}
