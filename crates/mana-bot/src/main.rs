//! Process entry point: wires the dialogue core to the Telegram transport
//! and the form backend.

mod commands;
mod transport;

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use mana_core::catalog::Catalog;
use mana_core::dialogue::DialogueController;
use mana_submission::{FormConfig, HttpFormSink, SubmissionDispatcher};
use teloxide::dptree;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::transport::TelegramResponder;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Missing credential is fatal before any session can begin
    let token = env::var("TELEGRAM_TOKEN").context("TELEGRAM_TOKEN is not set")?;

    let config_path = env::var("MANA_FORM_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("form.toml"));
    let form_config = FormConfig::load(&config_path)?;

    let bot = Bot::new(token);

    let sink = Arc::new(HttpFormSink::new(form_config)?);
    let dispatcher = Arc::new(SubmissionDispatcher::new(sink));
    let responder = Arc::new(TelegramResponder::new(bot.clone()));
    let controller = Arc::new(DialogueController::new(
        Arc::new(Catalog::default()),
        dispatcher,
        responder,
    ));

    info!("bot started, waiting for messages");

    let handler = Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(commands::handle_command),
        )
        .branch(dptree::endpoint(commands::handle_message));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![controller])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
