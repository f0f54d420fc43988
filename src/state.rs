// src/state.rs
use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::services::commands::CommandProcessor;
use crate::services::pricing::PricingClient;
use crate::services::telegram::TelegramClient;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub commands: CommandProcessor,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let http = Client::new();
        Self {
            commands: CommandProcessor::new(
                PricingClient::new(http.clone(), config.pricing_api_url.clone()),
                TelegramClient::new(http, config.telegram_api_url.clone(), config.bot_token.clone()),
            ),
        }
    }
}
