// src/services/commands.rs
use crate::error::ReplyError;
use crate::message::{InboundMessage, OutboundReply};
use crate::services::pricing::{PriceLookup, PriceQuote, PricingClient};
use crate::services::telegram::TelegramClient;

pub const PRICE_COMMAND: &str = "/priceprinttag";
pub const INVALID_COMMAND_REPLY: &str = "Invalid command!";
pub const PRICE_ERROR_REPLY: &str = "Error fetching card price!";

#[derive(Debug, PartialEq, Eq)]
pub enum Command<'a> {
    PricePrintTag(&'a str),
    MissingPrintTag,
    Unknown,
}

/// Matching is a case-insensitive substring search; the print tag is the second
/// space-separated token of the original text.
pub fn detect_command(text: &str) -> Command<'_> {
    if !text.to_lowercase().contains(PRICE_COMMAND) {
        return Command::Unknown;
    }

    match text.split(' ').nth(1) {
        Some(tag) if !tag.is_empty() => Command::PricePrintTag(tag),
        _ => Command::MissingPrintTag,
    }
}

pub fn format_quote(quote: &PriceQuote) -> String {
    format!(
        "Prices\nHigh :${:.2}\nAverage: ${:.2}\nLow: ${:.2}",
        quote.high, quote.average, quote.low
    )
}

#[derive(Debug, Clone)]
pub struct CommandProcessor {
    pricing: PricingClient,
    telegram: TelegramClient,
}

impl CommandProcessor {
    pub fn new(pricing: PricingClient, telegram: TelegramClient) -> Self {
        Self { pricing, telegram }
    }

    pub async fn generate_reply(&self, text: &str) -> String {
        match detect_command(text) {
            Command::Unknown => INVALID_COMMAND_REPLY.to_string(),
            Command::MissingPrintTag => PRICE_ERROR_REPLY.to_string(),
            Command::PricePrintTag(tag) => match self.pricing.fetch_price(tag).await {
                Ok(PriceLookup::Found(quote)) => format_quote(&quote),
                // Users get the same message whether the card is unknown or the lookup broke.
                Ok(PriceLookup::NotFound) | Err(_) => PRICE_ERROR_REPLY.to_string(),
            },
        }
    }

    /// Answer one inbound message. The reply is returned even though it has
    /// already been sent, so the caller can log what went out.
    #[tracing::instrument(skip_all, fields(chat_id = message.chat_id))]
    pub async fn handle(&self, message: InboundMessage) -> Result<OutboundReply, ReplyError> {
        let reply = OutboundReply {
            chat_id: message.chat_id,
            text: self.generate_reply(&message.text).await,
        };
        self.telegram.send_reply(&reply).await?;
        Ok(reply)
    }
}
