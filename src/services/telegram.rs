// src/services/telegram.rs
use std::fmt::Debug;

use reqwest::{Client, StatusCode, Url};

use crate::error::ReplyError;
use crate::message::{OutboundReply, SendMessageRequest};

/// Sends bot messages through the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramClient {
    http: Client,
    api_url: Url,
    bot_token: String,
}

impl Debug for TelegramClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url.as_str())
            .finish()
    }
}

impl TelegramClient {
    /// `api_url` must be able to take a path (`Config` only hands out such urls);
    /// otherwise every send fails with `ReplyError::InvalidEndpoint`.
    pub fn new(http: Client, api_url: Url, bot_token: impl Into<String>) -> Self {
        Self {
            http,
            api_url,
            bot_token: bot_token.into(),
        }
    }

    fn send_message_url(&self) -> Result<Url, ReplyError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|_| ReplyError::InvalidEndpoint(self.api_url.to_string()))?
            .pop_if_empty()
            .extend([format!("bot{}", self.bot_token).as_str(), "sendMessage"]);
        Ok(url)
    }

    /// Post `reply` to its chat. Anything but a 200 is an error carrying the status.
    pub async fn send_reply(&self, reply: &OutboundReply) -> Result<(), ReplyError> {
        let res = self
            .http
            .post(self.send_message_url()?)
            .json(&SendMessageRequest::from(reply))
            .send()
            .await?;

        match res.status() {
            StatusCode::OK => Ok(()),
            status => Err(ReplyError::UnexpectedStatus(status)),
        }
    }
}
