// src/message.rs
use serde::{Deserialize, Serialize};

/// Body of a Telegram webhook call. Only the fields the bot reads are modelled.
/// https://core.telegram.org/bots/api#update
#[derive(Debug, Deserialize)]
pub struct WebhookUpdate {
    pub message: UpdateMessage,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMessage {
    #[serde(default)]
    pub text: String,
    pub chat: UpdateChat,
}

#[derive(Debug, Deserialize)]
pub struct UpdateChat {
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    pub chat_id: i64,
    pub text: String,
}

impl From<WebhookUpdate> for InboundMessage {
    fn from(update: WebhookUpdate) -> Self {
        Self {
            chat_id: update.message.chat.id,
            text: update.message.text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundReply {
    pub chat_id: i64,
    pub text: String,
}

/// https://core.telegram.org/bots/api#sendmessage
#[derive(Debug, Serialize)]
pub struct SendMessageRequest<'a> {
    pub chat_id: i64,
    pub text: &'a str,
}

impl<'a> From<&'a OutboundReply> for SendMessageRequest<'a> {
    fn from(reply: &'a OutboundReply) -> Self {
        Self {
            chat_id: reply.chat_id,
            text: &reply.text,
        }
    }
}
