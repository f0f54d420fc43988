use axum::{body::Bytes, extract::State};

use crate::{
    message::{InboundMessage, WebhookUpdate},
    state::SharedState,
};

/// Called by Telegram for every new message. The HTTP response is always the
/// default empty 200; outcomes only surface as a chat reply and in the logs.
pub async fn webhook_handler(State(state): State<SharedState>, body: Bytes) {
    let update: WebhookUpdate = match serde_json::from_slice(&body) {
        Ok(update) => update,
        Err(e) => {
            tracing::error!(error = %e, "parse webhook request");
            return;
        }
    };

    let message = InboundMessage::from(update);
    let chat_id = message.chat_id;

    match state.commands.handle(message).await {
        Ok(_) => tracing::info!(chat_id, "reply sent"),
        Err(e) => tracing::warn!(chat_id, error = %e, "reply not delivered"),
    }
}
