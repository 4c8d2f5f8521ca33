//! Logs each update in before() and the final response in after().

use async_trait::async_trait;
use dbot_core::{Handler, HandlerResponse, Message, Result};
use tracing::{debug, info, instrument};

/// Logs metadata only; relayed content is never written to the log.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, message))]
    async fn before(&self, message: &Message) -> Result<bool> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            chat_type = %message.chat.chat_type,
            kind = message.message_type(),
            is_command = message.is_command(),
            "Received update"
        );
        Ok(true)
    }

    #[instrument(skip(self, message, response))]
    async fn after(&self, message: &Message, response: &HandlerResponse) -> Result<()> {
        let outcome = match response {
            HandlerResponse::Reply(_) => "reply",
            HandlerResponse::Stop => "stop",
            HandlerResponse::Continue => "continue",
            HandlerResponse::Ignore => "ignore",
        };
        debug!(
            user_id = message.user.id,
            message_id = %message.id,
            outcome = outcome,
            "Processed update"
        );
        Ok(())
    }
}
