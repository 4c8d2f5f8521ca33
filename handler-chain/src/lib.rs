//! # Handler chain
//!
//! Runs a sequence of handlers for each inbound update. Every handler has optional
//! before/handle/after: all `before` run in order (any `false` stops the chain), then `handle` runs
//! until one returns Stop or Reply, then every `after` runs in reverse with the final response.
//!
//! Order matters: the application registers logging first, then commands and callbacks, and the
//! relay last so that commands are never forwarded to the partner.

use dbot_core::{Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Chain of handlers: before (all) → handle (until Stop/Reply) → after (reverse).
#[derive(Clone, Default)]
pub struct HandlerChain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl HandlerChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a handler.
    pub fn add_handler(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs the update through the chain and returns the final response.
    ///
    /// Errors from any phase abort the chain immediately; the caller decides how to report them.
    #[instrument(skip(self, message), fields(user_id = message.user.id, kind = message.message_type()))]
    pub async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            message_id = %message.id,
            "handler chain started"
        );

        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            if !h.before(message).await? {
                info!(user_id = message.user.id, handler = %name, "before returned false, chain stopped");
                return Ok(HandlerResponse::Stop);
            }
        }

        let mut final_response = HandlerResponse::Continue;
        for h in &self.handlers {
            let name = std::any::type_name_of_val(h.as_ref());
            let response = h.handle(message).await?;
            debug!(handler = %name, response = ?response, "handler processed");

            if matches!(response, HandlerResponse::Stop | HandlerResponse::Reply(_)) {
                final_response = response;
                break;
            }
        }

        for h in self.handlers.iter().rev() {
            h.after(message, &final_response).await?;
        }

        info!(
            user_id = message.user.id,
            message_id = %message.id,
            response = ?final_response,
            "handler chain finished"
        );

        Ok(final_response)
    }
}

// Tests live in tests/handler_chain_test.rs
