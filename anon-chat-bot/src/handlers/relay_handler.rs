//! Terminal handler: relays plain content from private chats to the sender's partner.

use async_trait::async_trait;
use dbot_core::{ContentKind, Handler, HandlerResponse, Message, Result};
use tracing::{debug, instrument};

use crate::relay::{Relay, RelayOutcome};

pub struct RelayHandler {
    relay: Relay,
}

impl RelayHandler {
    pub fn new(relay: Relay) -> Self {
        Self { relay }
    }
}

#[async_trait]
impl Handler for RelayHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        if !message.chat.is_private()
            || message.is_command()
            || matches!(message.kind, ContentKind::Callback { .. })
        {
            return Ok(HandlerResponse::Ignore);
        }

        match self.relay.relay(message).await? {
            RelayOutcome::NoActivePartner => {
                debug!(user_id = message.user.id, "Not paired, content dropped");
            }
            RelayOutcome::SendFailed => {}
            RelayOutcome::Forwarded { record_id } => {
                debug!(user_id = message.user.id, record_id = record_id, "Relayed");
            }
        }
        Ok(HandlerResponse::Stop)
    }
}
