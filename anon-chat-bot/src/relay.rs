//! Relay: forwards one content unit to the sender's partner and records it for "undo last send".

use std::sync::Arc;

use dbot_core::{parse_message_id, Bot, Chat, ContentKind, DbotError, Message, Result};
use storage::{ForwardRepository, NewForward, StorageError};
use tracing::{error, info, instrument, warn};

use crate::pairing::PairingEngine;
use crate::texts;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Sender is not paired; nothing was sent.
    NoActivePartner,
    /// The outbound send failed; logged, nothing recorded.
    SendFailed,
    Forwarded { record_id: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetractOutcome {
    NothingToRetract,
    Deleted,
    /// Deletion failed on the platform side; the record is removed anyway.
    DeleteFailed,
}

pub(crate) fn db_error(e: StorageError) -> DbotError {
    DbotError::Database(e.to_string())
}

#[derive(Clone)]
pub struct Relay {
    bot: Arc<dyn Bot>,
    engine: Arc<PairingEngine>,
    forwards: ForwardRepository,
}

impl Relay {
    pub fn new(bot: Arc<dyn Bot>, engine: Arc<PairingEngine>, forwards: ForwardRepository) -> Self {
        Self {
            bot,
            engine,
            forwards,
        }
    }

    /// Sends `message` to the sender's partner with exactly one outbound call.
    #[instrument(skip(self, message), fields(user_id = message.user.id, kind = message.message_type()))]
    pub async fn relay(&self, message: &Message) -> Result<RelayOutcome> {
        let sender = message.user.id;
        let Some(partner) = self.engine.partner_of(sender).await else {
            return Ok(RelayOutcome::NoActivePartner);
        };

        let target = Chat::private(partner);
        let sent = match &message.kind {
            ContentKind::Text => {
                self.bot
                    .send_message_and_return_id(&target, &message.content)
                    .await
            }
            ContentKind::Photo { file_id } => {
                self.bot
                    .send_photo(&target, file_id, message.caption())
                    .await
            }
            ContentKind::Sticker { file_id } => self.bot.send_sticker(&target, file_id).await,
            ContentKind::Callback { .. } | ContentKind::Other => {
                self.bot
                    .send_message_and_return_id(&target, texts::FORWARD_FALLBACK)
                    .await
            }
        };

        let forwarded_id = match sent.and_then(|id| parse_message_id(&id)) {
            Ok(id) => id,
            Err(e) => {
                error!(error = %e, user_id = sender, partner_id = partner, "Forwarding failed");
                return Ok(RelayOutcome::SendFailed);
            }
        };

        let original_id = parse_message_id(&message.id).unwrap_or_else(|_| {
            warn!(message_id = %message.id, "Original message id is not numeric, storing 0");
            0
        });

        let record_id = self
            .forwards
            .add(&NewForward {
                sender_id: sender,
                recipient_id: partner,
                original_message_id: i64::from(original_id),
                forwarded_message_id: i64::from(forwarded_id),
                content_kind: message.kind.as_str().to_string(),
            })
            .await
            .map_err(db_error)?;

        info!(
            user_id = sender,
            partner_id = partner,
            record_id = record_id,
            "Message relayed"
        );
        Ok(RelayOutcome::Forwarded { record_id })
    }

    /// Deletes the copy of `user`'s most recent forward from the recipient's chat.
    #[instrument(skip(self))]
    pub async fn retract_last(&self, user: i64) -> Result<RetractOutcome> {
        let Some(record) = self.forwards.last_for_sender(user).await.map_err(db_error)? else {
            return Ok(RetractOutcome::NothingToRetract);
        };

        let deletion = self
            .bot
            .delete_message(
                &Chat::private(record.recipient_id),
                &record.forwarded_message_id.to_string(),
            )
            .await;

        self.forwards.delete(record.id).await.map_err(db_error)?;

        match deletion {
            Ok(()) => {
                info!(user_id = user, record_id = record.id, "Forwarded message retracted");
                Ok(RetractOutcome::Deleted)
            }
            Err(e) => {
                warn!(error = %e, user_id = user, record_id = record.id, "Delete forwarded message failed");
                Ok(RetractOutcome::DeleteFailed)
            }
        }
    }
}
