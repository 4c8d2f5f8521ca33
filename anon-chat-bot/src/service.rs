//! Chat operations shared by slash commands and inline buttons.
//!
//! Each method performs one user action and returns the text to show the requesting user.
//! Notices to the partner are sent here; a failed notice is logged and dropped.

use std::sync::Arc;

use dbot_core::{Bot, Chat, Result};
use storage::{Database, ProfileUpdate};
use tracing::{info, instrument, warn};

use crate::command::is_truthy;
use crate::pairing::{LeaveOutcome, PairOutcome, PairingEngine, PairingError};
use crate::relay::{db_error, Relay, RetractOutcome};
use crate::texts;

/// Reply text for an informational pairing failure.
pub fn pairing_reply(err: PairingError) -> &'static str {
    match err {
        PairingError::AlreadyPaired => texts::ALREADY_PAIRED,
        PairingError::AlreadyWaiting => texts::ALREADY_WAITING,
        PairingError::NotInChatOrQueue => texts::NOT_IN_CHAT_OR_QUEUE,
        PairingError::NoActivePartner => texts::REPORT_NO_PARTNER,
    }
}

#[derive(Clone)]
pub struct ChatService {
    bot: Arc<dyn Bot>,
    engine: Arc<PairingEngine>,
    relay: Relay,
    database: Database,
    payment_url: String,
}

impl ChatService {
    pub fn new(
        bot: Arc<dyn Bot>,
        engine: Arc<PairingEngine>,
        relay: Relay,
        database: Database,
        payment_url: impl Into<String>,
    ) -> Self {
        Self {
            bot,
            engine,
            relay,
            database,
            payment_url: payment_url.into(),
        }
    }

    pub fn engine(&self) -> &Arc<PairingEngine> {
        &self.engine
    }

    pub fn relay(&self) -> &Relay {
        &self.relay
    }

    async fn notify(&self, user: i64, text: &str) {
        if let Err(e) = self.bot.send_message(&Chat::private(user), text).await {
            warn!(error = %e, user_id = user, "Failed to notify user");
        }
    }

    /// Joins the queue or pairs with the longest-waiting user.
    #[instrument(skip(self))]
    pub async fn start_chat(&self, user: i64) -> Result<String> {
        match self.engine.request_pairing(user).await {
            Ok(PairOutcome::Paired { partner }) => {
                self.notify(partner, texts::PARTNER_FOUND).await;
                Ok(texts::PARTNER_FOUND.to_string())
            }
            Ok(PairOutcome::Waiting) => Ok(texts::WAITING.to_string()),
            Err(e) => Ok(pairing_reply(e).to_string()),
        }
    }

    /// Leaves the queue or the current chat; the partner is told when a chat ends.
    #[instrument(skip(self))]
    pub async fn leave_chat(&self, user: i64) -> Result<String> {
        match self.engine.leave(user).await {
            Ok(LeaveOutcome::LeftQueue) => Ok(texts::LEFT_QUEUE.to_string()),
            Ok(LeaveOutcome::LeftChat { partner }) => {
                self.notify(partner, texts::PARTNER_LEFT).await;
                Ok(texts::LEFT_CHAT.to_string())
            }
            Err(e) => Ok(pairing_reply(e).to_string()),
        }
    }

    /// Files a report against the current partner.
    #[instrument(skip(self, reason))]
    pub async fn report_partner(&self, user: i64, reason: &str) -> Result<String> {
        let Some(partner) = self.engine.partner_of(user).await else {
            return Ok(pairing_reply(PairingError::NoActivePartner).to_string());
        };
        self.database
            .reports
            .add_report(user, partner, reason)
            .await
            .map_err(db_error)?;
        Ok(texts::REPORT_SAVED.to_string())
    }

    pub async fn delete_last(&self, user: i64) -> Result<String> {
        let text = match self.relay.retract_last(user).await? {
            RetractOutcome::NothingToRetract => texts::NOTHING_TO_DELETE,
            RetractOutcome::Deleted => texts::DELETED,
            RetractOutcome::DeleteFailed => texts::DELETE_FAILED,
        };
        Ok(text.to_string())
    }

    /// Premium only: the id of the most recent partner.
    pub async fn previous_partner(&self, user: i64) -> Result<String> {
        let premium = self
            .database
            .profiles
            .is_premium(user)
            .await
            .map_err(db_error)?;
        if !premium {
            return Ok(texts::PREVIOUS_PREMIUM_ONLY.to_string());
        }
        Ok(match self.engine.last_partner_of(user).await {
            Some(partner) => texts::previous_partner(partner),
            None => texts::NO_PREVIOUS_PARTNER.to_string(),
        })
    }

    pub async fn show_profile(&self, user: i64) -> Result<String> {
        let profile = self
            .database
            .profiles
            .get_profile(user)
            .await
            .map_err(db_error)?;
        Ok(texts::profile(&profile))
    }

    /// `/set <field> <value>`: age (integer), gender (lower-cased), premium (on/off).
    #[instrument(skip(self))]
    pub async fn set_field(&self, user: i64, field: &str, value: &str) -> Result<String> {
        if field.is_empty() || value.is_empty() {
            return Ok(texts::SET_USAGE.to_string());
        }

        let (update, reply) = match field {
            "age" => match value.parse::<i64>() {
                Ok(age) => (ProfileUpdate::age(age), texts::age_set(age)),
                Err(_) => return Ok(texts::SET_INVALID_AGE.to_string()),
            },
            "gender" => {
                let gender = value.to_lowercase();
                let reply = texts::gender_set(&gender);
                (ProfileUpdate::gender(gender), reply)
            }
            "premium" => {
                let on = is_truthy(value);
                let reply = if on {
                    texts::SET_PREMIUM_ON
                } else {
                    texts::SET_PREMIUM_OFF
                };
                (ProfileUpdate::premium(on), reply.to_string())
            }
            _ => return Ok(texts::SET_UNKNOWN_FIELD.to_string()),
        };

        self.database
            .profiles
            .set_profile(user, &update)
            .await
            .map_err(db_error)?;
        info!(user_id = user, field = %field, "Profile updated");
        Ok(reply)
    }

    pub fn payment(&self) -> String {
        texts::payment(&self.payment_url)
    }
}
