//! Inline-button handler. The query itself is answered by the dispatcher before the chain runs.

use std::sync::Arc;

use async_trait::async_trait;
use dbot_core::{Bot, Chat, Handler, HandlerResponse, Message, Result};
use tracing::{info, instrument, warn};

use crate::command::CallbackAction;
use crate::service::ChatService;
use crate::texts;

/// Performs the pressed button's action and shows the result in place of the menu text.
pub struct CallbackHandler {
    service: ChatService,
    bot: Arc<dyn Bot>,
}

impl CallbackHandler {
    pub fn new(service: ChatService, bot: Arc<dyn Bot>) -> Self {
        Self { service, bot }
    }

    async fn execute(&self, action: CallbackAction, message: &Message) -> Result<String> {
        let user = message.user.id;
        match action {
            CallbackAction::Chat => {
                if !message.chat.is_private() {
                    return Ok(texts::PRIVATE_ONLY.to_string());
                }
                self.service.start_chat(user).await
            }
            CallbackAction::Leave => self.service.leave_chat(user).await,
            CallbackAction::Report => {
                self.service
                    .report_partner(user, texts::REPORT_BUTTON_REASON)
                    .await
            }
            CallbackAction::SearchGender => Ok(texts::SEARCH_GENDER_PREMIUM.to_string()),
            CallbackAction::Settings => Ok(texts::SETTINGS.to_string()),
            CallbackAction::Help => Ok(texts::HELP.to_string()),
            CallbackAction::Premium => Ok(self.service.payment()),
        }
    }

    /// Edits the menu message; falls back to a fresh private message when the menu is gone.
    async fn show(&self, message: &Message, text: &str) -> Result<()> {
        if !message.id.is_empty() {
            match self.bot.edit_message(&message.chat, &message.id, text).await {
                Ok(()) => return Ok(()),
                Err(e) => warn!(error = %e, user_id = message.user.id, "Edit menu failed, sending instead"),
            }
        }
        self.bot
            .send_message(&Chat::private(message.user.id), text)
            .await
    }
}

#[async_trait]
impl Handler for CallbackHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(data) = message.callback_data() else {
            return Ok(HandlerResponse::Continue);
        };

        let Some(action) = CallbackAction::parse(data) else {
            warn!(user_id = message.user.id, data = %data, "Unknown callback payload");
            return Ok(HandlerResponse::Stop);
        };

        info!(user_id = message.user.id, action = ?action, "Handling button");
        let reply = self.execute(action, message).await?;
        self.show(message, &reply).await?;
        Ok(HandlerResponse::Reply(reply))
    }
}
