//! BotConfig: BaseConfig + ChatConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, ChatConfig};

/// Bot config: connection/logging/DB plus chat-service settings.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub chat: ChatConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let chat = ChatConfig::from_env()?;
        Ok(Self { base, chat })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.chat.validate()
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn database_url(&self) -> &str {
        &self.base.database_url
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn payment_url(&self) -> &str {
        &self.chat.payment_url
    }
    pub fn health_port(&self) -> u16 {
        self.chat.health_port
    }
}
