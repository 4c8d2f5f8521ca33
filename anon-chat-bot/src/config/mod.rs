//! Bot configuration: BaseConfig (Telegram + log + DB) + ChatConfig (payment link, health endpoint).

mod base;
mod bot_config;
mod chat_config;


pub use base::{database_url_from_env, BaseConfig};
pub use bot_config::BotConfig;
pub use chat_config::ChatConfig;
