//! # dbot-telegram
//!
//! Telegram layer: adapters from teloxide types to [`dbot_core`] types, a [`dbot_core::Bot`]
//! implementation, and the update dispatcher that feeds messages and callback queries into a
//! [`handler_chain::HandlerChain`]. No pairing, persistence or UI text lives here.

mod adapters;
mod bot_adapter;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{build_teloxide_bot, TelegramBotAdapter};
pub use runner::{run_dispatcher, UpdateProcessor};
