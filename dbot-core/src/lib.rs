//! # dbot-core
//!
//! Core types and traits for the anonymous chat bot: [`Bot`], [`Handler`], message, user, chat and
//! keyboard types, and tracing initialization. Transport-agnostic; used by dbot-telegram, handler-chain
//! and the application crate.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{DbotError, Result};
pub use logger::init_tracing;
pub use types::{
    Chat, ContentKind, Handler, HandlerResponse, InlineButton, InlineKeyboard, Message, ToCoreMessage,
    ToCoreUser, User,
};
