//! Handlers registered on the chain, in order: logging, callbacks, commands, relay.

mod callback_handler;
mod command_handler;
mod logging_handler;
mod relay_handler;

pub use callback_handler::CallbackHandler;
pub use command_handler::CommandHandler;
pub use logging_handler::LoggingHandler;
pub use relay_handler::RelayHandler;
