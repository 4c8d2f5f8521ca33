//! Command and callback parsing.
//!
//! Commands are `/name args...`; the `/name@BotName` form is accepted when the suffix matches the
//! bot's username (or when the username is not known yet). Commands addressed to another bot
//! yield `None` so they are ignored.

/// A parsed slash command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Chat,
    Exit,
    Profile,
    /// `/set <field> <value...>`; both empty when missing.
    Set { field: String, value: String },
    Rules,
    /// `/report [reason...]`; empty reason when omitted.
    Report { reason: String },
    DeleteLast,
    Previous,
    /// `/payment` and `/paysupport`.
    Payment,
    Help,
    Unknown(String),
}

impl Command {
    /// Parses `text` as a command. Returns None when it is not a command or targets another bot.
    pub fn parse(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let text = text.trim();
        let rest = text.strip_prefix('/')?;
        let (head, args) = match rest.split_once(char::is_whitespace) {
            Some((head, args)) => (head, args.trim()),
            None => (rest, ""),
        };
        if head.is_empty() {
            return None;
        }

        let name = match head.split_once('@') {
            Some((name, target)) => {
                if let Some(username) = bot_username {
                    if !target.eq_ignore_ascii_case(username) {
                        return None;
                    }
                }
                name
            }
            None => head,
        };

        let command = match name.to_lowercase().as_str() {
            "start" => Command::Start,
            "chat" => Command::Chat,
            "exit" => Command::Exit,
            "profile" => Command::Profile,
            "set" => {
                let mut words = args.split_whitespace();
                let field = words.next().unwrap_or("").to_lowercase();
                let value = words.collect::<Vec<_>>().join(" ");
                Command::Set { field, value }
            }
            "rules" => Command::Rules,
            "report" => Command::Report {
                reason: args.to_string(),
            },
            "delete_last" => Command::DeleteLast,
            "previous" => Command::Previous,
            "payment" | "paysupport" => Command::Payment,
            "help" => Command::Help,
            other => Command::Unknown(other.to_string()),
        };
        Some(command)
    }
}

/// Inline-button payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    Chat,
    Leave,
    Report,
    SearchGender,
    Settings,
    Help,
    Premium,
}

impl CallbackAction {
    pub fn parse(data: &str) -> Option<Self> {
        match data {
            "chat" => Some(Self::Chat),
            "leave" => Some(Self::Leave),
            "report" => Some(Self::Report),
            "search_gender" => Some(Self::SearchGender),
            "settings" => Some(Self::Settings),
            "help" => Some(Self::Help),
            "premium" => Some(Self::Premium),
            _ => None,
        }
    }
}

/// Premium toggle values that mean "on"; anything else means off.
pub fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "on" | "1" | "true" | "yes"
    )
}
