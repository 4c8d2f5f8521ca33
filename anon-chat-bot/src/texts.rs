//! User-facing texts and the main menu keyboard.

use dbot_core::{InlineButton, InlineKeyboard};
use storage::Profile;

pub const WELCOME: &str = "👋 Welcome! Choose an option:";
pub const PRIVATE_ONLY: &str = "Please use this bot in private chat (one-to-one).";

pub const ALREADY_PAIRED: &str = "⚠ You are already in a chat. Use /exit to leave.";
pub const ALREADY_WAITING: &str = "⏳ You are already waiting...";
pub const WAITING: &str = "⏳ Waiting for a partner...";
pub const PARTNER_FOUND: &str = "✅ Partner found! Say hi 👋";

pub const LEFT_QUEUE: &str = "⛔ You left the queue.";
pub const LEFT_CHAT: &str = "❌ You left the chat.";
pub const PARTNER_LEFT: &str = "⚠ Your partner left the chat.";
pub const NOT_IN_CHAT_OR_QUEUE: &str = "You are not in a chat or queue.";

pub const FORWARD_FALLBACK: &str = "📨 (Message forwarded)";

pub const REPORT_SAVED: &str =
    "✅ Your request to report is saved. We'll verify and take action soon. Enjoy our services.";
pub const REPORT_NO_PARTNER: &str = "You are not in an active chat to report.";
pub const REPORT_BUTTON_REASON: &str = "Reported via button";

pub const NOTHING_TO_DELETE: &str = "No forwarded messages found to delete.";
pub const DELETE_FAILED: &str = "Could not delete the forwarded message (maybe already deleted).";
pub const DELETED: &str = "✅ Your last forwarded message has been deleted.";

pub const PREVIOUS_PREMIUM_ONLY: &str = "🔄 This is a premium feature. Please purchase premium.";
pub const NO_PREVIOUS_PARTNER: &str = "No previous partner found.";

pub const SEARCH_GENDER_PREMIUM: &str =
    "🔎 Search by gender is a premium feature. Please purchase premium.";

pub const RULES: &str = "📜 Chat Rules:\n\
a) Avoid sharing personal details\n\
b) Abusing other users is not allowed\n\
c) Sexual content is not allowed\n\
d) Sending links is not allowed\n\
e) Sending spam/fraud messages are not allowed";

pub const SETTINGS: &str = "⚙ Settings - quick commands:\n\
/profile - show your profile\n\
/set age <number> - set your age\n\
/set gender <male/female/other> - set gender\n\
/set premium on|off - toggle premium (admin only in real world)\n";

pub const HELP: &str = "❓ Help section: For now, commands: /start /chat /exit /profile /set /delete_last /rules /report";
pub const UNKNOWN_COMMAND: &str = "Unknown command. Use /help to see the available commands.";

pub const SET_USAGE: &str = "Usage: /set <field> <value>\nFields: age gender premium";
pub const SET_INVALID_AGE: &str = "Please provide a valid age number.";
pub const SET_PREMIUM_ON: &str = "✅ Premium flag set to ON (for testing).";
pub const SET_PREMIUM_OFF: &str = "✅ Premium flag set to OFF.";
pub const SET_UNKNOWN_FIELD: &str = "Unknown field. Allowed: age, gender, premium";

pub const ERROR_REPLY: &str = "⚠ An error occurred. Please try again later.";

pub fn previous_partner(partner: i64) -> String {
    format!(
        "Your previous partner id: {} (use /chat to try to reconnect)",
        partner
    )
}

pub fn payment(payment_url: &str) -> String {
    format!("💳 Payment support coming soon! {}", payment_url)
}

pub fn age_set(age: i64) -> String {
    format!("✅ Your age is set to {}", age)
}

pub fn gender_set(gender: &str) -> String {
    format!("✅ Your gender is set to {}", gender)
}

/// Renders a profile; unset fields show as "None".
pub fn profile(profile: &Profile) -> String {
    let age = profile
        .age
        .map(|a| a.to_string())
        .unwrap_or_else(|| "None".to_string());
    let gender = profile.gender.as_deref().unwrap_or("None");
    let updated = profile
        .updated_at
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "None".to_string());
    format!(
        "👤 Profile:\nAge: {}\nGender: {}\nPremium: {}\nLast updated: {}",
        age, gender, profile.is_premium, updated
    )
}

/// The six-button menu sent by /start.
pub fn main_menu() -> InlineKeyboard {
    InlineKeyboard::new()
        .row(vec![
            InlineButton::callback("💬 Chat", "chat"),
            InlineButton::callback("❌ Leave chat", "leave"),
        ])
        .row(vec![
            InlineButton::callback("⚠ Report", "report"),
            InlineButton::callback("🔎 Search by gender", "search_gender"),
        ])
        .row(vec![
            InlineButton::callback("⚙ Settings", "settings"),
            InlineButton::callback("❓ Help", "help"),
        ])
}
