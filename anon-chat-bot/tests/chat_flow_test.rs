//! End-to-end tests: updates go through the full handler chain (logging → callbacks → commands →
//! relay) and the MockBot records what users would see.

mod common;

use std::sync::Arc;

use anon_chat_bot::{build_handler_chain, texts, ChatComponents};
use common::{button, group_text, setup, text, MockBot, Sent, PAYMENT_URL};
use dbot_core::HandlerResponse;
use handler_chain::HandlerChain;
use tempfile::TempDir;
use tokio::sync::RwLock;

async fn chain_setup() -> (TempDir, Arc<MockBot>, ChatComponents, HandlerChain) {
    let (dir, bot, components) = setup().await;
    let username = Arc::new(RwLock::new(Some("AnonBot".to_string())));
    let chain = build_handler_chain(&components, username);
    (dir, bot, components, chain)
}

/// **Test: /start sends the six-button menu.**
#[tokio::test]
async fn test_start_sends_menu() {
    let (_dir, bot, _c, chain) = chain_setup().await;

    let response = chain.handle(&text(1, "/start")).await.unwrap();

    assert_eq!(response, HandlerResponse::Reply(texts::WELCOME.to_string()));
    assert_eq!(
        bot.calls(),
        vec![Sent::Keyboard {
            chat_id: 1,
            text: texts::WELCOME.to_string(),
            buttons: vec![
                "chat".to_string(),
                "leave".to_string(),
                "report".to_string(),
                "search_gender".to_string(),
                "settings".to_string(),
                "help".to_string(),
            ],
        }]
    );
}

/// **Test: two /chat requests pair the users and both are told; repeated /chat is refused.**
#[tokio::test]
async fn test_chat_pairs_two_users() {
    let (_dir, bot, c, chain) = chain_setup().await;

    chain.handle(&text(1, "/chat")).await.unwrap();
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::WAITING));

    chain.handle(&text(1, "/chat")).await.unwrap();
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::ALREADY_WAITING));

    chain.handle(&text(2, "/chat@AnonBot")).await.unwrap();
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::PARTNER_FOUND));
    assert_eq!(bot.last_text_to(2).as_deref(), Some(texts::PARTNER_FOUND));
    assert_eq!(c.engine.partner_of(1).await, Some(2));
    assert!(!c.engine.is_waiting(1).await);

    chain.handle(&text(2, "/chat")).await.unwrap();
    assert_eq!(bot.last_text_to(2).as_deref(), Some(texts::ALREADY_PAIRED));
}

/// **Test: /chat outside a private chat is refused and nobody is queued.**
#[tokio::test]
async fn test_chat_requires_private_chat() {
    let (_dir, bot, c, chain) = chain_setup().await;

    chain.handle(&group_text(1, "/chat")).await.unwrap();

    assert_eq!(bot.last_text_to(-1001).as_deref(), Some(texts::PRIVATE_ONLY));
    assert!(!c.engine.is_waiting(1).await);
}

/// **Test: commands for another bot are ignored entirely.**
#[tokio::test]
async fn test_command_for_other_bot_is_ignored() {
    let (_dir, bot, c, chain) = chain_setup().await;

    let response = chain.handle(&text(1, "/chat@OtherBot")).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    assert!(bot.calls().is_empty());
    assert!(!c.engine.is_waiting(1).await);
}

/// **Test: plain text is relayed while paired, commands are not.**
#[tokio::test]
async fn test_messages_relay_but_commands_do_not() {
    let (_dir, bot, c, chain) = chain_setup().await;
    chain.handle(&text(1, "/chat")).await.unwrap();
    chain.handle(&text(2, "/chat")).await.unwrap();
    bot.clear();

    chain.handle(&text(1, "hello stranger")).await.unwrap();
    chain.handle(&text(1, "/rules")).await.unwrap();

    assert_eq!(bot.texts_to(2), vec!["hello stranger".to_string()]);
    assert_eq!(bot.texts_to(1), vec![texts::RULES.to_string()]);
    assert_eq!(c.database.forwards.count_for_sender(1).await.unwrap(), 1);
}

/// **Test: /exit ends the chat, notifies the partner, and is idempotent afterwards.**
#[tokio::test]
async fn test_exit_flow() {
    let (_dir, bot, c, chain) = chain_setup().await;
    chain.handle(&text(1, "/chat")).await.unwrap();
    chain.handle(&text(1, "/exit")).await.unwrap();
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::LEFT_QUEUE));

    chain.handle(&text(1, "/chat")).await.unwrap();
    chain.handle(&text(2, "/chat")).await.unwrap();
    chain.handle(&text(2, "/exit")).await.unwrap();

    assert_eq!(bot.last_text_to(2).as_deref(), Some(texts::LEFT_CHAT));
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::PARTNER_LEFT));
    assert_eq!(c.engine.partner_of(1).await, None);

    for _ in 0..2 {
        chain.handle(&text(2, "/exit")).await.unwrap();
        assert_eq!(
            bot.last_text_to(2).as_deref(),
            Some(texts::NOT_IN_CHAT_OR_QUEUE)
        );
    }

    // After leaving, content is no longer relayed.
    bot.clear();
    chain.handle(&text(2, "still there?")).await.unwrap();
    assert!(bot.calls().is_empty());
}

/// **Test: /set and /profile round-trip; only the given field changes.**
#[tokio::test]
async fn test_set_and_profile() {
    let (_dir, bot, c, chain) = chain_setup().await;

    chain.handle(&text(1, "/set gender Female")).await.unwrap();
    assert_eq!(
        bot.last_text_to(1),
        Some(texts::gender_set("female"))
    );
    chain.handle(&text(1, "/set age 30")).await.unwrap();
    assert_eq!(bot.last_text_to(1), Some(texts::age_set(30)));

    let profile = c.database.profiles.get_profile(1).await.unwrap();
    assert_eq!(profile.age, Some(30));
    assert_eq!(profile.gender.as_deref(), Some("female"));
    assert!(!profile.is_premium);

    chain.handle(&text(1, "/profile")).await.unwrap();
    let shown = bot.last_text_to(1).unwrap();
    assert!(shown.starts_with("👤 Profile:\nAge: 30\nGender: female\nPremium: false"));

    chain.handle(&text(1, "/set age old")).await.unwrap();
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::SET_INVALID_AGE));
    chain.handle(&text(1, "/set height 180")).await.unwrap();
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::SET_UNKNOWN_FIELD));
    chain.handle(&text(1, "/set age")).await.unwrap();
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::SET_USAGE));
}

/// **Test: /previous is premium only and shows the last partner.**
#[tokio::test]
async fn test_previous_requires_premium() {
    let (_dir, bot, _c, chain) = chain_setup().await;

    chain.handle(&text(1, "/previous")).await.unwrap();
    assert_eq!(
        bot.last_text_to(1).as_deref(),
        Some(texts::PREVIOUS_PREMIUM_ONLY)
    );

    chain.handle(&text(1, "/set premium yes")).await.unwrap();
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::SET_PREMIUM_ON));
    chain.handle(&text(1, "/previous")).await.unwrap();
    assert_eq!(
        bot.last_text_to(1).as_deref(),
        Some(texts::NO_PREVIOUS_PARTNER)
    );

    chain.handle(&text(1, "/chat")).await.unwrap();
    chain.handle(&text(7, "/chat")).await.unwrap();
    chain.handle(&text(1, "/exit")).await.unwrap();
    chain.handle(&text(1, "/previous")).await.unwrap();
    assert_eq!(bot.last_text_to(1), Some(texts::previous_partner(7)));
}

/// **Test: /report saves a report only while paired.**
#[tokio::test]
async fn test_report_command() {
    let (_dir, bot, c, chain) = chain_setup().await;

    chain.handle(&text(1, "/report spam")).await.unwrap();
    assert_eq!(
        bot.last_text_to(1).as_deref(),
        Some(texts::REPORT_NO_PARTNER)
    );

    chain.handle(&text(1, "/chat")).await.unwrap();
    chain.handle(&text(2, "/chat")).await.unwrap();
    chain.handle(&text(1, "/report spam links")).await.unwrap();
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::REPORT_SAVED));

    let reports = c.database.reports.recent_reports(10).await.unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].reporter_id, 1);
    assert_eq!(reports[0].reported_id, 2);
    assert_eq!(reports[0].reason, "spam links");
}

/// **Test: /delete_last texts for nothing and for a deleted forward.**
#[tokio::test]
async fn test_delete_last_command() {
    let (_dir, bot, _c, chain) = chain_setup().await;

    chain.handle(&text(1, "/delete_last")).await.unwrap();
    assert_eq!(
        bot.last_text_to(1).as_deref(),
        Some(texts::NOTHING_TO_DELETE)
    );

    chain.handle(&text(1, "/chat")).await.unwrap();
    chain.handle(&text(2, "/chat")).await.unwrap();
    chain.handle(&text(1, "regret")).await.unwrap();
    chain.handle(&text(1, "/delete_last")).await.unwrap();
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::DELETED));
    assert!(bot
        .calls()
        .iter()
        .any(|c| matches!(c, Sent::Delete { chat_id: 2, .. })));
}

/// **Test: static commands, payment link and unknown commands.**
#[tokio::test]
async fn test_static_commands() {
    let (_dir, bot, _c, chain) = chain_setup().await;

    chain.handle(&text(1, "/help")).await.unwrap();
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::HELP));
    chain.handle(&text(1, "/payment")).await.unwrap();
    assert_eq!(bot.last_text_to(1), Some(texts::payment(PAYMENT_URL)));
    chain.handle(&text(1, "/paysupport")).await.unwrap();
    assert_eq!(bot.last_text_to(1), Some(texts::payment(PAYMENT_URL)));
    chain.handle(&text(1, "/dance")).await.unwrap();
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::UNKNOWN_COMMAND));
}

/// **Test: the chat and leave buttons act and edit the menu message.**
#[tokio::test]
async fn test_buttons_pair_and_leave() {
    let (_dir, bot, c, chain) = chain_setup().await;

    chain.handle(&button(1, "chat", "77")).await.unwrap();
    assert_eq!(
        bot.calls(),
        vec![Sent::Edit {
            chat_id: 1,
            message_id: "77".to_string(),
            text: texts::WAITING.to_string()
        }]
    );

    chain.handle(&button(2, "chat", "78")).await.unwrap();
    assert_eq!(c.engine.partner_of(2).await, Some(1));
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::PARTNER_FOUND));

    chain.handle(&button(2, "report", "78")).await.unwrap();
    let reports = c.database.reports.recent_reports(1).await.unwrap();
    assert_eq!(reports[0].reason, texts::REPORT_BUTTON_REASON);

    chain.handle(&button(2, "leave", "78")).await.unwrap();
    assert_eq!(bot.last_text_to(2).as_deref(), Some(texts::LEFT_CHAT));
    assert_eq!(bot.last_text_to(1).as_deref(), Some(texts::PARTNER_LEFT));
}

/// **Test: informational buttons edit the menu; button presses are never relayed.**
#[tokio::test]
async fn test_info_buttons() {
    let (_dir, bot, _c, chain) = chain_setup().await;
    chain.handle(&text(1, "/chat")).await.unwrap();
    chain.handle(&text(2, "/chat")).await.unwrap();
    bot.clear();

    for (data, expected) in [
        ("search_gender", texts::SEARCH_GENDER_PREMIUM.to_string()),
        ("settings", texts::SETTINGS.to_string()),
        ("help", texts::HELP.to_string()),
        ("premium", texts::payment(PAYMENT_URL)),
    ] {
        let response = chain.handle(&button(1, data, "5")).await.unwrap();
        assert_eq!(response, HandlerResponse::Reply(expected.clone()));
        assert_eq!(bot.last_text_to(1), Some(expected));
    }

    chain.handle(&button(1, "bogus", "5")).await.unwrap();
    assert!(bot.texts_to(2).is_empty());
}

/// **Test: without a menu message id the button result is sent as a new message.**
#[tokio::test]
async fn test_button_without_menu_message() {
    let (_dir, bot, _c, chain) = chain_setup().await;

    chain.handle(&button(3, "help", "")).await.unwrap();

    assert_eq!(
        bot.calls(),
        vec![Sent::Text {
            chat_id: 3,
            text: texts::HELP.to_string()
        }]
    );
}
