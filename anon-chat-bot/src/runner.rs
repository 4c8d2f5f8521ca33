use anyhow::Result;
use dbot_core::init_tracing;
use dbot_telegram::{run_dispatcher, UpdateProcessor};
use tracing::{info, instrument, warn};

use crate::components::{build_bot_components, build_handler_chain};
use crate::config::BotConfig;
use crate::health;
use crate::texts;

/// Main entry: validate config, init logging, build components, start the health endpoint, then
/// poll until Ctrl+C.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(config.log_file())?;

    info!(
        database_url = %config.database_url(),
        health_port = config.health_port(),
        "Initializing bot"
    );

    let components = build_bot_components(&config).await?;
    let handler_chain = build_handler_chain(&components.chat, components.bot_username.clone());
    let processor = UpdateProcessor::new(
        handler_chain,
        components.chat.bot.clone(),
        texts::ERROR_REPLY,
    );

    let (health_addr, health_task) = health::spawn(config.chat.health_addr()?).await?;
    info!(addr = %health_addr, "Bot started successfully");

    let result = run_dispatcher(
        components.teloxide_bot,
        processor,
        components.bot_username,
    )
    .await;

    health_task.abort();
    let stats = components.chat.engine.snapshot().await;
    if stats.waiting > 0 || stats.active_pairs > 0 {
        warn!(
            waiting = stats.waiting,
            active_pairs = stats.active_pairs,
            "Shutting down; in-memory pairings are dropped"
        );
    }
    result
}

/// Prints the most recent reports, newest first.
#[instrument]
pub async fn list_reports(database_url: &str, limit: i64, json: bool) -> Result<()> {
    let database = storage::Database::connect(database_url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open database: {}", e))?;
    let reports = database
        .reports
        .recent_reports(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read reports: {}", e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if reports.is_empty() {
        println!("No reports.");
        return Ok(());
    }
    for report in &reports {
        let against = database
            .reports
            .count_against(report.reported_id)
            .await
            .map_err(|e| anyhow::anyhow!("Failed to count reports: {}", e))?;
        println!(
            "#{} {} reporter={} reported={} (total against: {}) reason={:?}",
            report.id,
            report.created_at.format("%Y-%m-%d %H:%M:%S"),
            report.reporter_id,
            report.reported_id,
            against,
            report.reason
        );
    }
    Ok(())
}
