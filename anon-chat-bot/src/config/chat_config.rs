//! Chat service settings: payment link shown by /payment and the health-probe listener.

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

pub const DEFAULT_PAYMENT_URL: &str = "https://example.com/payment";
pub const DEFAULT_HEALTH_PORT: u16 = 10000;

#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// PAYMENT_URL; shown to users, no payment is processed.
    pub payment_url: String,
    /// PORT (set by most hosting platforms) or HEALTH_PORT.
    pub health_port: u16,
    /// HEALTH_HOST
    pub health_host: String,
}

impl ChatConfig {
    pub fn from_env() -> Result<Self> {
        let payment_url =
            env::var("PAYMENT_URL").unwrap_or_else(|_| DEFAULT_PAYMENT_URL.to_string());
        let health_port = match env::var("PORT").or_else(|_| env::var("HEALTH_PORT")) {
            Ok(raw) => raw
                .trim()
                .parse()
                .with_context(|| format!("PORT/HEALTH_PORT is not a valid port: {}", raw))?,
            Err(_) => DEFAULT_HEALTH_PORT,
        };
        let health_host = env::var("HEALTH_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Self {
            payment_url,
            health_port,
            health_host,
        })
    }

    /// Socket address the health endpoint binds to.
    pub fn health_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.health_host, self.health_port)
            .parse()
            .with_context(|| {
                format!(
                    "Invalid health address {}:{}",
                    self.health_host, self.health_port
                )
            })
    }

    pub fn validate(&self) -> Result<()> {
        if reqwest::Url::parse(&self.payment_url).is_err() {
            anyhow::bail!("PAYMENT_URL is not a valid URL: {}", self.payment_url);
        }
        self.health_addr()?;
        Ok(())
    }
}
