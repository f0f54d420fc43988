// src/config.rs
use std::fmt::Debug;
use std::time::Duration;

use reqwest::Url;

use crate::error::ConfigError;

pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_TELEGRAM_API_URL: &str = "https://api.telegram.org";
pub const DEFAULT_PRICING_API_URL: &str = "https://yugiohprices.com";
pub const DEFAULT_SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(30);

/// Process-wide settings, read once at startup and handed to whatever needs them.
#[derive(Clone)]
pub struct Config {
    pub port: u16,
    /// Not validated: an empty token only shows up as failed sends.
    pub bot_token: String,
    pub telegram_api_url: Url,
    pub pricing_api_url: Url,
    pub shutdown_timeout: Duration,
}

impl Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("bot_token", &"<redacted>")
            .field("telegram_api_url", &self.telegram_api_url.as_str())
            .field("pricing_api_url", &self.pricing_api_url.as_str())
            .field("shutdown_timeout", &self.shutdown_timeout)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw.trim().parse().map_err(|_| ConfigError::InvalidVar {
                name: "PORT",
                value: raw,
            })?,
            None => DEFAULT_PORT,
        };

        let shutdown_timeout = match lookup("SHUTDOWN_TIMEOUT_SECS").filter(|v| !v.trim().is_empty()) {
            Some(raw) => raw
                .trim()
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidVar {
                    name: "SHUTDOWN_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => DEFAULT_SHUTDOWN_TIMEOUT,
        };

        Ok(Self {
            port,
            bot_token: lookup("TELEGRAM_BOT_API_TOKEN").unwrap_or_default(),
            telegram_api_url: base_url(&lookup, "TELEGRAM_API_URL", DEFAULT_TELEGRAM_API_URL)?,
            pricing_api_url: base_url(&lookup, "YGOPRICES_API_URL", DEFAULT_PRICING_API_URL)?,
            shutdown_timeout,
        })
    }
}

fn base_url<F>(lookup: &F, name: &'static str, default: &str) -> Result<Url, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(name)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string());

    match Url::parse(raw.trim()) {
        Ok(url) if matches!(url.scheme(), "http" | "https") && !url.cannot_be_a_base() => Ok(url),
        _ => Err(ConfigError::InvalidUrl { name, value: raw }),
    }
}
