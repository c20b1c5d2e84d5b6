//! Process configuration
//!
//! Read once at startup from the environment (after `.env` is loaded).
//! Invalid values stop the server before it binds.

use anyhow::{Context, bail};
use market::MarketConfig;
use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tracks::TracksConfig;

pub const DEFAULT_LOG_FILTER: &str = "api=info,market=info,tracks=info,tower_http=info";

/// Everything `main` needs to assemble the server
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    /// Schema put on the connection `search_path`
    pub db_schema: Option<String>,
    pub db_max_connections: u32,
    pub bind_addr: SocketAddr,
    /// `None` allows any origin
    pub frontend_origins: Option<Vec<String>>,
    pub market: MarketConfig,
    pub tracks: TracksConfig,
}

fn var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_or<T>(name: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match var(name) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", name, raw)),
        None => Ok(default),
    }
}

fn parse_bool(name: &str, default: bool) -> anyhow::Result<bool> {
    match var(name).map(|v| v.to_ascii_lowercase()).as_deref() {
        None => Ok(default),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some("0" | "false" | "no" | "off") => Ok(false),
        Some(other) => bail!("{} has an invalid value: {:?}", name, other),
    }
}

/// Schema names go into SQL as identifiers; keep them plain
fn validate_schema(schema: &str) -> anyhow::Result<()> {
    let plain = schema
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !plain || schema.starts_with(|c: char| c.is_ascii_digit()) {
        bail!("MAIN_DB_SCHEMA must be a plain identifier, got {:?}", schema);
    }
    Ok(())
}

fn parse_origins(raw: &str) -> Option<Vec<String>> {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|o| !o.is_empty())
        .map(str::to_string)
        .collect();
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        None
    } else {
        Some(origins)
    }
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let db_schema = var("MAIN_DB_SCHEMA");
        if let Some(schema) = &db_schema {
            validate_schema(schema)?;
        }

        let market_defaults = MarketConfig::default();
        let market = MarketConfig {
            base_url: var("STEAM_MARKET_BASE_URL").unwrap_or(market_defaults.base_url),
            app_id: parse_or("STEAM_APP_ID", market_defaults.app_id)?,
            currency: parse_or("STEAM_CURRENCY", market_defaults.currency)?,
            currency_suffix: env::var("STEAM_CURRENCY_SUFFIX")
                .unwrap_or(market_defaults.currency_suffix),
            timeout: Duration::from_secs(parse_or(
                "STEAM_TIMEOUT_SECS",
                market_defaults.timeout.as_secs(),
            )?),
            ..market_defaults
        };

        let tracks = TracksConfig {
            auto_purchase_enabled: parse_bool("AUTO_PURCHASE_ENABLED", true)?,
            ..TracksConfig::default()
        };

        Ok(Self {
            database_url,
            db_schema,
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 5)?,
            bind_addr: parse_or("BIND_ADDR", SocketAddr::from(([0, 0, 0, 0], 31113)))?,
            frontend_origins: parse_origins(&var("FRONTEND_ORIGINS").unwrap_or_default()),
            market,
            tracks,
        })
    }
}
