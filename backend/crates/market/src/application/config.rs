//! Application Configuration
//!
//! Configuration for the market application layer.

use std::time::Duration;

/// Market application configuration
#[derive(Debug, Clone)]
pub struct MarketConfig {
    /// Marketplace origin, without trailing slash
    pub base_url: String,
    /// Image CDN prefix for search result icons
    pub image_base_url: String,
    /// Game whose items are traded (730 = Counter-Strike)
    pub app_id: u32,
    /// Marketplace currency id (1 = USD, 5 = RUB)
    pub currency: u32,
    /// Appended to formatted prices
    pub currency_suffix: String,
    /// Maximum number of search hits returned
    pub search_count: usize,
    /// Per-request timeout
    pub timeout: Duration,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            base_url: "https://steamcommunity.com".to_string(),
            image_base_url: "https://community.cloudflare.steamstatic.com/economy/image"
                .to_string(),
            app_id: 730,
            currency: 5,
            currency_suffix: "₽".to_string(),
            search_count: 10,
            timeout: Duration::from_secs(10),
        }
    }
}

impl MarketConfig {
    /// `base_url` without a trailing slash
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Full image URL for a relative icon path; empty when there is no icon
    pub fn image_url(&self, icon_url: Option<&str>) -> String {
        match icon_url.filter(|s| !s.is_empty()) {
            Some(icon) => format!("{}/{}", self.image_base_url.trim_end_matches('/'), icon),
            None => String::new(),
        }
    }
}
