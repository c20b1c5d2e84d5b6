//! Application Configuration

/// Tracks application configuration
#[derive(Debug, Clone)]
pub struct TracksConfig {
    /// Global switch; when off, price drops are only reported
    pub auto_purchase_enabled: bool,
    /// Prefix of generated user names
    pub user_name_prefix: String,
}

impl Default for TracksConfig {
    fn default() -> Self {
        Self {
            auto_purchase_enabled: true,
            user_name_prefix: "User".to_string(),
        }
    }
}
