//! Search Items Use Case

use crate::application::config::MarketConfig;
use crate::domain::client::MarketClient;
use crate::error::{MarketError, MarketResult};
use std::sync::Arc;

/// One search hit, ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct SearchItemOutput {
    pub name: String,
    pub hash_name: String,
    pub image: String,
    pub price: String,
    pub sell_listings: i64,
}

/// Search Items Use Case
pub struct SearchItemsUseCase<M>
where
    M: MarketClient,
{
    client: Arc<M>,
    config: Arc<MarketConfig>,
}

impl<M> SearchItemsUseCase<M>
where
    M: MarketClient,
{
    pub fn new(client: Arc<M>, config: Arc<MarketConfig>) -> Self {
        Self { client, config }
    }

    pub async fn execute(&self, query: Option<&str>) -> MarketResult<Vec<SearchItemOutput>> {
        let query = query
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .ok_or(MarketError::MissingParameter("q"))?;

        let results = self.client.search(query, self.config.search_count).await?;

        let items: Vec<SearchItemOutput> = results
            .into_iter()
            .take(self.config.search_count)
            .map(|r| SearchItemOutput {
                image: self.config.image_url(r.icon_url.as_deref()),
                price: r.sell_price_text.unwrap_or_else(|| "N/A".to_string()),
                name: r.name,
                hash_name: r.hash_name,
                sell_listings: r.sell_listings,
            })
            .collect();

        tracing::info!(query = %query, results = items.len(), "Market search");

        Ok(items)
    }
}
