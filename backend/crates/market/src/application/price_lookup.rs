//! Price Lookup Use Case

use crate::application::config::MarketConfig;
use crate::domain::client::MarketClient;
use crate::domain::services::format_price;
use crate::domain::value_objects::Price;
use crate::error::{MarketError, MarketResult};
use std::sync::Arc;

/// Output DTO for price lookup
#[derive(Debug, Clone, PartialEq)]
pub struct PriceLookupOutput {
    pub item_name: String,
    /// Formatted lowest price, or "N/A"
    pub lowest_price: String,
    pub price_value: Option<Price>,
    pub median_price: String,
    pub volume: String,
}

/// Price Lookup Use Case
pub struct PriceLookupUseCase<M>
where
    M: MarketClient,
{
    client: Arc<M>,
    config: Arc<MarketConfig>,
}

impl<M> PriceLookupUseCase<M>
where
    M: MarketClient,
{
    pub fn new(client: Arc<M>, config: Arc<MarketConfig>) -> Self {
        Self { client, config }
    }

    pub async fn execute(&self, item: Option<&str>) -> MarketResult<PriceLookupOutput> {
        let item = item
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .ok_or(MarketError::MissingParameter("item"))?;

        let overview = self
            .client
            .price_overview(item)
            .await?
            .ok_or(MarketError::ItemNotFound)?;

        let price_value = overview.lowest_price_value();
        if price_value.is_none() {
            tracing::debug!(
                item = %item,
                lowest_price = ?overview.lowest_price,
                "Lowest price did not parse"
            );
        }

        Ok(PriceLookupOutput {
            item_name: item.to_string(),
            lowest_price: price_value
                .map(|p| format_price(p, &self.config.currency_suffix))
                .unwrap_or_else(|| "N/A".to_string()),
            price_value,
            median_price: overview.median_price.unwrap_or_else(|| "N/A".to_string()),
            volume: overview.volume.unwrap_or_else(|| "N/A".to_string()),
        })
    }
}
