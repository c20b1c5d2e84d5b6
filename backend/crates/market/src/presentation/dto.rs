//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire.

use serde::{Deserialize, Serialize};

use crate::application::price_lookup::PriceLookupOutput;
use crate::application::search_items::SearchItemOutput;

// ============================================================================
// Search
// ============================================================================

/// `GET /search` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub q: Option<String>,
}

/// One search hit
#[derive(Debug, Clone, Serialize)]
pub struct SearchItemResponse {
    pub name: String,
    pub hash_name: String,
    pub image: String,
    pub price: String,
    pub sell_listings: i64,
}

impl From<SearchItemOutput> for SearchItemResponse {
    fn from(item: SearchItemOutput) -> Self {
        Self {
            name: item.name,
            hash_name: item.hash_name,
            image: item.image,
            price: item.price,
            sell_listings: item.sell_listings,
        }
    }
}

/// Search response
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchItemResponse>,
    pub total: usize,
}

// ============================================================================
// Price
// ============================================================================

/// `GET /price` query string
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PriceQuery {
    pub item: Option<String>,
}

/// Price lookup response
#[derive(Debug, Clone, Serialize)]
pub struct PriceResponse {
    pub item_name: String,
    pub lowest_price: String,
    /// Major units, `null` when the marketplace text did not parse
    pub price_value: Option<f64>,
    pub median_price: String,
    pub volume: String,
}

impl From<PriceLookupOutput> for PriceResponse {
    fn from(out: PriceLookupOutput) -> Self {
        Self {
            item_name: out.item_name,
            lowest_price: out.lowest_price,
            price_value: out.price_value.map(|p| p.as_major()),
            median_price: out.median_price,
            volume: out.volume,
        }
    }
}
