//! Marketplace Client Trait
//!
//! Interface to the marketplace. Implementation is in infrastructure layer.

use crate::domain::entities::{
    Listing, PriceOverview, PurchaseReceipt, SearchResult, SteamCredentials,
};
use crate::error::MarketResult;

/// Marketplace client trait
#[trait_variant::make(MarketClient: Send)]
pub trait LocalMarketClient {
    /// Search items by free text, most popular first
    async fn search(&self, query: &str, count: usize) -> MarketResult<Vec<SearchResult>>;

    /// Price summary for an item; `None` when the marketplace does not know it
    async fn price_overview(&self, hash_name: &str) -> MarketResult<Option<PriceOverview>>;

    /// Cheapest open sell order for an item
    async fn cheapest_listing(&self, hash_name: &str) -> MarketResult<Option<Listing>>;

    /// Buy one listing on behalf of the credential owner
    async fn buy_listing(
        &self,
        listing: &Listing,
        credentials: &SteamCredentials,
    ) -> MarketResult<PurchaseReceipt>;
}
