//! Market (Steam Community Market) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Prices, listings, the marketplace client trait, price parsing
//! - `application/` - Search and price lookup use cases
//! - `infra/` - HTTP client talking to the marketplace
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Every marketplace call is a single request with the configured timeout.
//! Nothing is cached and nothing is retried.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::MarketConfig;
pub use domain::client::{LocalMarketClient, MarketClient};
pub use domain::entities::{
    Listing, PriceOverview, PurchaseReceipt, SearchResult, SteamCredentials,
};
pub use domain::value_objects::{Price, PriceError};
pub use error::{MarketError, MarketResult};
pub use infra::steam::SteamMarketClient;
pub use presentation::router::{market_router, market_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};

#[cfg(test)]
mod tests;
