//! Market Router

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::application::config::MarketConfig;
use crate::domain::client::MarketClient;
use crate::infra::steam::SteamMarketClient;
use crate::presentation::handlers::{self, MarketAppState};

/// Create the Market router backed by the live marketplace
pub fn market_router(client: SteamMarketClient, config: MarketConfig) -> Router {
    market_router_generic(client, config)
}

/// Create a generic Market router for any client implementation
pub fn market_router_generic<M>(client: M, config: MarketConfig) -> Router
where
    M: MarketClient + Send + Sync + 'static,
{
    let state = MarketAppState {
        client: Arc::new(client),
        config: Arc::new(config),
    };

    Router::new()
        .route("/search", get(handlers::search::<M>))
        .route("/price", get(handlers::price::<M>))
        .with_state(state)
}
