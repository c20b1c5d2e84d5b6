//! HTTP Handlers

use axum::Json;
use axum::extract::{Query, State};
use std::sync::Arc;

use crate::application::config::MarketConfig;
use crate::application::price_lookup::PriceLookupUseCase;
use crate::application::search_items::SearchItemsUseCase;
use crate::domain::client::MarketClient;
use crate::error::MarketResult;
use crate::presentation::dto::{
    PriceQuery, PriceResponse, SearchItemResponse, SearchQuery, SearchResponse,
};

/// Shared state for market handlers
pub struct MarketAppState<M>
where
    M: MarketClient + Send + Sync + 'static,
{
    pub client: Arc<M>,
    pub config: Arc<MarketConfig>,
}

// Manual impl: the client itself need not be `Clone`
impl<M> Clone for MarketAppState<M>
where
    M: MarketClient + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            config: self.config.clone(),
        }
    }
}

/// GET /api/market/search?q=
pub async fn search<M>(
    State(state): State<MarketAppState<M>>,
    Query(query): Query<SearchQuery>,
) -> MarketResult<Json<SearchResponse>>
where
    M: MarketClient + Send + Sync + 'static,
{
    let use_case = SearchItemsUseCase::new(state.client.clone(), state.config.clone());

    let items = use_case.execute(query.q.as_deref()).await?;
    let results: Vec<SearchItemResponse> = items.into_iter().map(Into::into).collect();

    Ok(Json(SearchResponse {
        total: results.len(),
        results,
    }))
}

/// GET /api/market/price?item=
pub async fn price<M>(
    State(state): State<MarketAppState<M>>,
    Query(query): Query<PriceQuery>,
) -> MarketResult<Json<PriceResponse>>
where
    M: MarketClient + Send + Sync + 'static,
{
    let use_case = PriceLookupUseCase::new(state.client.clone(), state.config.clone());

    let output = use_case.execute(query.item.as_deref()).await?;

    Ok(Json(output.into()))
}
