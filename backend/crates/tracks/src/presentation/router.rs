//! Tracks Router

use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use market::{MarketClient, SteamMarketClient};
use std::sync::Arc;

use crate::application::config::TracksConfig;
use crate::domain::repository::{PurchaseRepository, TrackRepository, UserRepository};
use crate::infra::postgres::PgTracksRepository;
use crate::presentation::handlers::{self, TracksAppState};
use crate::presentation::middleware::{IdentityState, require_steam_user};

/// Create the Tracks router with PostgreSQL repository and the live marketplace
pub fn tracks_router(
    repo: PgTracksRepository,
    market: SteamMarketClient,
    config: TracksConfig,
) -> Router {
    tracks_router_generic(repo, market, config)
}

/// Create a generic Tracks router for any repository and marketplace client
pub fn tracks_router_generic<R, M>(repo: R, market: M, config: TracksConfig) -> Router
where
    R: UserRepository + TrackRepository + PurchaseRepository + Send + Sync + 'static,
    M: MarketClient + Send + Sync + 'static,
{
    let state = TracksAppState {
        repo: Arc::new(repo),
        market: Arc::new(market),
        config: Arc::new(config),
    };
    let identity = IdentityState {
        repo: state.repo.clone(),
        config: state.config.clone(),
    };

    Router::new()
        .route(
            "/",
            get(handlers::list_tracks::<R, M>).post(handlers::create_track::<R, M>),
        )
        .route(
            "/steam-credentials",
            put(handlers::save_credentials::<R, M>),
        )
        .route("/update-prices", post(handlers::refresh_prices::<R, M>))
        .route("/purchases", get(handlers::list_purchases::<R, M>))
        .route(
            "/{id}",
            get(handlers::get_track::<R, M>)
                .put(handlers::update_track::<R, M>)
                .delete(handlers::delete_track::<R, M>),
        )
        .route_layer(middleware::from_fn_with_state(
            identity,
            require_steam_user::<R>,
        ))
        .with_state(state)
}
