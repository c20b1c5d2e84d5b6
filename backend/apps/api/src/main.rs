//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request errors are rendered by
//! each crate through `kernel::error::AppError`.

mod config;

use axum::{
    Router, http,
    http::{HeaderName, Method, header},
};
use market::{SteamMarketClient, market_router};
use platform::client::STEAM_ID_HEADER;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use std::str::FromStr;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracks::{PgTracksRepository, tracks_router};

use crate::config::{AppConfig, DEFAULT_LOG_FILTER};

fn cors_layer(origins: Option<&[String]>) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::ACCEPT,
            HeaderName::from_static(STEAM_ID_HEADER),
        ]));

    match origins {
        Some(origins) => {
            let allowed: Vec<http::HeaderValue> = origins
                .iter()
                .filter_map(|origin| origin.parse().ok())
                .collect();
            cors.allow_origin(allowed)
        }
        None => cors.allow_origin(AllowOrigin::any()),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    // Database connection
    let mut connect_options = PgConnectOptions::from_str(&config.database_url)?;
    if let Some(schema) = &config.db_schema {
        connect_options = connect_options.options([("search_path", schema.as_str())]);
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(connect_options)
        .await?;

    tracing::info!(schema = ?config.db_schema, "Connected to database");

    if let Some(schema) = &config.db_schema {
        // Validated as a plain identifier by AppConfig
        sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS \"{}\"", schema))
            .execute(&pool)
            .await?;
    }

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // One outbound client shared by both routers
    let market_client = SteamMarketClient::new(config.market.clone())?;
    tracing::info!(
        base_url = %config.market.base_url,
        app_id = config.market.app_id,
        currency = config.market.currency,
        auto_purchase = config.tracks.auto_purchase_enabled,
        "Marketplace client ready"
    );

    let tracks_repo = PgTracksRepository::new(pool.clone());

    // Build router
    let app = Router::new()
        .nest(
            "/api/market",
            market_router(market_client.clone(), config.market.clone()),
        )
        .nest(
            "/api/tracks",
            tracks_router(tracks_repo, market_client, config.tracks.clone()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(config.frontend_origins.as_deref()));

    // Start server
    tracing::info!("Listening on {}", config.bind_addr);

    let listener = TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_builds_for_both_modes() {
        let _ = cors_layer(None);
        let _ = cors_layer(Some(&["http://localhost:5173".to_string()]));
    }
}
