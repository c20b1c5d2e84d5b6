//! HTTP Handlers
//!
//! The caller is resolved by `require_steam_user` before any handler runs.

use axum::Json;
use axum::extract::{Extension, Path, State};
use axum::http::StatusCode;
use kernel::id::TrackId;
use market::MarketClient;
use std::sync::Arc;

use crate::application::config::TracksConfig;
use crate::application::{
    CreateTrackUseCase, DeleteTrackUseCase, GetTrackUseCase, ListPurchasesUseCase,
    ListTracksUseCase, RefreshPricesUseCase, SaveCredentialsUseCase, UpdateTrackUseCase,
};
use crate::domain::repository::{PurchaseRepository, TrackRepository, UserRepository};
use crate::error::{TracksError, TracksResult};
use crate::presentation::dto::{
    CreateTrackRequest, MessageResponse, PurchaseResponse, RefreshPricesResponse,
    SteamCredentialsRequest, SuccessResponse, TrackResponse, UpdateTrackRequest,
};
use crate::presentation::middleware::CurrentUser;

/// Shared state for tracks handlers
pub struct TracksAppState<R, M>
where
    R: UserRepository + TrackRepository + PurchaseRepository + Send + Sync + 'static,
    M: MarketClient + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub market: Arc<M>,
    pub config: Arc<TracksConfig>,
}

impl<R, M> Clone for TracksAppState<R, M>
where
    R: UserRepository + TrackRepository + PurchaseRepository + Send + Sync + 'static,
    M: MarketClient + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            market: self.market.clone(),
            config: self.config.clone(),
        }
    }
}

/// Unparsable ids cannot name an existing track
fn parse_track_id(raw: &str) -> TracksResult<TrackId> {
    raw.parse().map_err(|_| TracksError::TrackNotFound)
}

// ============================================================================
// Tracks
// ============================================================================

/// GET /api/tracks
pub async fn list_tracks<R, M>(
    State(state): State<TracksAppState<R, M>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> TracksResult<Json<Vec<TrackResponse>>>
where
    R: UserRepository + TrackRepository + PurchaseRepository + Send + Sync + 'static,
    M: MarketClient + Send + Sync + 'static,
{
    let tracks = ListTracksUseCase::new(state.repo.clone())
        .execute(&user.user_id)
        .await?;

    Ok(Json(tracks.into_iter().map(Into::into).collect()))
}

/// GET /api/tracks/{id}
pub async fn get_track<R, M>(
    State(state): State<TracksAppState<R, M>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> TracksResult<Json<TrackResponse>>
where
    R: UserRepository + TrackRepository + PurchaseRepository + Send + Sync + 'static,
    M: MarketClient + Send + Sync + 'static,
{
    let track_id = parse_track_id(&id)?;

    let track = GetTrackUseCase::new(state.repo.clone())
        .execute(&user.user_id, &track_id)
        .await?;

    Ok(Json(track.into()))
}

/// POST /api/tracks
pub async fn create_track<R, M>(
    State(state): State<TracksAppState<R, M>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<CreateTrackRequest>,
) -> TracksResult<(StatusCode, Json<TrackResponse>)>
where
    R: UserRepository + TrackRepository + PurchaseRepository + Send + Sync + 'static,
    M: MarketClient + Send + Sync + 'static,
{
    let track = CreateTrackUseCase::new(state.repo.clone())
        .execute(&user.user_id, req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(track.into())))
}

/// PUT /api/tracks/{id}
pub async fn update_track<R, M>(
    State(state): State<TracksAppState<R, M>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(req): Json<UpdateTrackRequest>,
) -> TracksResult<Json<TrackResponse>>
where
    R: UserRepository + TrackRepository + PurchaseRepository + Send + Sync + 'static,
    M: MarketClient + Send + Sync + 'static,
{
    let track_id = parse_track_id(&id)?;

    let track = UpdateTrackUseCase::new(state.repo.clone())
        .execute(&user.user_id, &track_id, req.into())
        .await?;

    Ok(Json(track.into()))
}

/// DELETE /api/tracks/{id}
pub async fn delete_track<R, M>(
    State(state): State<TracksAppState<R, M>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> TracksResult<Json<MessageResponse>>
where
    R: UserRepository + TrackRepository + PurchaseRepository + Send + Sync + 'static,
    M: MarketClient + Send + Sync + 'static,
{
    let track_id = parse_track_id(&id)?;

    DeleteTrackUseCase::new(state.repo.clone())
        .execute(&user.user_id, &track_id)
        .await?;

    Ok(Json(MessageResponse {
        message: "Track deleted successfully".to_string(),
    }))
}

// ============================================================================
// Credentials
// ============================================================================

/// PUT /api/tracks/steam-credentials
pub async fn save_credentials<R, M>(
    State(state): State<TracksAppState<R, M>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
    Json(req): Json<SteamCredentialsRequest>,
) -> TracksResult<Json<SuccessResponse>>
where
    R: UserRepository + TrackRepository + PurchaseRepository + Send + Sync + 'static,
    M: MarketClient + Send + Sync + 'static,
{
    SaveCredentialsUseCase::new(state.repo.clone())
        .execute(&user.user_id, req.into())
        .await?;

    Ok(Json(SuccessResponse { success: true }))
}

// ============================================================================
// Prices and purchases
// ============================================================================

/// POST /api/tracks/update-prices
pub async fn refresh_prices<R, M>(
    State(state): State<TracksAppState<R, M>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> TracksResult<Json<RefreshPricesResponse>>
where
    R: UserRepository + TrackRepository + PurchaseRepository + Send + Sync + 'static,
    M: MarketClient + Send + Sync + 'static,
{
    let use_case = RefreshPricesUseCase::new(
        state.repo.clone(),
        state.repo.clone(),
        state.repo.clone(),
        state.market.clone(),
        state.config.clone(),
    );

    let output = use_case.execute(&user.user_id).await?;

    Ok(Json(output.into()))
}

/// GET /api/tracks/purchases
pub async fn list_purchases<R, M>(
    State(state): State<TracksAppState<R, M>>,
    Extension(CurrentUser(user)): Extension<CurrentUser>,
) -> TracksResult<Json<Vec<PurchaseResponse>>>
where
    R: UserRepository + TrackRepository + PurchaseRepository + Send + Sync + 'static,
    M: MarketClient + Send + Sync + 'static,
{
    let purchases = ListPurchasesUseCase::new(state.repo.clone())
        .execute(&user.user_id)
        .await?;

    Ok(Json(purchases.into_iter().map(Into::into).collect()))
}
