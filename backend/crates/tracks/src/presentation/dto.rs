//! API DTOs (Data Transfer Objects)
//!
//! Field names are snake_case on the wire. Prices travel as JSON numbers in
//! major units.

use chrono::{DateTime, Utc};
use kernel::id::{PurchaseId, TrackId, UserId};
use market::Price;
use serde::{Deserialize, Serialize};

use crate::application::{
    CreateTrackInput, PriceDrop, RefreshError, RefreshPricesOutput, SaveCredentialsInput,
    UpdateTrackInput,
};
use crate::domain::entities::{Purchase, Track};
use crate::domain::value_objects::TrackStatus;

// ============================================================================
// Tracks
// ============================================================================

/// Create track request; required fields are checked by the use case
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTrackRequest {
    pub item_name: Option<String>,
    pub item_hash_name: Option<String>,
    pub item_image: Option<String>,
    pub current_price: Option<f64>,
    pub target_price: Option<f64>,
    pub status: Option<String>,
    pub auto_purchase: Option<bool>,
}

impl From<CreateTrackRequest> for CreateTrackInput {
    fn from(req: CreateTrackRequest) -> Self {
        Self {
            item_name: req.item_name,
            item_hash_name: req.item_hash_name,
            item_image: req.item_image,
            current_price: req.current_price,
            target_price: req.target_price,
            status: req.status,
            auto_purchase: req.auto_purchase,
        }
    }
}

/// Partial update request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTrackRequest {
    pub current_price: Option<f64>,
    pub target_price: Option<f64>,
    pub status: Option<String>,
    pub auto_purchase: Option<bool>,
}

impl From<UpdateTrackRequest> for UpdateTrackInput {
    fn from(req: UpdateTrackRequest) -> Self {
        Self {
            current_price: req.current_price,
            target_price: req.target_price,
            status: req.status,
            auto_purchase: req.auto_purchase,
        }
    }
}

/// Track as returned by every track endpoint
#[derive(Debug, Clone, Serialize)]
pub struct TrackResponse {
    pub id: TrackId,
    pub user_id: UserId,
    pub item_name: String,
    pub item_hash_name: String,
    pub item_image: Option<String>,
    pub current_price: Option<Price>,
    pub target_price: Price,
    pub status: TrackStatus,
    pub auto_purchase: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Track> for TrackResponse {
    fn from(t: Track) -> Self {
        Self {
            id: t.track_id,
            user_id: t.user_id,
            item_name: t.item_name,
            item_hash_name: t.item_hash_name,
            item_image: t.item_image,
            current_price: t.current_price,
            target_price: t.target_price,
            status: t.status,
            auto_purchase: t.auto_purchase,
            created_at: t.created_at,
            updated_at: t.updated_at,
        }
    }
}

/// Plain message response
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

// ============================================================================
// Credentials
// ============================================================================

/// Credentials request; either part may be omitted
#[derive(Clone, Default, Deserialize)]
pub struct SteamCredentialsRequest {
    pub steam_cookie: Option<String>,
    pub steam_session_id: Option<String>,
}

impl From<SteamCredentialsRequest> for SaveCredentialsInput {
    fn from(req: SteamCredentialsRequest) -> Self {
        Self {
            steam_cookie: req.steam_cookie,
            steam_session_id: req.steam_session_id,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

// ============================================================================
// Purchases
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PurchaseResponse {
    pub id: PurchaseId,
    pub track_id: Option<TrackId>,
    pub item_name: String,
    pub listing_id: String,
    pub price: Price,
    pub purchased_at: DateTime<Utc>,
}

impl From<Purchase> for PurchaseResponse {
    fn from(p: Purchase) -> Self {
        Self {
            id: p.purchase_id,
            track_id: p.track_id,
            item_name: p.item_name,
            listing_id: p.listing_id,
            price: p.price,
            purchased_at: p.purchased_at,
        }
    }
}

// ============================================================================
// Price refresh
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct PriceDropResponse {
    pub track_id: TrackId,
    pub item_name: String,
    pub old_price: Price,
    pub new_price: Price,
    pub target_price: Price,
}

impl From<PriceDrop> for PriceDropResponse {
    fn from(d: PriceDrop) -> Self {
        Self {
            track_id: d.track_id,
            item_name: d.item_name,
            old_price: d.old_price,
            new_price: d.new_price,
            target_price: d.target_price,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshErrorResponse {
    pub track_id: TrackId,
    pub item_name: String,
    pub error: String,
}

impl From<RefreshError> for RefreshErrorResponse {
    fn from(e: RefreshError) -> Self {
        Self {
            track_id: e.track_id,
            item_name: e.item_name,
            error: e.error,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RefreshPricesResponse {
    pub updated: usize,
    pub total: usize,
    pub price_drops: Vec<PriceDropResponse>,
    pub purchases: Vec<PurchaseResponse>,
    pub errors: Vec<RefreshErrorResponse>,
}

impl From<RefreshPricesOutput> for RefreshPricesResponse {
    fn from(out: RefreshPricesOutput) -> Self {
        Self {
            updated: out.updated,
            total: out.total,
            price_drops: out.price_drops.into_iter().map(Into::into).collect(),
            purchases: out.purchases.into_iter().map(Into::into).collect(),
            errors: out.errors.into_iter().map(Into::into).collect(),
        }
    }
}
