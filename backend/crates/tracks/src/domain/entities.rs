//! Domain Entities

use chrono::{DateTime, Utc};
use kernel::id::{PurchaseId, TrackId, UserId};
use market::Price;

use crate::domain::value_objects::TrackStatus;

/// A marketplace account known to us by its Steam id
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub user_id: UserId,
    pub steam_id: String,
    pub user_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An item a user watches
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub track_id: TrackId,
    pub user_id: UserId,
    pub item_name: String,
    /// Marketplace key used for every price lookup
    pub item_hash_name: String,
    pub item_image: Option<String>,
    /// Last known price; `None` until the first refresh
    pub current_price: Option<Price>,
    pub target_price: Price,
    pub status: TrackStatus,
    pub auto_purchase: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Track {
    pub fn new(user_id: UserId, new: NewTrack) -> Self {
        let now = Utc::now();
        Self {
            track_id: TrackId::new(),
            user_id,
            item_name: new.item_name,
            item_hash_name: new.item_hash_name,
            item_image: new.item_image,
            current_price: new.current_price,
            target_price: new.target_price,
            status: new.status,
            auto_purchase: new.auto_purchase,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update; `updated_at` always moves
    pub fn apply(&mut self, changes: &TrackChanges) {
        if let Some(price) = changes.current_price {
            self.current_price = Some(price);
        }
        if let Some(price) = changes.target_price {
            self.target_price = price;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        if let Some(auto_purchase) = changes.auto_purchase {
            self.auto_purchase = auto_purchase;
        }
        self.updated_at = Utc::now();
    }
}

/// Validated input for a new track
#[derive(Debug, Clone, PartialEq)]
pub struct NewTrack {
    pub item_name: String,
    pub item_hash_name: String,
    pub item_image: Option<String>,
    pub current_price: Option<Price>,
    pub target_price: Price,
    pub status: TrackStatus,
    pub auto_purchase: bool,
}

/// Partial update of a track
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackChanges {
    pub current_price: Option<Price>,
    pub target_price: Option<Price>,
    pub status: Option<TrackStatus>,
    pub auto_purchase: Option<bool>,
}

/// A completed auto-purchase
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    pub purchase_id: PurchaseId,
    pub user_id: UserId,
    /// `None` once the track is deleted
    pub track_id: Option<TrackId>,
    pub item_name: String,
    pub listing_id: String,
    /// Total paid, fee included
    pub price: Price,
    pub purchased_at: DateTime<Utc>,
}
