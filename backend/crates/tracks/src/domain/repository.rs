//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Every track query is scoped by owner: a track of another user behaves as
//! if it did not exist.

use kernel::id::{TrackId, UserId};
use market::{Price, SteamCredentials};

use crate::domain::entities::{Purchase, Track, TrackChanges, User};
use crate::domain::value_objects::TrackStatus;
use crate::error::TracksResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Get the user with this Steam id, creating it with `user_name` if new
    async fn find_or_create(&self, steam_id: &str, user_name: &str) -> TracksResult<User>;

    /// Stored marketplace credentials; `None` unless both parts are present
    async fn credentials(&self, user_id: &UserId) -> TracksResult<Option<SteamCredentials>>;

    /// Overwrite the provided parts, keep the others
    async fn update_credentials(
        &self,
        user_id: &UserId,
        cookie: Option<&str>,
        session_id: Option<&str>,
    ) -> TracksResult<()>;
}

/// Track repository trait
#[trait_variant::make(TrackRepository: Send)]
pub trait LocalTrackRepository {
    /// All tracks of a user, newest first
    async fn list_by_user(&self, user_id: &UserId) -> TracksResult<Vec<Track>>;

    /// Active tracks of a user, newest first
    async fn list_active_by_user(&self, user_id: &UserId) -> TracksResult<Vec<Track>>;

    /// Find one track of a user
    async fn find(&self, user_id: &UserId, track_id: &TrackId) -> TracksResult<Option<Track>>;

    /// Create a new track
    async fn create(&self, track: &Track) -> TracksResult<()>;

    /// Apply a partial update; `None` when the track does not exist
    async fn update(
        &self,
        user_id: &UserId,
        track_id: &TrackId,
        changes: &TrackChanges,
    ) -> TracksResult<Option<Track>>;

    /// Move a track from `from` to `to` atomically; `false` when it was not
    /// in `from`. Only one caller can win a claim.
    async fn transition_status(
        &self,
        track_id: &TrackId,
        from: TrackStatus,
        to: TrackStatus,
    ) -> TracksResult<bool>;

    /// Store a refreshed price
    async fn record_price(&self, track_id: &TrackId, price: Price) -> TracksResult<()>;

    /// Delete a track; `false` when it does not exist
    async fn delete(&self, user_id: &UserId, track_id: &TrackId) -> TracksResult<bool>;
}

/// Purchase repository trait
#[trait_variant::make(PurchaseRepository: Send)]
pub trait LocalPurchaseRepository {
    /// Record a completed purchase
    async fn create(&self, purchase: &Purchase) -> TracksResult<()>;

    /// Purchases of a user, newest first
    async fn list_by_user(&self, user_id: &UserId) -> TracksResult<Vec<Purchase>>;
}
