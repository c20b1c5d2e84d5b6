//! PostgreSQL Repository Implementations
//!
//! Prices are stored as `BIGINT` minor units.

use chrono::{DateTime, Utc};
use kernel::id::{PurchaseId, TrackId, UserId};
use market::{Price, SteamCredentials};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entities::{Purchase, Track, TrackChanges, User};
use crate::domain::repository::{PurchaseRepository, TrackRepository, UserRepository};
use crate::domain::value_objects::TrackStatus;
use crate::error::{TracksError, TracksResult};

const TRACK_COLUMNS: &str = r#"
    track_id,
    user_id,
    item_name,
    item_hash_name,
    item_image,
    current_price_minor,
    target_price_minor,
    status,
    auto_purchase,
    created_at,
    updated_at
"#;

/// PostgreSQL-backed tracks repository
#[derive(Clone)]
pub struct PgTracksRepository {
    pool: PgPool,
}

impl PgTracksRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// User Repository Implementation
// ============================================================================

impl UserRepository for PgTracksRepository {
    async fn find_or_create(&self, steam_id: &str, user_name: &str) -> TracksResult<User> {
        // No-op update so RETURNING yields the existing row on conflict
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (user_id, steam_id, user_name, created_at, updated_at)
            VALUES ($1, $2, $3, NOW(), NOW())
            ON CONFLICT (steam_id) DO UPDATE SET steam_id = EXCLUDED.steam_id
            RETURNING user_id, steam_id, user_name, created_at, updated_at
            "#,
        )
        .bind(UserId::new().into_uuid())
        .bind(steam_id)
        .bind(user_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_user())
    }

    async fn credentials(&self, user_id: &UserId) -> TracksResult<Option<SteamCredentials>> {
        let row = sqlx::query_as::<_, (Option<String>, Option<String>)>(
            "SELECT steam_cookie, steam_session_id FROM users WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        Ok(match row {
            Some((Some(cookie), Some(session_id)))
                if !cookie.trim().is_empty() && !session_id.trim().is_empty() =>
            {
                Some(SteamCredentials::new(cookie, session_id))
            }
            _ => None,
        })
    }

    async fn update_credentials(
        &self,
        user_id: &UserId,
        cookie: Option<&str>,
        session_id: Option<&str>,
    ) -> TracksResult<()> {
        sqlx::query(
            r#"
            UPDATE users SET
                steam_cookie = COALESCE($2, steam_cookie),
                steam_session_id = COALESCE($3, steam_session_id),
                updated_at = NOW()
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(cookie)
        .bind(session_id)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

// ============================================================================
// Track Repository Implementation
// ============================================================================

impl TrackRepository for PgTracksRepository {
    async fn list_by_user(&self, user_id: &UserId) -> TracksResult<Vec<Track>> {
        let rows = sqlx::query_as::<_, TrackRow>(&format!(
            "SELECT {TRACK_COLUMNS} FROM tracks WHERE user_id = $1 ORDER BY created_at DESC"
        ))
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TrackRow::into_track).collect()
    }

    async fn list_active_by_user(&self, user_id: &UserId) -> TracksResult<Vec<Track>> {
        let rows = sqlx::query_as::<_, TrackRow>(&format!(
            "SELECT {TRACK_COLUMNS} FROM tracks \
             WHERE user_id = $1 AND status = $2 ORDER BY created_at DESC"
        ))
        .bind(user_id.as_uuid())
        .bind(TrackStatus::Active.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(TrackRow::into_track).collect()
    }

    async fn find(&self, user_id: &UserId, track_id: &TrackId) -> TracksResult<Option<Track>> {
        let row = sqlx::query_as::<_, TrackRow>(&format!(
            "SELECT {TRACK_COLUMNS} FROM tracks WHERE track_id = $1 AND user_id = $2"
        ))
        .bind(track_id.as_uuid())
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(TrackRow::into_track).transpose()
    }

    async fn create(&self, track: &Track) -> TracksResult<()> {
        sqlx::query(
            r#"
            INSERT INTO tracks (
                track_id,
                user_id,
                item_name,
                item_hash_name,
                item_image,
                current_price_minor,
                target_price_minor,
                status,
                auto_purchase,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(track.track_id.as_uuid())
        .bind(track.user_id.as_uuid())
        .bind(&track.item_name)
        .bind(&track.item_hash_name)
        .bind(&track.item_image)
        .bind(track.current_price.map(|p| p.minor()))
        .bind(track.target_price.minor())
        .bind(track.status.as_str())
        .bind(track.auto_purchase)
        .bind(track.created_at)
        .bind(track.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn update(
        &self,
        user_id: &UserId,
        track_id: &TrackId,
        changes: &TrackChanges,
    ) -> TracksResult<Option<Track>> {
        let row = sqlx::query_as::<_, TrackRow>(&format!(
            r#"
            UPDATE tracks SET
                current_price_minor = COALESCE($3, current_price_minor),
                target_price_minor = COALESCE($4, target_price_minor),
                status = COALESCE($5, status),
                auto_purchase = COALESCE($6, auto_purchase),
                updated_at = NOW()
            WHERE track_id = $1 AND user_id = $2
            RETURNING {TRACK_COLUMNS}
            "#
        ))
        .bind(track_id.as_uuid())
        .bind(user_id.as_uuid())
        .bind(changes.current_price.map(|p| p.minor()))
        .bind(changes.target_price.map(|p| p.minor()))
        .bind(changes.status.map(|s| s.as_str()))
        .bind(changes.auto_purchase)
        .fetch_optional(&self.pool)
        .await?;

        row.map(TrackRow::into_track).transpose()
    }

    async fn transition_status(
        &self,
        track_id: &TrackId,
        from: TrackStatus,
        to: TrackStatus,
    ) -> TracksResult<bool> {
        let row = sqlx::query_scalar::<_, Uuid>(
            r#"
            UPDATE tracks SET status = $3, updated_at = NOW()
            WHERE track_id = $1 AND status = $2
            RETURNING track_id
            "#,
        )
        .bind(track_id.as_uuid())
        .bind(from.as_str())
        .bind(to.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }

    async fn record_price(&self, track_id: &TrackId, price: Price) -> TracksResult<()> {
        sqlx::query(
            "UPDATE tracks SET current_price_minor = $2, updated_at = NOW() WHERE track_id = $1",
        )
        .bind(track_id.as_uuid())
        .bind(price.minor())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete(&self, user_id: &UserId, track_id: &TrackId) -> TracksResult<bool> {
        let deleted = sqlx::query("DELETE FROM tracks WHERE track_id = $1 AND user_id = $2")
            .bind(track_id.as_uuid())
            .bind(user_id.as_uuid())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Purchase Repository Implementation
// ============================================================================

impl PurchaseRepository for PgTracksRepository {
    async fn create(&self, purchase: &Purchase) -> TracksResult<()> {
        sqlx::query(
            r#"
            INSERT INTO purchases (
                purchase_id,
                user_id,
                track_id,
                item_name,
                listing_id,
                price_minor,
                purchased_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(purchase.purchase_id.as_uuid())
        .bind(purchase.user_id.as_uuid())
        .bind(purchase.track_id.map(TrackId::into_uuid))
        .bind(&purchase.item_name)
        .bind(&purchase.listing_id)
        .bind(purchase.price.minor())
        .bind(purchase.purchased_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_by_user(&self, user_id: &UserId) -> TracksResult<Vec<Purchase>> {
        let rows = sqlx::query_as::<_, PurchaseRow>(
            r#"
            SELECT
                purchase_id,
                user_id,
                track_id,
                item_name,
                listing_id,
                price_minor,
                purchased_at
            FROM purchases
            WHERE user_id = $1
            ORDER BY purchased_at DESC
            "#,
        )
        .bind(user_id.as_uuid())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PurchaseRow::into_purchase).collect()
    }
}

// ============================================================================
// Row types
// ============================================================================

fn stored_price(column: &str, minor: i64) -> TracksResult<Price> {
    Price::from_minor(minor)
        .map_err(|e| TracksError::Internal(format!("Invalid {} in database: {}", column, e)))
}

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    steam_id: String,
    user_name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> User {
        User {
            user_id: UserId::from_uuid(self.user_id),
            steam_id: self.steam_id,
            user_name: self.user_name,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TrackRow {
    track_id: Uuid,
    user_id: Uuid,
    item_name: String,
    item_hash_name: String,
    item_image: Option<String>,
    current_price_minor: Option<i64>,
    target_price_minor: i64,
    status: String,
    auto_purchase: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TrackRow {
    fn into_track(self) -> TracksResult<Track> {
        let status = self
            .status
            .parse::<TrackStatus>()
            .map_err(|e| TracksError::Internal(format!("Invalid status in database: {}", e)))?;

        Ok(Track {
            track_id: TrackId::from_uuid(self.track_id),
            user_id: UserId::from_uuid(self.user_id),
            item_name: self.item_name,
            item_hash_name: self.item_hash_name,
            item_image: self.item_image,
            current_price: self
                .current_price_minor
                .map(|m| stored_price("current_price_minor", m))
                .transpose()?,
            target_price: stored_price("target_price_minor", self.target_price_minor)?,
            status,
            auto_purchase: self.auto_purchase,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct PurchaseRow {
    purchase_id: Uuid,
    user_id: Uuid,
    track_id: Option<Uuid>,
    item_name: String,
    listing_id: String,
    price_minor: i64,
    purchased_at: DateTime<Utc>,
}

impl PurchaseRow {
    fn into_purchase(self) -> TracksResult<Purchase> {
        Ok(Purchase {
            purchase_id: PurchaseId::from_uuid(self.purchase_id),
            user_id: UserId::from_uuid(self.user_id),
            track_id: self.track_id.map(TrackId::from_uuid),
            item_name: self.item_name,
            listing_id: self.listing_id,
            price: stored_price("price_minor", self.price_minor)?,
            purchased_at: self.purchased_at,
        })
    }
}
