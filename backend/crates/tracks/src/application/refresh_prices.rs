//! Refresh Prices Use Case
//!
//! Walks the caller's active tracks one at a time: fetch the price, store
//! it, report drops and auto-purchase when allowed. A marketplace failure
//! for one item is reported and the walk goes on; database failures abort,
//! except after an order was sent, where they become a reported error.

use kernel::id::{TrackId, UserId};
use market::{MarketClient, Price, SteamCredentials};
use std::sync::Arc;

use crate::application::config::TracksConfig;
use crate::application::purchase::AutoPurchaseUseCase;
use crate::domain::entities::{Purchase, Track};
use crate::domain::repository::{PurchaseRepository, TrackRepository, UserRepository};
use crate::domain::services::is_price_drop;
use crate::error::{TracksError, TracksResult};

const FETCH_FAILED: &str = "Failed to fetch price";

/// A refreshed price at or below the target
#[derive(Debug, Clone, PartialEq)]
pub struct PriceDrop {
    pub track_id: TrackId,
    /// Hash name of the item
    pub item_name: String,
    /// Previous current price, zero when unknown
    pub old_price: Price,
    pub new_price: Price,
    pub target_price: Price,
}

/// A track that could not be refreshed or bought
#[derive(Debug, Clone, PartialEq)]
pub struct RefreshError {
    pub track_id: TrackId,
    pub item_name: String,
    pub error: String,
}

/// Refresh prices output
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RefreshPricesOutput {
    pub updated: usize,
    pub total: usize,
    pub price_drops: Vec<PriceDrop>,
    pub purchases: Vec<Purchase>,
    pub errors: Vec<RefreshError>,
}

/// Refresh prices use case
pub struct RefreshPricesUseCase<U, T, P, M>
where
    U: UserRepository,
    T: TrackRepository,
    P: PurchaseRepository,
    M: MarketClient,
{
    user_repo: Arc<U>,
    track_repo: Arc<T>,
    market: Arc<M>,
    purchase: AutoPurchaseUseCase<M, T, P>,
    config: Arc<TracksConfig>,
}

impl<U, T, P, M> RefreshPricesUseCase<U, T, P, M>
where
    U: UserRepository,
    T: TrackRepository,
    P: PurchaseRepository,
    M: MarketClient,
{
    pub fn new(
        user_repo: Arc<U>,
        track_repo: Arc<T>,
        purchase_repo: Arc<P>,
        market: Arc<M>,
        config: Arc<TracksConfig>,
    ) -> Self {
        Self {
            purchase: AutoPurchaseUseCase::new(market.clone(), track_repo.clone(), purchase_repo),
            user_repo,
            track_repo,
            market,
            config,
        }
    }

    pub async fn execute(&self, user_id: &UserId) -> TracksResult<RefreshPricesOutput> {
        let tracks = self.track_repo.list_active_by_user(user_id).await?;
        let mut out = RefreshPricesOutput {
            total: tracks.len(),
            ..Default::default()
        };
        // Loaded on the first purchase attempt only
        let mut credentials: Option<Option<SteamCredentials>> = None;

        for track in &tracks {
            let Some(new_price) = self.fetch_price(track).await else {
                out.errors.push(RefreshError {
                    track_id: track.track_id,
                    item_name: track.item_hash_name.clone(),
                    error: FETCH_FAILED.to_string(),
                });
                continue;
            };

            self.track_repo.record_price(&track.track_id, new_price).await?;
            out.updated += 1;

            if !is_price_drop(new_price, track.target_price) {
                continue;
            }

            tracing::info!(
                track_id = %track.track_id,
                hash_name = %track.item_hash_name,
                new_price = %new_price,
                target_price = %track.target_price,
                "Price drop"
            );
            out.price_drops.push(PriceDrop {
                track_id: track.track_id,
                item_name: track.item_hash_name.clone(),
                old_price: track.current_price.unwrap_or(Price::ZERO),
                new_price,
                target_price: track.target_price,
            });

            if !(track.auto_purchase && self.config.auto_purchase_enabled) {
                continue;
            }

            if credentials.is_none() {
                credentials = Some(self.user_repo.credentials(user_id).await?);
            }
            let creds = credentials.as_ref().and_then(Option::as_ref);

            match self.purchase.execute(track, creds).await {
                Ok(purchase) => out.purchases.push(purchase),
                // Only reachable before an order is sent
                Err(e @ TracksError::Database(_)) => return Err(e),
                Err(e) if e.purchase_may_have_completed() => {
                    tracing::error!(
                        user_id = %user_id,
                        track_id = %track.track_id,
                        hash_name = %track.item_hash_name,
                        error = %e,
                        "Auto-purchase needs reconciliation"
                    );
                    out.errors.push(RefreshError {
                        track_id: track.track_id,
                        item_name: track.item_hash_name.clone(),
                        error: e.to_string(),
                    });
                }
                Err(e) => {
                    tracing::warn!(
                        track_id = %track.track_id,
                        hash_name = %track.item_hash_name,
                        error = %e,
                        "Auto-purchase failed"
                    );
                    out.errors.push(RefreshError {
                        track_id: track.track_id,
                        item_name: track.item_hash_name.clone(),
                        error: format!("Purchase failed: {}", e),
                    });
                }
            }
        }

        tracing::info!(
            user_id = %user_id,
            total = out.total,
            updated = out.updated,
            price_drops = out.price_drops.len(),
            purchases = out.purchases.len(),
            errors = out.errors.len(),
            "Prices refreshed"
        );

        Ok(out)
    }

    async fn fetch_price(&self, track: &Track) -> Option<Price> {
        match self.market.price_overview(&track.item_hash_name).await {
            Ok(Some(overview)) => {
                let price = overview.lowest_price_value();
                if price.is_none() {
                    tracing::debug!(hash_name = %track.item_hash_name, "No usable lowest price");
                }
                price
            }
            Ok(None) => {
                tracing::debug!(hash_name = %track.item_hash_name, "Item unknown to marketplace");
                None
            }
            Err(e) => {
                tracing::warn!(hash_name = %track.item_hash_name, error = %e, "Price fetch failed");
                None
            }
        }
    }
}
