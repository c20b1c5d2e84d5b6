//! Auto-Purchase Use Case
//!
//! Buys the cheapest listing of a tracked item when it fits the target
//! price. The track is claimed (`active` -> `purchased`) before the order is
//! sent, so concurrent refreshes and retries never buy the same track twice.
//! The claim is released only when the marketplace certainly refused.

use chrono::Utc;
use kernel::id::PurchaseId;
use market::{MarketClient, SteamCredentials};
use std::sync::Arc;

use crate::domain::entities::{Purchase, Track};
use crate::domain::repository::{PurchaseRepository, TrackRepository};
use crate::domain::services::within_budget;
use crate::domain::value_objects::TrackStatus;
use crate::error::{TracksError, TracksResult};

/// Auto-purchase use case
pub struct AutoPurchaseUseCase<M, T, P>
where
    M: MarketClient,
    T: TrackRepository,
    P: PurchaseRepository,
{
    market: Arc<M>,
    track_repo: Arc<T>,
    purchase_repo: Arc<P>,
}

impl<M, T, P> AutoPurchaseUseCase<M, T, P>
where
    M: MarketClient,
    T: TrackRepository,
    P: PurchaseRepository,
{
    pub fn new(market: Arc<M>, track_repo: Arc<T>, purchase_repo: Arc<P>) -> Self {
        Self {
            market,
            track_repo,
            purchase_repo,
        }
    }

    pub async fn execute(
        &self,
        track: &Track,
        credentials: Option<&SteamCredentials>,
    ) -> TracksResult<Purchase> {
        let credentials = credentials.ok_or(TracksError::CredentialsNotConfigured)?;

        let listing = self
            .market
            .cheapest_listing(&track.item_hash_name)
            .await?
            .ok_or(TracksError::NoListing)?;

        if !within_budget(listing.total(), track.target_price) {
            return Err(TracksError::ListingAboveTarget {
                total: listing.total(),
                target: track.target_price,
            });
        }

        let claimed = self
            .track_repo
            .transition_status(&track.track_id, TrackStatus::Active, TrackStatus::Purchased)
            .await?;
        if !claimed {
            return Err(TracksError::TrackNotActive);
        }

        let receipt = match self.market.buy_listing(&listing, credentials).await {
            Ok(receipt) => receipt,
            Err(e) if e.is_refusal() => {
                self.release(track).await;
                return Err(e.into());
            }
            Err(e) => {
                return Err(TracksError::PurchaseUnconfirmed {
                    listing_id: listing.listing_id,
                    source: e,
                });
            }
        };

        let purchase = Purchase {
            purchase_id: PurchaseId::new(),
            user_id: track.user_id,
            track_id: Some(track.track_id),
            item_name: track.item_hash_name.clone(),
            listing_id: receipt.listing_id,
            price: receipt.total,
            purchased_at: Utc::now(),
        };

        if let Err(e) = self.purchase_repo.create(&purchase).await {
            tracing::error!(
                user_id = %track.user_id,
                track_id = %track.track_id,
                listing_id = %purchase.listing_id,
                price = %purchase.price,
                error = ?e,
                "Purchase completed but could not be recorded"
            );
            return Err(TracksError::PurchaseNotRecorded {
                listing_id: purchase.listing_id,
            });
        }

        tracing::info!(
            user_id = %track.user_id,
            track_id = %track.track_id,
            hash_name = %track.item_hash_name,
            listing_id = %purchase.listing_id,
            price = %purchase.price,
            "Auto-purchase completed"
        );

        Ok(purchase)
    }

    async fn release(&self, track: &Track) {
        let released = self
            .track_repo
            .transition_status(&track.track_id, TrackStatus::Purchased, TrackStatus::Active)
            .await;
        if let Err(e) = released {
            // Track stays purchased until its owner reactivates it
            tracing::error!(
                track_id = %track.track_id,
                error = ?e,
                "Could not release purchase claim"
            );
        }
    }
}
