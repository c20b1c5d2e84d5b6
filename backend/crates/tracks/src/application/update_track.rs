//! Update Track Use Case

use kernel::id::{TrackId, UserId};
use std::sync::Arc;

use crate::application::create_track::{price_field, status_field};
use crate::domain::entities::{Track, TrackChanges};
use crate::domain::repository::TrackRepository;
use crate::error::{TracksError, TracksResult};

/// Partial update input; absent fields keep their value
#[derive(Debug, Clone, Default)]
pub struct UpdateTrackInput {
    pub current_price: Option<f64>,
    pub target_price: Option<f64>,
    pub status: Option<String>,
    pub auto_purchase: Option<bool>,
}

impl UpdateTrackInput {
    fn validate(self) -> TracksResult<TrackChanges> {
        Ok(TrackChanges {
            current_price: self
                .current_price
                .map(|p| price_field("current_price", p))
                .transpose()?,
            target_price: self
                .target_price
                .map(|p| price_field("target_price", p))
                .transpose()?,
            status: self.status.as_deref().map(status_field).transpose()?,
            auto_purchase: self.auto_purchase,
        })
    }
}

/// Update track use case
pub struct UpdateTrackUseCase<T>
where
    T: TrackRepository,
{
    track_repo: Arc<T>,
}

impl<T> UpdateTrackUseCase<T>
where
    T: TrackRepository,
{
    pub fn new(track_repo: Arc<T>) -> Self {
        Self { track_repo }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        track_id: &TrackId,
        input: UpdateTrackInput,
    ) -> TracksResult<Track> {
        let changes = input.validate()?;

        let track = self
            .track_repo
            .update(user_id, track_id, &changes)
            .await?
            .ok_or(TracksError::TrackNotFound)?;

        tracing::info!(user_id = %user_id, track_id = %track_id, "Track updated");

        Ok(track)
    }
}
