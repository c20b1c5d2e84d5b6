//! Delete Track Use Case

use kernel::id::{TrackId, UserId};
use std::sync::Arc;

use crate::domain::repository::TrackRepository;
use crate::error::{TracksError, TracksResult};

/// Delete track use case
pub struct DeleteTrackUseCase<T>
where
    T: TrackRepository,
{
    track_repo: Arc<T>,
}

impl<T> DeleteTrackUseCase<T>
where
    T: TrackRepository,
{
    pub fn new(track_repo: Arc<T>) -> Self {
        Self { track_repo }
    }

    pub async fn execute(&self, user_id: &UserId, track_id: &TrackId) -> TracksResult<()> {
        if !self.track_repo.delete(user_id, track_id).await? {
            return Err(TracksError::TrackNotFound);
        }

        tracing::info!(user_id = %user_id, track_id = %track_id, "Track deleted");

        Ok(())
    }
}
