//! Get Track Use Case

use kernel::id::{TrackId, UserId};
use std::sync::Arc;

use crate::domain::entities::Track;
use crate::domain::repository::TrackRepository;
use crate::error::{TracksError, TracksResult};

/// Get track use case
pub struct GetTrackUseCase<T>
where
    T: TrackRepository,
{
    track_repo: Arc<T>,
}

impl<T> GetTrackUseCase<T>
where
    T: TrackRepository,
{
    pub fn new(track_repo: Arc<T>) -> Self {
        Self { track_repo }
    }

    pub async fn execute(&self, user_id: &UserId, track_id: &TrackId) -> TracksResult<Track> {
        self.track_repo
            .find(user_id, track_id)
            .await?
            .ok_or(TracksError::TrackNotFound)
    }
}
