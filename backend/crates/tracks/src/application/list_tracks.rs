//! List Tracks Use Case

use kernel::id::UserId;
use std::sync::Arc;

use crate::domain::entities::Track;
use crate::domain::repository::TrackRepository;
use crate::error::TracksResult;

/// List tracks use case
pub struct ListTracksUseCase<T>
where
    T: TrackRepository,
{
    track_repo: Arc<T>,
}

impl<T> ListTracksUseCase<T>
where
    T: TrackRepository,
{
    pub fn new(track_repo: Arc<T>) -> Self {
        Self { track_repo }
    }

    /// All of the user's tracks, newest first
    pub async fn execute(&self, user_id: &UserId) -> TracksResult<Vec<Track>> {
        self.track_repo.list_by_user(user_id).await
    }
}
