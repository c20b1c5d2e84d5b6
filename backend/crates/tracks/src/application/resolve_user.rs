//! Resolve User Use Case
//!
//! Maps the caller's Steam id to a user row, creating it on first sight.

use std::sync::Arc;

use crate::application::config::TracksConfig;
use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::domain::services::default_user_name;
use crate::error::TracksResult;

/// Resolve user use case
pub struct ResolveUserUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<TracksConfig>,
}

impl<U> ResolveUserUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>, config: Arc<TracksConfig>) -> Self {
        Self { user_repo, config }
    }

    pub async fn execute(&self, steam_id: &str) -> TracksResult<User> {
        let user_name = default_user_name(&self.config.user_name_prefix, steam_id);
        let user = self.user_repo.find_or_create(steam_id, &user_name).await?;

        tracing::debug!(steam_id = %steam_id, user_id = %user.user_id, "Resolved user");

        Ok(user)
    }
}
