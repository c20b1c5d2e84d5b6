//! Save Credentials Use Case
//!
//! Stores the marketplace session used for auto-purchase.

use kernel::id::UserId;
use platform::cookie::extract_cookie;
use std::sync::Arc;

use crate::domain::repository::UserRepository;
use crate::error::{TracksError, TracksResult};

/// Save credentials input; only provided parts are written.
/// Blank values count as not provided.
#[derive(Clone, Default)]
pub struct SaveCredentialsInput {
    pub steam_cookie: Option<String>,
    pub steam_session_id: Option<String>,
}

/// Save credentials use case
pub struct SaveCredentialsUseCase<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
}

impl<U> SaveCredentialsUseCase<U>
where
    U: UserRepository,
{
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    pub async fn execute(&self, user_id: &UserId, input: SaveCredentialsInput) -> TracksResult<()> {
        let cookie = non_blank(input.steam_cookie.as_deref());
        // A browser cookie usually carries the session id already
        let session_id = match non_blank(input.steam_session_id.as_deref()) {
            Some(session_id) => Some(session_id.to_string()),
            None => cookie
                .and_then(|c| extract_cookie(c, "sessionid"))
                .filter(|s| !s.trim().is_empty()),
        };

        if cookie.is_none() && session_id.is_none() {
            return Err(TracksError::NoCredentialsProvided);
        }

        self.user_repo
            .update_credentials(user_id, cookie, session_id.as_deref())
            .await?;

        // Values stay out of the log
        tracing::info!(
            user_id = %user_id,
            cookie = cookie.is_some(),
            session_id = session_id.is_some(),
            "Steam credentials saved"
        );

        Ok(())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
