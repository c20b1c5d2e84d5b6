//! Caller Identity Middleware
//!
//! Every tracks route needs an `X-Steam-Id` header. The middleware resolves
//! it to a user (creating one on first sight) and hands it to the handlers
//! as a request extension.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use platform::client::extract_steam_id;
use std::sync::Arc;

use crate::application::config::TracksConfig;
use crate::application::ResolveUserUseCase;
use crate::domain::entities::User;
use crate::domain::repository::UserRepository;
use crate::error::TracksResult;

/// Middleware state
pub struct IdentityState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<U>,
    pub config: Arc<TracksConfig>,
}

impl<U> Clone for IdentityState<U>
where
    U: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}

/// Resolved caller, stored in request extensions
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

/// Middleware that requires a Steam id and resolves it to a user
pub async fn require_steam_user<U>(
    State(state): State<IdentityState<U>>,
    mut req: Request<Body>,
    next: Next,
) -> TracksResult<Response>
where
    U: UserRepository + Send + Sync + 'static,
{
    let steam_id = extract_steam_id(req.headers())?;

    let use_case = ResolveUserUseCase::new(state.repo.clone(), state.config.clone());
    let user = use_case.execute(&steam_id).await?;

    req.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(req).await)
}
