//! Tracks Error Types
//!
//! Tracks-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use market::{MarketError, Price};
use thiserror::Error;

/// Tracks-specific result type alias
pub type TracksResult<T> = Result<T, TracksError>;

/// Tracks-specific error variants
#[derive(Debug, Error)]
pub enum TracksError {
    /// No caller identity header
    #[error("Authentication required")]
    Unauthenticated,

    /// Track absent or owned by someone else
    #[error("Track not found")]
    TrackNotFound,

    /// Create request lacks a required field
    #[error("Missing required fields")]
    MissingFields,

    /// A field is present but unusable
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Credentials update with nothing to write
    #[error("No credentials provided")]
    NoCredentialsProvided,

    /// Auto-purchase without a stored marketplace session
    #[error("Steam credentials not configured")]
    CredentialsNotConfigured,

    /// Nothing is listed for sale
    #[error("No listing available")]
    NoListing,

    /// Cheapest listing costs more than the target
    #[error("Cheapest listing costs {total}, above target {target}")]
    ListingAboveTarget { total: Price, target: Price },

    /// Track left `active` before it could be claimed for purchase
    #[error("Track is no longer active")]
    TrackNotActive,

    /// The marketplace may have executed the order; the track stays claimed
    #[error("Purchase of listing {listing_id} could not be confirmed: {source}")]
    PurchaseUnconfirmed {
        listing_id: String,
        #[source]
        source: MarketError,
    },

    /// Bought, but the purchase row could not be written
    #[error("Listing {listing_id} was bought but the purchase could not be recorded")]
    PurchaseNotRecorded { listing_id: String },

    /// Marketplace failure
    #[error(transparent)]
    Market(#[from] MarketError),

    /// Database error; details go to the log only
    #[error("Database error")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TracksError {
    pub fn invalid(field: &'static str, reason: impl ToString) -> Self {
        TracksError::InvalidField {
            field,
            reason: reason.to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            TracksError::Unauthenticated => ErrorKind::Unauthorized,
            TracksError::TrackNotFound => ErrorKind::NotFound,
            TracksError::MissingFields
            | TracksError::InvalidField { .. }
            | TracksError::NoCredentialsProvided => ErrorKind::BadRequest,
            TracksError::CredentialsNotConfigured
            | TracksError::NoListing
            | TracksError::ListingAboveTarget { .. } => ErrorKind::UnprocessableEntity,
            TracksError::TrackNotActive => ErrorKind::Conflict,
            TracksError::PurchaseUnconfirmed { .. } => ErrorKind::BadGateway,
            TracksError::Market(e) => e.kind(),
            TracksError::Database(e) => AppError::from(e).kind(),
            TracksError::PurchaseNotRecorded { .. } | TracksError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Whether money may have been spent despite the error
    pub fn purchase_may_have_completed(&self) -> bool {
        matches!(
            self,
            TracksError::PurchaseUnconfirmed { .. } | TracksError::PurchaseNotRecorded { .. }
        )
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        match self {
            TracksError::Database(e) => AppError::from(e),
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            TracksError::Database(e) => {
                tracing::error!(error = %e, "Tracks database error");
            }
            TracksError::Internal(msg) => {
                tracing::error!(message = %msg, "Tracks internal error");
            }
            TracksError::PurchaseUnconfirmed { .. } | TracksError::PurchaseNotRecorded { .. } => {
                tracing::error!(error = %self, "Purchase needs manual reconciliation");
            }
            TracksError::Market(e) if e.is_upstream() => {
                tracing::warn!(error = %e, "Marketplace error");
            }
            _ => {
                tracing::debug!(error = %self, "Tracks error");
            }
        }
    }
}

impl IntoResponse for TracksError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}

impl From<TracksError> for AppError {
    fn from(err: TracksError) -> Self {
        err.to_app_error()
    }
}

impl From<platform::client::IdentityError> for TracksError {
    fn from(err: platform::client::IdentityError) -> Self {
        match err {
            platform::client::IdentityError::MissingHeader(_) => TracksError::Unauthenticated,
        }
    }
}
