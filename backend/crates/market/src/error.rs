//! Market Error Types
//!
//! Marketplace-specific error variants that integrate with the unified
//! `kernel::error::AppError` system.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Market-specific result type alias
pub type MarketResult<T> = Result<T, MarketError>;

/// Market-specific error variants
#[derive(Debug, Error)]
pub enum MarketError {
    /// Required query parameter absent or blank
    #[error("Query parameter \"{0}\" is required")]
    MissingParameter(&'static str),

    /// The marketplace does not know the item
    #[error("Item not found")]
    ItemNotFound,

    /// The marketplace did not answer within the timeout
    #[error("Marketplace request timed out")]
    Timeout,

    /// The marketplace throttled us
    #[error("Marketplace rate limit exceeded")]
    RateLimited,

    /// Non-2xx answer
    #[error("Marketplace returned HTTP {0}")]
    UnexpectedStatus(u16),

    /// Answer was not the JSON we expected
    #[error("Marketplace returned malformed data: {0}")]
    Decode(String),

    /// Transport failure
    #[error("Marketplace request failed: {0}")]
    Upstream(String),

    /// Purchase was refused by the marketplace
    #[error("Marketplace rejected the purchase: {0}")]
    PurchaseRejected(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl MarketError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            MarketError::MissingParameter(_) => ErrorKind::BadRequest,
            MarketError::ItemNotFound => ErrorKind::NotFound,
            MarketError::Timeout => ErrorKind::GatewayTimeout,
            MarketError::RateLimited => ErrorKind::TooManyRequests,
            MarketError::UnexpectedStatus(_)
            | MarketError::Decode(_)
            | MarketError::Upstream(_)
            | MarketError::PurchaseRejected(_) => ErrorKind::BadGateway,
            MarketError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Whether the failure came from the marketplace rather than the caller
    pub fn is_upstream(&self) -> bool {
        !matches!(
            self,
            MarketError::MissingParameter(_) | MarketError::ItemNotFound | MarketError::Internal(_)
        )
    }

    /// Whether a failed purchase request certainly left the listing unsold.
    /// Timeouts and transport failures may hide an executed order.
    pub fn is_refusal(&self) -> bool {
        match self {
            MarketError::PurchaseRejected(_)
            | MarketError::RateLimited
            | MarketError::MissingParameter(_)
            | MarketError::ItemNotFound
            | MarketError::Internal(_) => true,
            MarketError::UnexpectedStatus(status) => (400..500).contains(status),
            MarketError::Timeout | MarketError::Decode(_) | MarketError::Upstream(_) => false,
        }
    }

    /// Convert to AppError
    pub fn to_app_error(&self) -> AppError {
        AppError::new(self.kind(), self.to_string())
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            MarketError::Internal(msg) => {
                tracing::error!(message = %msg, "Market internal error");
            }
            MarketError::Timeout | MarketError::RateLimited => {
                tracing::warn!(error = %self, "Marketplace unavailable");
            }
            MarketError::UnexpectedStatus(_)
            | MarketError::Decode(_)
            | MarketError::Upstream(_)
            | MarketError::PurchaseRejected(_) => {
                tracing::warn!(error = %self, "Marketplace error");
            }
            _ => {
                tracing::debug!(error = %self, "Market error");
            }
        }
    }
}

impl From<reqwest::Error> for MarketError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MarketError::Timeout
        } else if err.is_decode() {
            MarketError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            MarketError::UnexpectedStatus(status.as_u16())
        } else {
            MarketError::Upstream(err.to_string())
        }
    }
}

impl From<serde_json::Error> for MarketError {
    fn from(err: serde_json::Error) -> Self {
        MarketError::Decode(err.to_string())
    }
}

impl From<MarketError> for AppError {
    fn from(err: MarketError) -> Self {
        err.to_app_error()
    }
}

impl IntoResponse for MarketError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
