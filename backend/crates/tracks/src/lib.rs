//! Tracks Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Users, tracks, purchases, repository traits, drop rules
//! - `application/` - One use case per operation, including the batch price
//!   refresh and auto-purchase
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router, identity middleware
//!
//! The caller is identified by the `X-Steam-Id` header alone.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::TracksConfig;
pub use domain::entities::{NewTrack, Purchase, Track, TrackChanges, User};
pub use domain::repository::{
    LocalPurchaseRepository, LocalTrackRepository, LocalUserRepository, PurchaseRepository,
    TrackRepository, UserRepository,
};
pub use domain::value_objects::TrackStatus;
pub use error::{TracksError, TracksResult};
pub use infra::postgres::PgTracksRepository;
pub use presentation::router::{tracks_router, tracks_router_generic};

// Re-export kernel error types for unified error handling
pub use kernel::error::{app_error::AppError, kind::ErrorKind};
