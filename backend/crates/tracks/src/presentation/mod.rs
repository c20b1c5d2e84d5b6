//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and middleware.

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use handlers::TracksAppState;
pub use middleware::{CurrentUser, IdentityState, require_steam_user};
pub use router::{tracks_router, tracks_router_generic};
