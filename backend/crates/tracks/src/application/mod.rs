//! Application Layer
//!
//! One use case per operation. Each use case holds `Arc`s of the
//! repositories and clients it needs and nothing else.

pub mod config;
pub mod create_track;
pub mod delete_track;
pub mod get_track;
pub mod list_purchases;
pub mod list_tracks;
pub mod purchase;
pub mod refresh_prices;
pub mod resolve_user;
pub mod save_credentials;
pub mod update_track;

// Re-exports
pub use config::TracksConfig;
pub use create_track::{CreateTrackInput, CreateTrackUseCase};
pub use delete_track::DeleteTrackUseCase;
pub use get_track::GetTrackUseCase;
pub use list_purchases::ListPurchasesUseCase;
pub use list_tracks::ListTracksUseCase;
pub use purchase::AutoPurchaseUseCase;
pub use refresh_prices::{
    PriceDrop, RefreshError, RefreshPricesOutput, RefreshPricesUseCase,
};
pub use resolve_user::ResolveUserUseCase;
pub use save_credentials::{SaveCredentialsInput, SaveCredentialsUseCase};
pub use update_track::{UpdateTrackInput, UpdateTrackUseCase};
