//! Infrastructure Layer
//!
//! HTTP implementation of the marketplace client.

pub mod steam;

pub use steam::SteamMarketClient;
