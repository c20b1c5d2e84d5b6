//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (SearchResult, PriceOverview, Listing, SteamCredentials)
//! - Domain value objects (Price)
//! - Domain services (price text parsing and formatting)
//! - The marketplace client trait

pub mod client;
pub mod entities;
pub mod services;
pub mod value_objects;
