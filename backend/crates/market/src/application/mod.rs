//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and the marketplace client.

pub mod config;
pub mod price_lookup;
pub mod search_items;
