//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Caller identification from request headers
//! - Cookie header parsing and rewriting
//! - The outbound HTTP client used for marketplace calls

pub mod client;
pub mod cookie;
pub mod http_client;
