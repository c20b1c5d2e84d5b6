//! Domain Layer
//!
//! Entities, value objects, repository traits and pure rules.

pub mod entities;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entities::{NewTrack, Purchase, Track, TrackChanges, User};
pub use repository::{
    LocalPurchaseRepository, LocalTrackRepository, LocalUserRepository, PurchaseRepository,
    TrackRepository, UserRepository,
};
pub use value_objects::TrackStatus;
