//! Create Track Use Case

use kernel::id::UserId;
use market::Price;
use std::sync::Arc;

use crate::domain::entities::{NewTrack, Track};
use crate::domain::repository::TrackRepository;
use crate::domain::value_objects::TrackStatus;
use crate::error::{TracksError, TracksResult};

/// Create track input, as received
#[derive(Debug, Clone, Default)]
pub struct CreateTrackInput {
    pub item_name: Option<String>,
    pub item_hash_name: Option<String>,
    pub item_image: Option<String>,
    pub current_price: Option<f64>,
    pub target_price: Option<f64>,
    pub status: Option<String>,
    pub auto_purchase: Option<bool>,
}

/// Major-unit number from a request into a [`Price`]
pub(crate) fn price_field(field: &'static str, value: f64) -> TracksResult<Price> {
    Price::from_major(value).map_err(|e| TracksError::invalid(field, e))
}

pub(crate) fn status_field(value: &str) -> TracksResult<TrackStatus> {
    value.parse().map_err(|e| TracksError::invalid("status", e))
}

fn required(value: Option<String>) -> TracksResult<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(TracksError::MissingFields)
}

impl CreateTrackInput {
    fn validate(self) -> TracksResult<NewTrack> {
        let item_name = required(self.item_name)?;
        let item_hash_name = required(self.item_hash_name)?;
        let target_price = self.target_price.ok_or(TracksError::MissingFields)?;

        Ok(NewTrack {
            item_name,
            item_hash_name,
            item_image: self.item_image.filter(|i| !i.is_empty()),
            current_price: self
                .current_price
                .map(|p| price_field("current_price", p))
                .transpose()?,
            target_price: price_field("target_price", target_price)?,
            status: self
                .status
                .as_deref()
                .map(status_field)
                .transpose()?
                .unwrap_or_default(),
            auto_purchase: self.auto_purchase.unwrap_or(false),
        })
    }
}

/// Create track use case
pub struct CreateTrackUseCase<T>
where
    T: TrackRepository,
{
    track_repo: Arc<T>,
}

impl<T> CreateTrackUseCase<T>
where
    T: TrackRepository,
{
    pub fn new(track_repo: Arc<T>) -> Self {
        Self { track_repo }
    }

    pub async fn execute(&self, user_id: &UserId, input: CreateTrackInput) -> TracksResult<Track> {
        let track = Track::new(*user_id, input.validate()?);

        self.track_repo.create(&track).await?;

        tracing::info!(
            user_id = %user_id,
            track_id = %track.track_id,
            hash_name = %track.item_hash_name,
            target_price = %track.target_price,
            "Track created"
        );

        Ok(track)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> CreateTrackInput {
        CreateTrackInput {
            item_name: Some("AK-47 | Redline".into()),
            item_hash_name: Some("AK-47 | Redline (Field-Tested)".into()),
            target_price: Some(500.0),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_defaults() {
        let track = input().validate().unwrap();
        assert_eq!(track.status, TrackStatus::Active);
        assert!(!track.auto_purchase);
        assert_eq!(track.current_price, None);
        assert_eq!(track.target_price.minor(), 50_000);
    }

    #[test]
    fn test_validate_missing_fields() {
        for broken in [
            CreateTrackInput {
                item_name: None,
                ..input()
            },
            CreateTrackInput {
                item_hash_name: Some("  ".into()),
                ..input()
            },
            CreateTrackInput {
                target_price: None,
                ..input()
            },
        ] {
            assert!(matches!(
                broken.validate().unwrap_err(),
                TracksError::MissingFields
            ));
        }
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let err = CreateTrackInput {
            target_price: Some(-1.0),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(
            err,
            TracksError::InvalidField {
                field: "target_price",
                ..
            }
        ));

        let err = CreateTrackInput {
            status: Some("sold".into()),
            ..input()
        }
        .validate()
        .unwrap_err();
        assert!(matches!(err, TracksError::InvalidField { field: "status", .. }));
    }
}
