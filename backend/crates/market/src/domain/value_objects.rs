//! Domain Value Objects
//!
//! Immutable value types for the market domain.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Minor units per major unit (kopecks per rouble, cents per dollar)
pub const MINOR_PER_MAJOR: i64 = 100;

/// Why a number cannot be a price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PriceError {
    #[error("price must not be negative")]
    Negative,
    #[error("price must be a finite number")]
    NotFinite,
    #[error("price is too large")]
    OutOfRange,
}

/// Money amount in minor units of the configured marketplace currency.
///
/// On the wire a price is a plain JSON number in major units (`123.45`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Price(i64);

impl Price {
    pub const ZERO: Price = Price(0);

    pub fn from_minor(minor: i64) -> Result<Self, PriceError> {
        if minor < 0 {
            return Err(PriceError::Negative);
        }
        Ok(Self(minor))
    }

    /// Round a major-unit amount to the nearest minor unit
    pub fn from_major(major: f64) -> Result<Self, PriceError> {
        if !major.is_finite() {
            return Err(PriceError::NotFinite);
        }
        if major < 0.0 {
            return Err(PriceError::Negative);
        }
        let minor = (major * MINOR_PER_MAJOR as f64).round();
        if minor > i64::MAX as f64 {
            return Err(PriceError::OutOfRange);
        }
        Ok(Self(minor as i64))
    }

    pub fn minor(&self) -> i64 {
        self.0
    }

    pub fn as_major(&self) -> f64 {
        self.0 as f64 / MINOR_PER_MAJOR as f64
    }

    pub fn saturating_add(self, other: Price) -> Price {
        Price(self.0.saturating_add(other.0))
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{:02}",
            self.0 / MINOR_PER_MAJOR,
            self.0 % MINOR_PER_MAJOR
        )
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_major())
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let major = f64::deserialize(deserializer)?;
        Price::from_major(major).map_err(serde::de::Error::custom)
    }
}
