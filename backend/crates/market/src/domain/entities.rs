//! Domain Entities
//!
//! What the marketplace tells us about items, and what we send it back.

use std::fmt;

use crate::domain::services::parse_price;
use crate::domain::value_objects::Price;

/// One search hit
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub name: String,
    pub hash_name: String,
    /// Relative icon path; the image CDN base is prepended by the use case
    pub icon_url: Option<String>,
    /// Price text as the marketplace renders it, e.g. "$0.03"
    pub sell_price_text: Option<String>,
    pub sell_listings: i64,
}

/// Summary price data for one item
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PriceOverview {
    pub lowest_price: Option<String>,
    pub median_price: Option<String>,
    pub volume: Option<String>,
}

impl PriceOverview {
    /// Numeric value of `lowest_price`, if it parses
    pub fn lowest_price_value(&self) -> Option<Price> {
        self.lowest_price.as_deref().and_then(parse_price)
    }
}

/// A single sell order
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub listing_id: String,
    pub hash_name: String,
    /// Amount the seller receives
    pub price: Price,
    /// Marketplace and publisher fee on top of `price`
    pub fee: Price,
}

impl Listing {
    /// What the buyer pays
    pub fn total(&self) -> Price {
        self.price.saturating_add(self.fee)
    }
}

/// Confirmation of a completed purchase
#[derive(Debug, Clone, PartialEq)]
pub struct PurchaseReceipt {
    pub listing_id: String,
    pub total: Price,
}

/// Stored marketplace session of a user
///
/// `cookie` is the raw `Cookie` header value the user pasted; `session_id`
/// is the anti-CSRF `sessionid` the marketplace expects in form posts.
#[derive(Clone, PartialEq, Eq)]
pub struct SteamCredentials {
    pub cookie: String,
    pub session_id: String,
}

impl SteamCredentials {
    pub fn new(cookie: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            cookie: cookie.into(),
            session_id: session_id.into(),
        }
    }
}

impl fmt::Debug for SteamCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SteamCredentials")
            .field("cookie", &"<redacted>")
            .field("session_id", &"<redacted>")
            .finish()
    }
}
