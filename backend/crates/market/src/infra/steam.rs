//! Steam Community Market client

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, COOKIE, REFERER};
use reqwest::{StatusCode, Url};
use serde::Deserialize;
use std::sync::Arc;

use platform::cookie::merge_cookie;
use platform::http_client::{HttpClientConfig, build_client};

use crate::application::config::MarketConfig;
use crate::domain::client::MarketClient;
use crate::domain::entities::{
    Listing, PriceOverview, PurchaseReceipt, SearchResult, SteamCredentials,
};
use crate::domain::value_objects::Price;
use crate::error::{MarketError, MarketResult};

const ACCEPT_JSON: &str = "application/json, text/javascript, */*; q=0.01";
const ACCEPT_LANGUAGE_EN: &str = "en-US,en;q=0.9";

// ============================================================================
// Wire types
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    results: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    #[serde(default)]
    name: String,
    #[serde(default)]
    hash_name: String,
    #[serde(default)]
    sell_listings: i64,
    sell_price_text: Option<String>,
    asset_description: Option<AssetDescription>,
}

#[derive(Debug, Deserialize)]
struct AssetDescription {
    icon_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PriceOverviewResponse {
    #[serde(default)]
    success: bool,
    lowest_price: Option<String>,
    median_price: Option<String>,
    volume: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ListingsResponse {
    #[serde(default)]
    success: bool,
    /// Object keyed by listing id, or `[]` when nothing is listed
    #[serde(default)]
    listinginfo: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct ListingInfo {
    listingid: String,
    converted_price: Option<i64>,
    converted_fee: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct BuyResponse {
    wallet_info: Option<WalletInfo>,
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WalletInfo {
    #[serde(default)]
    success: i64,
}

// ============================================================================
// Client
// ============================================================================

/// Marketplace client over HTTP
#[derive(Clone)]
pub struct SteamMarketClient {
    http: reqwest::Client,
    config: Arc<MarketConfig>,
}

impl SteamMarketClient {
    /// Build a client with its own connection pool
    pub fn new(config: MarketConfig) -> MarketResult<Self> {
        let http = build_client(&HttpClientConfig::with_timeout(config.timeout))
            .map_err(|e| MarketError::Internal(format!("HTTP client: {}", e)))?;
        Ok(Self::with_http(http, config))
    }

    /// Reuse an existing `reqwest::Client`
    pub fn with_http(http: reqwest::Client, config: MarketConfig) -> Self {
        Self {
            http,
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    fn url(&self, path: &str) -> MarketResult<Url> {
        Url::parse(&format!("{}{}", self.config.base(), path))
            .map_err(|e| MarketError::Internal(format!("Invalid marketplace URL: {}", e)))
    }

    fn market_referer(&self) -> String {
        format!("{}/market/", self.config.base())
    }

    fn listing_page(&self, hash_name: &str) -> MarketResult<Url> {
        let mut url = self.url("/market/listings")?;
        url.path_segments_mut()
            .map_err(|_| MarketError::Internal("Marketplace URL cannot be a base".into()))?
            .push(&self.config.app_id.to_string())
            .push(hash_name);
        Ok(url)
    }
}

/// Read a JSON body even when the status is an error; the marketplace
/// answers unknown items with 500 and `{"success": false}`.
async fn read_json<T>(response: reqwest::Response) -> MarketResult<T>
where
    T: for<'de> Deserialize<'de>,
{
    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(MarketError::RateLimited);
    }

    let body = response.bytes().await?;
    match serde_json::from_slice::<T>(&body) {
        Ok(parsed) => Ok(parsed),
        Err(_) if !status.is_success() => Err(MarketError::UnexpectedStatus(status.as_u16())),
        Err(e) => Err(e.into()),
    }
}

fn cheapest(listinginfo: serde_json::Value, hash_name: &str) -> MarketResult<Option<Listing>> {
    let serde_json::Value::Object(map) = listinginfo else {
        return Ok(None);
    };

    let mut best: Option<Listing> = None;
    for (_, raw) in map {
        let info: ListingInfo = serde_json::from_value(raw)?;
        // Listings without a converted price are not buyable in our currency
        let (Some(price), Some(fee)) = (info.converted_price, info.converted_fee) else {
            continue;
        };
        let (Ok(price), Ok(fee)) = (Price::from_minor(price), Price::from_minor(fee)) else {
            continue;
        };
        let listing = Listing {
            listing_id: info.listingid,
            hash_name: hash_name.to_string(),
            price,
            fee,
        };
        if best.as_ref().is_none_or(|b| listing.total() < b.total()) {
            best = Some(listing);
        }
    }
    Ok(best)
}

impl MarketClient for SteamMarketClient {
    async fn search(&self, query: &str, count: usize) -> MarketResult<Vec<SearchResult>> {
        let url = self.url("/market/search/render/")?;
        let count = count.to_string();
        let app_id = self.config.app_id.to_string();

        let response = self
            .http
            .get(url)
            .query(&[
                ("query", query),
                ("start", "0"),
                ("count", count.as_str()),
                ("search_descriptions", "0"),
                ("sort_column", "popular"),
                ("sort_dir", "desc"),
                ("appid", app_id.as_str()),
                ("norender", "1"),
            ])
            .header(ACCEPT, ACCEPT_JSON)
            .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_EN)
            .header(REFERER, self.market_referer())
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(MarketError::RateLimited);
            }
            return Err(MarketError::UnexpectedStatus(status.as_u16()));
        }

        let body: SearchResponse = response.json().await?;
        tracing::debug!(
            success = body.success,
            results = body.results.len(),
            "Marketplace search answered"
        );
        if !body.success {
            return Ok(Vec::new());
        }

        Ok(body
            .results
            .into_iter()
            .map(|item| SearchResult {
                name: item.name,
                hash_name: item.hash_name,
                icon_url: item.asset_description.and_then(|a| a.icon_url),
                sell_price_text: item.sell_price_text,
                sell_listings: item.sell_listings,
            })
            .collect())
    }

    async fn price_overview(&self, hash_name: &str) -> MarketResult<Option<PriceOverview>> {
        let url = self.url("/market/priceoverview/")?;
        let app_id = self.config.app_id.to_string();
        let currency = self.config.currency.to_string();

        let response = self
            .http
            .get(url)
            .query(&[
                ("appid", app_id.as_str()),
                ("currency", currency.as_str()),
                ("market_hash_name", hash_name),
            ])
            .header(ACCEPT, ACCEPT_JSON)
            .send()
            .await?;

        let body: PriceOverviewResponse = read_json(response).await?;
        if !body.success {
            tracing::debug!(hash_name = %hash_name, "Marketplace has no price overview");
            return Ok(None);
        }

        Ok(Some(PriceOverview {
            lowest_price: body.lowest_price,
            median_price: body.median_price,
            volume: body.volume,
        }))
    }

    async fn cheapest_listing(&self, hash_name: &str) -> MarketResult<Option<Listing>> {
        let mut url = self.listing_page(hash_name)?;
        url.path_segments_mut()
            .map_err(|_| MarketError::Internal("Marketplace URL cannot be a base".into()))?
            .push("render")
            .push("");
        let currency = self.config.currency.to_string();

        let response = self
            .http
            .get(url)
            .query(&[
                ("start", "0"),
                ("count", "1"),
                ("currency", currency.as_str()),
                ("language", "english"),
                ("format", "json"),
            ])
            .header(ACCEPT, ACCEPT_JSON)
            .header(REFERER, self.market_referer())
            .send()
            .await?;

        let body: ListingsResponse = read_json(response).await?;
        if !body.success {
            return Ok(None);
        }

        cheapest(body.listinginfo, hash_name)
    }

    async fn buy_listing(
        &self,
        listing: &Listing,
        credentials: &SteamCredentials,
    ) -> MarketResult<PurchaseReceipt> {
        let mut url = self.url("/market/buylisting")?;
        url.path_segments_mut()
            .map_err(|_| MarketError::Internal("Marketplace URL cannot be a base".into()))?
            .push(&listing.listing_id);
        let referer = self.listing_page(&listing.hash_name)?;
        let cookie = merge_cookie(&credentials.cookie, "sessionid", &credentials.session_id);

        let currency = self.config.currency.to_string();
        let subtotal = listing.price.minor().to_string();
        let fee = listing.fee.minor().to_string();
        let total = listing.total().minor().to_string();

        let response = self
            .http
            .post(url)
            .form(&[
                ("sessionid", credentials.session_id.as_str()),
                ("currency", currency.as_str()),
                ("subtotal", subtotal.as_str()),
                ("fee", fee.as_str()),
                ("total", total.as_str()),
                ("quantity", "1"),
            ])
            .header(ACCEPT, ACCEPT_JSON)
            .header(COOKIE, cookie)
            .header(REFERER, referer.as_str())
            .send()
            .await?;

        let status = response.status();
        let body: BuyResponse = read_json(response).await?;
        let accepted = body.wallet_info.as_ref().is_some_and(|w| w.success == 1);

        if !status.is_success() || !accepted {
            return Err(match body.message.filter(|m| !m.is_empty()) {
                Some(message) => MarketError::PurchaseRejected(message),
                // A bare 5xx says nothing about whether the order went through
                None if status.is_server_error() => {
                    MarketError::UnexpectedStatus(status.as_u16())
                }
                None => MarketError::PurchaseRejected(format!("HTTP {}", status.as_u16())),
            });
        }

        tracing::info!(
            listing_id = %listing.listing_id,
            hash_name = %listing.hash_name,
            total = %listing.total(),
            "Marketplace purchase confirmed"
        );

        Ok(PurchaseReceipt {
            listing_id: listing.listing_id.clone(),
            total: listing.total(),
        })
    }
}
