//! Unit tests for market crate

#[cfg(test)]
pub(crate) mod fake {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use crate::domain::client::MarketClient;
    use crate::domain::entities::{
        Listing, PriceOverview, PurchaseReceipt, SearchResult, SteamCredentials,
    };
    use crate::error::{MarketError, MarketResult};

    /// Marketplace stand-in keyed by hash name
    #[derive(Default)]
    pub struct FakeMarket {
        pub search_results: Vec<SearchResult>,
        pub overviews: HashMap<String, PriceOverview>,
        pub failing: Vec<String>,
        pub searches: Mutex<Vec<(String, usize)>>,
    }

    impl FakeMarket {
        pub fn with_overview(mut self, hash_name: &str, lowest: Option<&str>) -> Self {
            self.overviews.insert(
                hash_name.to_string(),
                PriceOverview {
                    lowest_price: lowest.map(str::to_string),
                    median_price: Some("1,50 pуб.".into()),
                    volume: Some("321".into()),
                },
            );
            self
        }
    }

    impl MarketClient for FakeMarket {
        async fn search(&self, query: &str, count: usize) -> MarketResult<Vec<SearchResult>> {
            self.searches
                .lock()
                .unwrap()
                .push((query.to_string(), count));
            Ok(self.search_results.clone())
        }

        async fn price_overview(&self, hash_name: &str) -> MarketResult<Option<PriceOverview>> {
            if self.failing.iter().any(|h| h == hash_name) {
                return Err(MarketError::Timeout);
            }
            Ok(self.overviews.get(hash_name).cloned())
        }

        async fn cheapest_listing(&self, _hash_name: &str) -> MarketResult<Option<Listing>> {
            Ok(None)
        }

        async fn buy_listing(
            &self,
            _listing: &Listing,
            _credentials: &SteamCredentials,
        ) -> MarketResult<PurchaseReceipt> {
            Err(MarketError::PurchaseRejected("not supported".into()))
        }
    }

    pub fn hit(name: &str, icon: Option<&str>, price: Option<&str>) -> SearchResult {
        SearchResult {
            name: name.to_string(),
            hash_name: name.to_string(),
            icon_url: icon.map(str::to_string),
            sell_price_text: price.map(str::to_string),
            sell_listings: 42,
        }
    }
}

#[cfg(test)]
mod use_case_tests {
    use std::sync::Arc;

    use super::fake::{FakeMarket, hit};
    use crate::application::config::MarketConfig;
    use crate::application::price_lookup::PriceLookupUseCase;
    use crate::application::search_items::SearchItemsUseCase;
    use crate::error::MarketError;

    #[tokio::test]
    async fn test_search_maps_results() {
        let market = Arc::new(FakeMarket {
            search_results: vec![
                hit("AK-47 | Redline (Field-Tested)", Some("icon1"), Some("$12.03")),
                hit("Sticker | Crown", None, None),
            ],
            ..Default::default()
        });
        let use_case = SearchItemsUseCase::new(market.clone(), Arc::new(MarketConfig::default()));

        let items = use_case.execute(Some("  redline ")).await.unwrap();

        assert_eq!(items.len(), 2);
        assert!(items[0].image.ends_with("/economy/image/icon1"));
        assert_eq!(items[0].price, "$12.03");
        assert_eq!(items[1].image, "");
        assert_eq!(items[1].price, "N/A");
        assert_eq!(
            market.searches.lock().unwrap()[0],
            ("redline".to_string(), 10)
        );
    }

    #[tokio::test]
    async fn test_search_truncates_to_configured_count() {
        let market = Arc::new(FakeMarket {
            search_results: (0..15).map(|i| hit(&format!("Item {i}"), None, None)).collect(),
            ..Default::default()
        });
        let use_case = SearchItemsUseCase::new(market, Arc::new(MarketConfig::default()));

        let items = use_case.execute(Some("item")).await.unwrap();
        assert_eq!(items.len(), 10);
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let use_case = SearchItemsUseCase::new(
            Arc::new(FakeMarket::default()),
            Arc::new(MarketConfig::default()),
        );

        for query in [None, Some(""), Some("   ")] {
            let err = use_case.execute(query).await.unwrap_err();
            assert!(matches!(err, MarketError::MissingParameter("q")));
        }
    }

    #[tokio::test]
    async fn test_price_lookup_formats_value() {
        let market = Arc::new(FakeMarket::default().with_overview("Case", Some("1 234,56 pуб.")));
        let use_case = PriceLookupUseCase::new(market, Arc::new(MarketConfig::default()));

        let out = use_case.execute(Some("Case")).await.unwrap();

        assert_eq!(out.item_name, "Case");
        assert_eq!(out.lowest_price, "1234.56₽");
        assert_eq!(out.price_value.unwrap().minor(), 123456);
        assert_eq!(out.median_price, "1,50 pуб.");
        assert_eq!(out.volume, "321");
    }

    #[tokio::test]
    async fn test_price_lookup_unparsable_price() {
        let market = Arc::new(FakeMarket::default().with_overview("Case", None));
        let use_case = PriceLookupUseCase::new(market, Arc::new(MarketConfig::default()));

        let out = use_case.execute(Some("Case")).await.unwrap();
        assert_eq!(out.lowest_price, "N/A");
        assert_eq!(out.price_value, None);
    }

    #[tokio::test]
    async fn test_price_lookup_unknown_item() {
        let use_case = PriceLookupUseCase::new(
            Arc::new(FakeMarket::default()),
            Arc::new(MarketConfig::default()),
        );

        let err = use_case.execute(Some("Nope")).await.unwrap_err();
        assert!(matches!(err, MarketError::ItemNotFound));

        let err = use_case.execute(None).await.unwrap_err();
        assert!(matches!(err, MarketError::MissingParameter("item")));
    }
}

#[cfg(test)]
mod router_tests {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    use super::fake::{FakeMarket, hit};
    use crate::application::config::MarketConfig;
    use crate::presentation::router::market_router_generic;

    async fn get(market: FakeMarket, uri: &str) -> (StatusCode, Value) {
        let app = market_router_generic(market, MarketConfig::default());
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_search_endpoint() {
        let market = FakeMarket {
            search_results: vec![hit("Operation Bravo Case", Some("abc"), Some("$1.20"))],
            ..Default::default()
        };

        let (status, body) = get(market, "/search?q=bravo%20case").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["results"][0]["hash_name"], "Operation Bravo Case");
        assert_eq!(body["results"][0]["price"], "$1.20");
        assert_eq!(body["results"][0]["sell_listings"], 42);
    }

    #[tokio::test]
    async fn test_search_endpoint_missing_query() {
        let (status, body) = get(FakeMarket::default(), "/search").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Query parameter \"q\" is required");
    }

    #[tokio::test]
    async fn test_price_endpoint() {
        let market = FakeMarket::default().with_overview("Case", Some("12,50 pуб."));

        let (status, body) = get(market, "/price?item=Case").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["item_name"], "Case");
        assert_eq!(body["lowest_price"], "12.50₽");
        assert_eq!(body["price_value"], 12.5);
        assert_eq!(body["volume"], "321");
    }

    #[tokio::test]
    async fn test_price_endpoint_null_value() {
        let market = FakeMarket::default().with_overview("Case", None);

        let (_, body) = get(market, "/price?item=Case").await;
        assert_eq!(body["lowest_price"], "N/A");
        assert!(body["price_value"].is_null());
    }

    #[tokio::test]
    async fn test_price_endpoint_not_found() {
        let (status, body) = get(FakeMarket::default(), "/price?item=Nope").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Item not found");
    }

    #[tokio::test]
    async fn test_price_endpoint_upstream_timeout() {
        let market = FakeMarket {
            failing: vec!["Case".into()],
            ..Default::default()
        };

        let (status, _) = get(market, "/price?item=Case").await;
        assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    }
}

#[cfg(test)]
mod error_tests {
    use crate::error::*;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    #[test]
    fn test_error_into_response_status_codes() {
        let test_cases: Vec<(MarketError, StatusCode)> = vec![
            (MarketError::MissingParameter("q"), StatusCode::BAD_REQUEST),
            (MarketError::ItemNotFound, StatusCode::NOT_FOUND),
            (MarketError::Timeout, StatusCode::GATEWAY_TIMEOUT),
            (MarketError::RateLimited, StatusCode::TOO_MANY_REQUESTS),
            (MarketError::UnexpectedStatus(503), StatusCode::BAD_GATEWAY),
            (MarketError::Decode("eof".into()), StatusCode::BAD_GATEWAY),
            (
                MarketError::PurchaseRejected("no funds".into()),
                StatusCode::BAD_GATEWAY,
            ),
            (
                MarketError::Internal("test".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected_status) in test_cases {
            assert_eq!(error.status_code(), expected_status);
            assert_eq!(error.into_response().status(), expected_status);
        }
    }

    #[test]
    fn test_is_upstream() {
        assert!(MarketError::Timeout.is_upstream());
        assert!(MarketError::UnexpectedStatus(500).is_upstream());
        assert!(!MarketError::ItemNotFound.is_upstream());
        assert!(!MarketError::MissingParameter("item").is_upstream());
    }

    #[test]
    fn test_from_serde_error() {
        let err: MarketError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, MarketError::Decode(_)));
    }
}
