use std::rc::Rc;

use futures::future::LocalBoxFuture;
use gloo_net::http::Request;
use leptos::logging::{error, log, warn};
use serde_json::Value;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::models::listing::Listing;

pub const LISTINGS_PATH: &str = "businesses/getproperties";

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Fetch(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("invalid response body: {0}")]
    Decode(String),
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        Self::Fetch(format!("{err}"))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(format!("{err}"))
    }
}

/// Anything that can hand the pages a listings collection.
pub trait ListingSource {
    fn fetch_listings(&self) -> LocalBoxFuture<'static, Result<Vec<Listing>>>;
}

/// Listing source shared through the Leptos context.
#[derive(Clone)]
pub struct ListingSourceHandle(Rc<dyn ListingSource>);

impl ListingSourceHandle {
    pub fn new(source: impl ListingSource + 'static) -> Self {
        Self(Rc::new(source))
    }

    /// Fetches the collection, treating every failure as "no listings".
    pub async fn load(&self) -> Vec<Listing> {
        listings_or_empty(self.0.fetch_listings().await)
    }
}

pub fn provide_listing_source(source: ListingSourceHandle) {
    leptos::provide_context(source);
}

/// The listing source of the surrounding app, or the backend API when
/// none was provided.
pub fn use_listing_source() -> ListingSourceHandle {
    leptos::use_context::<ListingSourceHandle>()
        .unwrap_or_else(|| ListingSourceHandle::new(ListingsApi::new(ApiConfig::from_env())))
}

/// The backend listings endpoint.
#[derive(Clone)]
pub struct ListingsApi {
    config: ApiConfig,
}

impl ListingsApi {
    pub const fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub async fn get_properties(&self) -> Result<Vec<Listing>> {
        let url = self.config.endpoint(LISTINGS_PATH);
        log!("[API] Fetching listings from {}", url);
        let response = Request::post(&url)
            .json(&serde_json::json!({}))?
            .send()
            .await?;
        let status = response.status();
        if status != 200 {
            return Err(ApiError::Status(status));
        }
        let body = response.text().await?;
        decode_listings(&body)
    }
}

impl ListingSource for ListingsApi {
    fn fetch_listings(&self) -> LocalBoxFuture<'static, Result<Vec<Listing>>> {
        let api = self.clone();
        Box::pin(async move { api.get_properties().await })
    }
}

/// Decodes a listings response body.
///
/// The body must be a JSON array. Elements that don't match the listing
/// schema are dropped and logged so one bad record can't blank the page.
pub fn decode_listings(body: &str) -> Result<Vec<Listing>> {
    let Value::Array(records) = serde_json::from_str::<Value>(body)? else {
        return Err(ApiError::Decode("expected a JSON array".into()));
    };
    let total = records.len();
    let listings: Vec<Listing> = records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(listing) => Some(listing),
            Err(err) => {
                warn!("[API] Rejected listing #{}: {}", index, err);
                None
            }
        })
        .collect();
    log!("[API] Decoded {} of {} listings", listings.len(), total);
    Ok(listings)
}

pub fn listings_or_empty(result: Result<Vec<Listing>>) -> Vec<Listing> {
    result.unwrap_or_else(|err| {
        error!("[API] Failed to fetch listings: {}", err);
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedSource(Result<Vec<Listing>>);

    impl ListingSource for FixedSource {
        fn fetch_listings(&self) -> LocalBoxFuture<'static, Result<Vec<Listing>>> {
            let result = self.0.clone();
            Box::pin(async move { result })
        }
    }

    #[test]
    fn test_decode_array() {
        let body = r#"[
            {"id": "1", "propertyName": "Lake View", "location": {"city": "Jinja"}},
            {"id": 2, "propertyName": "City Inn", "rating": 4.1}
        ]"#;
        let listings = decode_listings(body).unwrap();
        assert_eq!(listings.len(), 2);
        assert_eq!(listings[1].id, "2");
    }

    #[test]
    fn test_decode_rejects_malformed_records() {
        let body = r#"[
            {"id": "1", "propertyName": "Lake View"},
            {"id": "2"},
            "not a listing",
            {"id": "3", "propertyName": "Nile Lodge", "rating": "five"}
        ]"#;
        let listings = decode_listings(body).unwrap();
        let ids: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1"]);
    }

    #[test]
    fn test_decode_keeps_records_with_null_optionals() {
        let body = r#"[
            {"id": "1", "propertyName": "Lake View", "photos": null},
            {"id": "2", "propertyName": "City Inn", "photos": [{"url": null}]},
            {"id": "3", "propertyName": "Nile Lodge", "location": null, "rating": null}
        ]"#;
        let listings = decode_listings(body).unwrap();
        let ids: Vec<_> = listings.iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
        assert!(listings.iter().all(|l| l.primary_photo().is_none()));
    }

    #[test]
    fn test_decode_non_array_is_error() {
        assert!(matches!(
            decode_listings(r#"{"message": "ok"}"#),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(decode_listings("<html>"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_errors_collapse_to_empty() {
        assert!(listings_or_empty(Err(ApiError::Status(500))).is_empty());
        assert!(listings_or_empty(Err(ApiError::Fetch("offline".into()))).is_empty());
    }

    #[tokio::test]
    async fn test_handle_load_collapses_failures() {
        let failing = ListingSourceHandle::new(FixedSource(Err(ApiError::Status(404))));
        assert!(failing.load().await.is_empty());

        let listings = decode_listings(r#"[{"id": "1", "propertyName": "Lake View"}]"#).unwrap();
        let working = ListingSourceHandle::new(FixedSource(Ok(listings.clone())));
        assert_eq!(working.load().await, listings);
    }
}
