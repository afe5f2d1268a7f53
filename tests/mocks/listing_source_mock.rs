use std::cell::Cell;
use std::rc::Rc;

use egret::api::{ApiError, ListingSource, Result};
use egret::models::listing::Listing;
use futures::future::LocalBoxFuture;
use gloo_timers::future::TimeoutFuture;

/// Fails like an unreachable backend.
pub struct FailingSource;

impl ListingSource for FailingSource {
    fn fetch_listings(&self) -> LocalBoxFuture<'static, Result<Vec<Listing>>> {
        Box::pin(async { Err(ApiError::Status(503)) })
    }
}

/// Answers every call with the same listings, the n-th call after
/// `delays_ms[n]` milliseconds (the last delay repeats).
pub struct DelayedSource {
    listings: Vec<Listing>,
    delays_ms: Vec<u32>,
    calls: Rc<Cell<usize>>,
}

impl DelayedSource {
    pub fn new(listings: Vec<Listing>, delays_ms: Vec<u32>) -> Self {
        Self {
            listings,
            delays_ms,
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn immediate(listings: Vec<Listing>) -> Self {
        Self::new(listings, vec![0])
    }
}

impl ListingSource for DelayedSource {
    fn fetch_listings(&self) -> LocalBoxFuture<'static, Result<Vec<Listing>>> {
        let call = self.calls.get();
        self.calls.set(call + 1);
        let delay = self
            .delays_ms
            .get(call)
            .or(self.delays_ms.last())
            .copied()
            .unwrap_or(0);
        let listings = self.listings.clone();
        Box::pin(async move {
            TimeoutFuture::new(delay).await;
            Ok(listings)
        })
    }
}

pub fn sample_listings() -> Vec<Listing> {
    serde_json::from_str(
        r#"[
            {"id": "1", "propertyName": "Lake View", "location": {"city": "Jinja", "country": "Uganda"}, "rating": 4.7},
            {"id": "2", "propertyName": "City Inn", "location": {"city": "Kampala", "country": "Uganda"}},
            {"id": "3", "propertyName": "Nile Lodge", "location": {"city": "Jinja"}, "cuisine": "Ugandan"}
        ]"#,
    )
    .unwrap()
}
