#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use egret::api::{provide_listing_source, ListingSourceHandle};
use egret::pages::SearchPage;
use gloo_timers::future::sleep;
use leptos::*;
use leptos_router::{Route, Router, Routes};
use wasm_bindgen_test::*;

mod mocks;
use mocks::listing_source_mock::{sample_listings, DelayedSource};
use mocks::{click, count, remove_container, set_path, test_container};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_search(container: &web_sys::HtmlElement) {
    let source = ListingSourceHandle::new(DelayedSource::immediate(sample_listings()));
    mount_to(container.clone(), move || {
        provide_listing_source(source);
        view! {
            <Router>
                <Routes>
                    <Route path="/search" view=SearchPage/>
                </Routes>
            </Router>
        }
    });
}

#[wasm_bindgen_test]
async fn test_query_parameter_filters_results() {
    set_path("/search?q=kampala");
    let container = test_container();
    mount_search(&container);
    sleep(Duration::from_millis(100)).await;

    assert_eq!(count(&container, ".listing-card"), 1);

    remove_container(&container);
    set_path("/");
}

#[wasm_bindgen_test]
async fn test_clear_search_shows_everything() {
    set_path("/search?q=mombasa");
    let container = test_container();
    mount_search(&container);
    sleep(Duration::from_millis(100)).await;
    assert_eq!(count(&container, ".listing-card"), 0);

    click(&container, ".clear-search");
    sleep(Duration::from_millis(100)).await;
    assert_eq!(count(&container, ".listing-card"), 3);

    remove_container(&container);
    set_path("/");
}
