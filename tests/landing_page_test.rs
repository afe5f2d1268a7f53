#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use egret::api::{provide_listing_source, ListingSourceHandle};
use egret::pages::LandingPage;
use gloo_timers::future::sleep;
use leptos::*;
use leptos_router::Router;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

mod mocks;
use mocks::listing_source_mock::{sample_listings, DelayedSource, FailingSource};
use mocks::{click, count, remove_container, set_path, test_container};

wasm_bindgen_test_configure!(run_in_browser);

fn mount_landing(container: &web_sys::HtmlElement, source: ListingSourceHandle) {
    mount_to(container.clone(), move || {
        provide_listing_source(source);
        view! {
            <Router>
                <LandingPage/>
            </Router>
        }
    });
}

fn type_query(container: &web_sys::HtmlElement, query: &str) {
    let input = container
        .query_selector(".landing-search")
        .unwrap()
        .unwrap()
        .dyn_into::<web_sys::HtmlInputElement>()
        .unwrap();
    input.set_value(query);
    let event = web_sys::Event::new("input").unwrap();
    input.dispatch_event(&event).unwrap();
}

#[wasm_bindgen_test]
async fn test_failed_fetch_shows_no_results() {
    set_path("/");
    let container = test_container();
    mount_landing(&container, ListingSourceHandle::new(FailingSource));

    sleep(Duration::from_millis(100)).await;

    assert_eq!(count(&container, ".listing-card"), 0);
    assert_eq!(count(&container, ".skeleton-card"), 0);
    // one empty state per featured section
    assert_eq!(count(&container, ".clear-search"), 2);

    remove_container(&container);
}

#[wasm_bindgen_test]
async fn test_skeletons_while_loading() {
    set_path("/");
    let container = test_container();
    mount_landing(
        &container,
        ListingSourceHandle::new(DelayedSource::new(sample_listings(), vec![500])),
    );

    sleep(Duration::from_millis(50)).await;
    assert_eq!(count(&container, ".skeleton-card"), 8);

    sleep(Duration::from_millis(600)).await;
    assert_eq!(count(&container, ".skeleton-card"), 0);
    assert_eq!(count(&container, ".featured-hotels .listing-card"), 3);
    assert_eq!(count(&container, ".featured-restaurants .listing-card"), 3);

    remove_container(&container);
}

#[wasm_bindgen_test]
async fn test_live_search_and_clear() {
    set_path("/");
    let container = test_container();
    mount_landing(
        &container,
        ListingSourceHandle::new(DelayedSource::immediate(sample_listings())),
    );
    sleep(Duration::from_millis(100)).await;

    type_query(&container, "jinja");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(count(&container, ".featured-hotels .listing-card"), 2);

    type_query(&container, "mombasa");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(count(&container, ".listing-card"), 0);
    assert_eq!(count(&container, ".clear-search"), 2);

    click(&container, ".featured-hotels .clear-search");
    sleep(Duration::from_millis(50)).await;
    assert_eq!(count(&container, ".featured-hotels .listing-card"), 3);
    assert_eq!(count(&container, ".clear-search"), 0);

    remove_container(&container);
}
