use leptos::*;
use leptos_router::{use_navigate, use_query_map, NavigateOptions};

use crate::api::use_listing_source;
use crate::components::listing_card::ListingCard;
use crate::components::no_results::NoResults;
use crate::components::skeleton_card::skeleton_cards;
use crate::navigation::SEARCH_PATH;
use crate::search::filter_listings;

const FALLBACK_IMAGE: &str = "https://images.unsplash.com/photo-1566073771259-6a8506099945?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80";

/// Results for a search submitted from the navigation bar (`/search?q=`).
#[component]
pub fn SearchPage() -> impl IntoView {
    let query = use_query_map();
    let q = create_memo(move |_| query.with(|query| query.get("q").cloned().unwrap_or_default()));
    let navigate = use_navigate();
    let source = use_listing_source();

    let listings = create_local_resource(
        || (),
        move |_| {
            let source = source.clone();
            async move { source.load().await }
        },
    );

    let clear_search = Callback::new(move |_: ()| navigate(SEARCH_PATH, NavigateOptions::default()));

    let results = move || match listings.get() {
        None => skeleton_cards(4).into_view(),
        Some(all) => {
            let matches = filter_listings(&all, &q.get()).into_owned();
            if matches.is_empty() {
                view! { <NoResults message="No listings found matching your search" on_clear=clear_search/> }
                    .into_view()
            } else {
                matches
                    .into_iter()
                    .map(|listing| {
                        let href = format!("/hotels/{}", listing.id);
                        view! {
                            <ListingCard
                                listing=listing
                                href=href
                                fallback_image=FALLBACK_IMAGE
                                default_rating="N/A"
                                default_location="Uganda"
                                show_category=true
                            />
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_view()
            }
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 py-12">
                <h1 class="text-3xl font-bold text-gray-900 mb-2">"Search results"</h1>
                <p class="text-gray-500 mb-8">
                    {move || {
                        let q = q.get();
                        if q.is_empty() {
                            "Showing all listings".to_string()
                        } else {
                            format!("Showing results for \"{q}\"")
                        }
                    }}
                </p>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8">{results}</div>
            </div>
        </div>
    }
}
