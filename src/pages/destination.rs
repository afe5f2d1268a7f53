use leptos::logging::log;
use leptos::*;
use leptos_router::use_params_map;

use crate::api::use_listing_source;
use crate::components::listing_card::ListingCard;
use crate::models::listing::Listing;
use crate::search::filter_by_destination;
use crate::utils::leptos_owner::with_owner_safe;
use crate::utils::request_generation::RequestGeneration;

pub const PLACEHOLDER_HEADER_IMAGE: &str = "https://via.placeholder.com/1200x400?text=Uganda";

const HEADER_IMAGES: &[(&str, &str)] = &[
    ("kampala", "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=1200&q=80"),
    ("jinja", "https://images.unsplash.com/photo-1464983953574-0892a716854b?auto=format&fit=crop&w=1200&q=80"),
    ("entebbe", "https://images.unsplash.com/photo-1502086223501-7ea6ecd79368?auto=format&fit=crop&w=1200&q=80"),
    ("bwindi", "https://images.unsplash.com/photo-1465101046530-73398c7f28ca?auto=format&fit=crop&w=1200&q=80"),
];

/// Banner image for a destination, or a generic placeholder.
pub fn header_image(destination: &str) -> &'static str {
    let key = destination.to_lowercase();
    HEADER_IMAGES
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(PLACEHOLDER_HEADER_IMAGE, |(_, url)| *url)
}

#[component]
pub fn DestinationPage() -> impl IntoView {
    let params = use_params_map();
    let destination =
        create_memo(move |_| params.with(|p| p.get("destination").cloned().unwrap_or_default()));

    let source = use_listing_source();
    let generation = RequestGeneration::new();
    let owner = Owner::current();
    let (properties, set_properties) = create_signal(Vec::<Listing>::new());
    let (loading, set_loading) = create_signal(true);

    // Refetch whenever the destination segment changes. Only the response
    // to the latest request is applied.
    create_effect(move |_| {
        let destination = destination.get();
        let ticket = generation.begin();
        let generation = generation.clone();
        let source = source.clone();
        set_loading.set(true);

        spawn_local(async move {
            let listings = source.load().await;
            if !generation.is_current(ticket) {
                log!("[DESTINATION] Dropping stale response for {}", destination);
                return;
            }
            let found = filter_by_destination(listings, &destination);
            log!("[DESTINATION] {} properties in {}", found.len(), destination);
            with_owner_safe(owner, "destination listings", move || {
                set_properties.set(found);
                set_loading.set(false);
            });
        });
    });

    let image = move || header_image(&destination.get());

    let results = move || {
        if loading.get() {
            view! { <div class="loading text-center text-gray-500">"Loading..."</div> }.into_view()
        } else if properties.with(Vec::is_empty) {
            view! {
                <div class="no-results text-center text-gray-500">"No properties found in this area."</div>
            }
            .into_view()
        } else {
            view! {
                <div class="grid grid-cols-1 sm:grid-cols-2 md:grid-cols-3 gap-8">
                    {properties
                        .get()
                        .into_iter()
                        .map(|property| {
                            let href = format!("/hotels/{}", property.id);
                            view! {
                                <ListingCard
                                    listing=property
                                    href=href
                                    fallback_image=image()
                                    default_rating="N/A"
                                    default_location=""
                                    location_label=true
                                />
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_view()
        }
    };

    view! {
        <div class="min-h-screen bg-gray-50">
            <div class="w-full h-64 md:h-80 relative mb-8">
                <img src=image alt=move || destination.get() class="w-full h-full object-cover"/>
                <div class="absolute inset-0 bg-black/40 flex items-center justify-center">
                    <h1 class="text-4xl md:text-5xl font-bold text-white capitalize drop-shadow-lg">
                        {move || destination.get()}
                    </h1>
                </div>
            </div>
            <div class="max-w-7xl mx-auto px-4 pb-8">
                <p class="text-lg text-gray-600 mb-8">
                    "Properties found in " {move || destination.get()} ":"
                </p>
                {results}
            </div>
        </div>
    }
}
