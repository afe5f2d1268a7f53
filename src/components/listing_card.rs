use leptos::*;
use leptos_router::A;

use crate::models::listing::Listing;

fn card_location(listing: &Listing, location_label: bool, default_location: String) -> String {
    let location = if location_label {
        listing.location_label()
    } else {
        listing.city()
    };
    location.map_or(default_location, str::to_string)
}

/// Card for a single listing with a photo, rating badge and details link.
#[component]
pub fn ListingCard(
    listing: Listing,
    /// Link target of "View details".
    #[prop(into)]
    href: String,
    /// Shown when the listing has no photos.
    #[prop(into)]
    fallback_image: String,
    #[prop(into)] default_rating: String,
    #[prop(into)] default_location: String,
    /// Falls back to a free-text location label when the listing has no city.
    #[prop(optional)]
    location_label: bool,
    /// Renders the cuisine / business type tag, defaulting to "International".
    #[prop(optional)]
    show_category: bool,
) -> impl IntoView {
    let image = listing
        .primary_photo()
        .map(str::to_string)
        .unwrap_or(fallback_image);
    let rating = listing.rating_label().unwrap_or(default_rating);
    let location = card_location(&listing, location_label, default_location);
    let category = show_category.then(|| listing.category().unwrap_or("International").to_string());

    view! {
        <div class="listing-card group bg-white rounded-xl shadow-lg overflow-hidden transition-all duration-300 hover:shadow-xl hover:-translate-y-1">
            <div class="relative overflow-hidden h-56">
                <img
                    src=image
                    alt=listing.name.clone()
                    class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"
                />
                <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent"></div>
                <div class="absolute top-4 right-4 bg-white/90 text-yellow-500 px-2 py-1 rounded-full text-sm font-semibold flex items-center">
                    <span class="material-symbols-outlined mr-1">"star"</span>
                    {rating}
                </div>
            </div>
            <div class="p-5">
                <h3 class="text-xl font-bold text-gray-800 mb-2">{listing.name.clone()}</h3>
                <div class="flex items-center text-gray-500 mb-3">
                    <span class="material-symbols-outlined mr-2">"location_on"</span>
                    <span>{location}</span>
                </div>
                {category.map(|category| view! {
                    <div class="mb-3">
                        <span class="inline-block bg-gray-100 text-gray-600 text-xs px-2 py-1 rounded">
                            {category}
                        </span>
                    </div>
                })}
                <A href=href class="inline-flex items-center text-teal-600 hover:text-teal-700 font-medium group-hover:underline">
                    "View details"
                    <span class="material-symbols-outlined ml-1">"chevron_right"</span>
                </A>
            </div>
        </div>
    }
}
