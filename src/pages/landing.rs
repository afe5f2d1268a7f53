//! Landing page: hero search, featured hotels and restaurants, and the
//! static marketing sections linking into the rest of the site.
use leptos::*;
use leptos_router::A;

use crate::api::use_listing_source;
use crate::components::listing_card::ListingCard;
use crate::components::no_results::NoResults;
use crate::components::skeleton_card::skeleton_cards;
use crate::models::listing::Listing;
use crate::search::{featured, filter_listings, in_home_country, FEATURED_COUNT};

const HOTEL_IMAGE: &str = "https://images.unsplash.com/photo-1566073771259-6a8506099945?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80";
const RESTAURANT_IMAGE: &str = "https://images.unsplash.com/photo-1517248135467-4c7edcad34c4?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80";
const HERO_IMAGE: &str = "/assets/backgrounds/waterfall.jpg";

struct Tile {
    href: &'static str,
    title: &'static str,
    subtitle: &'static str,
    image: &'static str,
}

const DESTINATIONS: &[Tile] = &[
    Tile {
        href: "/destinations/kampala",
        title: "Kampala",
        subtitle: "The vibrant capital city",
        image: "https://images.unsplash.com/photo-1566073771259-6a8506099945?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
    },
    Tile {
        href: "/destinations/jinja",
        title: "Jinja",
        subtitle: "Source of the Nile",
        image: "https://images.unsplash.com/photo-1464983953574-0892a716854b?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
    },
    Tile {
        href: "/destinations/entebbe",
        title: "Entebbe",
        subtitle: "Lakeside retreat",
        image: "https://images.unsplash.com/photo-1502086223501-7ea6ecd79368?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
    },
    Tile {
        href: "/destinations/bwindi",
        title: "Bwindi",
        subtitle: "Gorilla trekking",
        image: "https://images.unsplash.com/photo-1465101046530-73398c7f28ca?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
    },
];

const PROPERTY_TYPES: &[Tile] = &[
    Tile {
        href: "/hotels",
        title: "Hotels",
        subtitle: "Luxury and comfort",
        image: "https://images.unsplash.com/photo-1566073771259-6a8506099945?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
    },
    Tile {
        href: "/apartments",
        title: "Apartments",
        subtitle: "Home away from home",
        image: "https://images.unsplash.com/photo-1512918728675-ed5a9ecdebfd?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
    },
    Tile {
        href: "/resorts",
        title: "Resorts",
        subtitle: "Relaxation and leisure",
        image: "https://images.unsplash.com/photo-1465101046530-73398c7f28ca?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
    },
    Tile {
        href: "/villas",
        title: "Villas",
        subtitle: "Private and exclusive",
        image: "https://images.unsplash.com/photo-1502086223501-7ea6ecd79368?ixlib=rb-1.2.1&auto=format&fit=crop&w=800&q=80",
    },
];

// (icon, title, text)
const FEATURES: &[(&str, &str, &str)] = &[
    ("public", "Local Expertise", "Curated listings and experiences from Uganda's best hospitality providers."),
    ("credit_card", "Secure Payments", "Mobile Money and card payments, safe and easy for all users."),
    ("verified_user", "Verified Reviews", "Real feedback from guests to help you choose the best options."),
    ("headset_mic", "24/7 Support", "Our team is here to help you anytime, anywhere in Uganda."),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let source = use_listing_source();
    let (search_term, set_search_term) = create_signal(String::new());

    // Fetched once, in the browser only.
    let listings = create_local_resource(
        || (),
        move |_| {
            let source = source.clone();
            async move { source.load().await }
        },
    );

    // The featured split is a placeholder until the backend tells hotels and
    // restaurants apart: both sections show the same leading listings.
    let featured_listings = move || listings.get().map(|all| featured(&all));
    let clear_search = Callback::new(move |_: ()| set_search_term.set(String::new()));

    let hotels = move || match featured_listings() {
        None => skeleton_cards(FEATURED_COUNT).into_view(),
        Some(featured) => {
            let hotels: Vec<Listing> = filter_listings(&featured, &search_term.get())
                .iter()
                .filter(|listing| in_home_country(listing))
                .cloned()
                .collect();
            if hotels.is_empty() {
                view! {
                    <NoResults message="No hotels found matching your search" on_clear=clear_search/>
                }
                .into_view()
            } else {
                hotels
                    .into_iter()
                    .map(|hotel| {
                        let href = format!("/hotels/{}", hotel.id);
                        view! {
                            <ListingCard
                                listing=hotel
                                href=href
                                fallback_image=HOTEL_IMAGE
                                default_rating="4.5"
                                default_location="Uganda"
                            />
                        }
                    })
                    .collect::<Vec<_>>()
                    .into_view()
            }
        }
    };

    let restaurants = move || match featured_listings() {
        None => skeleton_cards(FEATURED_COUNT).into_view(),
        Some(featured) => {
            let restaurants = filter_listings(&featured, &search_term.get()).into_owned();
            if restaurants.is_empty() {
                view! {
                    <NoResults message="No restaurants found matching your search" on_clear=clear_search/>
                }
                .into_view()
            } else {
                restaurants
                    .into_iter()
                    .map(|restaurant| {
                        let href = format!("/restaurants/{}", restaurant.id);
                        view! {
                            <ListingCard
                                listing=restaurant
                                href=href
                                fallback_image=RESTAURANT_IMAGE
                                default_rating="4.2"
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
        <div class="overflow-x-hidden">
            <section class="relative h-screen max-h-[100vh] min-h-[600px]">
                <div
                    class="absolute inset-0"
                    style=format!("background-image: url('{HERO_IMAGE}'); background-size: cover; background-position: center; background-attachment: fixed;")
                >
                    <div class="absolute inset-0 bg-gradient-to-b from-black/80 via-black/30 to-black/80"></div>
                </div>

                <div class="relative h-full flex flex-col items-center justify-center px-6">
                    <div class="max-w-4xl mx-auto text-center space-y-8 animate-fade-in">
                        <h1 class="text-4xl sm:text-5xl md:text-6xl font-bold text-white leading-tight">
                            <span class="bg-clip-text text-transparent bg-gradient-to-r from-yellow-400 via-red-600 to-black animate-gradient">
                                "Discover"
                            </span>
                            " Luxury & Adventure in Uganda"
                        </h1>
                        <p class="text-lg md:text-xl text-gray-100 max-w-2xl mx-auto leading-relaxed">
                            "Find hotels, restaurants, and experiences across Uganda. Book, explore, and enjoy!"
                        </p>

                        <div class="flex justify-center mt-6 animate-slide-up">
                            <div class="flex items-center bg-white/90 backdrop-blur-sm rounded-full shadow-xl px-6 py-3 w-full max-w-xl focus-within:ring-2 focus-within:ring-teal-400">
                                <span class="material-symbols-outlined text-gray-500 mr-3">"search"</span>
                                <input
                                    type="text"
                                    class="landing-search flex-1 outline-none text-lg text-gray-700 bg-transparent placeholder-gray-400"
                                    placeholder="Search hotels, restaurants or locations..."
                                    prop:value=search_term
                                    on:input=move |ev| set_search_term.set(event_target_value(&ev))
                                />
                                <button type="button" class="ml-2 bg-teal-500 text-white rounded-full p-2 hover:bg-teal-600">
                                    <span class="material-symbols-outlined">"search"</span>
                                </button>
                            </div>
                        </div>

                        <div class="flex flex-col sm:flex-row justify-center gap-4 mt-8 animate-slide-up">
                            <A
                                href="/business/register"
                                class="inline-flex items-center justify-center px-8 py-4 text-lg font-semibold rounded-full shadow-lg text-white bg-gradient-to-r from-teal-500 to-teal-600 hover:from-teal-600 hover:to-teal-700"
                            >
                                "Add your business"
                                <span class="material-symbols-outlined ml-2">"chevron_right"</span>
                            </A>
                        </div>
                    </div>
                </div>
            </section>

            <Section
                title="Featured Hotels in Uganda"
                subtitle="Discover the finest accommodations Uganda has to offer"
                background="bg-white"
            >
                <div class="featured-hotels grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8">{hotels}</div>
            </Section>

            <Section
                title="Featured Restaurants in Uganda"
                subtitle="Taste the best of Ugandan cuisine and international flavors"
                background="bg-gray-50"
            >
                <div class="featured-restaurants grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8">{restaurants}</div>
            </Section>

            <Section
                title="Popular Destinations in Uganda"
                subtitle="Explore Uganda's most breathtaking locations"
                background="bg-white"
            >
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {DESTINATIONS.iter().map(|tile| view! {
                        <A
                            href=tile.href
                            class="relative rounded-xl overflow-hidden shadow-lg h-80 flex items-end group transition-all duration-300 hover:shadow-xl hover:-translate-y-1"
                        >
                            <img src=tile.image alt=tile.title class="absolute inset-0 w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"/>
                            <div class="absolute inset-0 bg-gradient-to-t from-black/70 via-black/40 to-transparent z-10"></div>
                            <div class="relative w-full p-6 z-20">
                                <h3 class="text-2xl font-bold text-white mb-1">{tile.title}</h3>
                                <p class="text-gray-200 mb-3">{tile.subtitle}</p>
                                <span class="inline-flex items-center text-white bg-black/30 backdrop-blur-sm px-3 py-1 rounded-full text-sm border border-white/20">
                                    "Explore"
                                    <span class="material-symbols-outlined ml-1">"chevron_right"</span>
                                </span>
                            </div>
                        </A>
                    }).collect::<Vec<_>>()}
                </div>
            </Section>

            <Section
                title="Browse Ugandan Property Types"
                subtitle="Find the perfect accommodation for your Ugandan adventure"
                background="bg-gray-50"
            >
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                    {PROPERTY_TYPES.iter().map(|tile| view! {
                        <A
                            href=tile.href
                            class="group relative rounded-xl overflow-hidden shadow-lg h-64 flex items-end transition-all duration-300 hover:shadow-xl hover:-translate-y-1"
                        >
                            <img src=tile.image alt=tile.title class="absolute inset-0 w-full h-full object-cover transition-transform duration-500 group-hover:scale-105"/>
                            <div class="absolute inset-0 bg-gradient-to-t from-black/70 via-black/30 to-transparent"></div>
                            <div class="relative w-full p-6 z-10">
                                <h3 class="text-2xl font-bold text-white">{tile.title}</h3>
                                <p class="text-gray-200 text-sm">{tile.subtitle}</p>
                            </div>
                        </A>
                    }).collect::<Vec<_>>()}
                </div>
            </Section>

            <Section
                title="Why Book With Us?"
                subtitle="We're committed to providing the best experience for your Ugandan adventure"
                background="bg-white"
            >
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-8">
                    {FEATURES.iter().map(|(icon, title, text)| view! {
                        <div class="bg-white rounded-xl shadow-lg p-8 flex flex-col items-center text-center transition-all duration-300 hover:shadow-xl hover:-translate-y-1 border border-gray-100">
                            <div class="bg-teal-100/30 text-teal-600 p-4 rounded-full mb-4">
                                <span class="material-symbols-outlined w-8 h-8">{*icon}</span>
                            </div>
                            <h3 class="font-bold text-xl text-gray-900 mb-3">{*title}</h3>
                            <p class="text-gray-600">{*text}</p>
                        </div>
                    }).collect::<Vec<_>>()}
                </div>
            </Section>

            <section class="py-16 bg-gradient-to-r from-teal-600 to-teal-700">
                <div class="max-w-4xl mx-auto px-4 sm:px-6 lg:px-8 text-center">
                    <h2 class="text-3xl font-bold text-white mb-4">"Ready to explore Uganda?"</h2>
                    <p class="text-xl text-teal-100 mb-8 max-w-3xl mx-auto">
                        "Start planning your perfect trip with our curated selection of hotels, restaurants, and experiences."
                    </p>
                    <div class="flex flex-col sm:flex-row justify-center gap-4">
                        <A href="/hotels" class="inline-flex items-center justify-center px-8 py-3 text-lg font-semibold rounded-full shadow-md text-teal-700 bg-white hover:bg-gray-50">
                            "Browse Hotels"
                        </A>
                        <A href="/restaurants" class="inline-flex items-center justify-center px-8 py-3 border border-white text-lg font-semibold rounded-full shadow-md text-white hover:bg-white/10">
                            "Discover Restaurants"
                        </A>
                    </div>
                </div>
            </section>
        </div>
    }
}

/// Titled landing page section with the teal underline.
#[component]
fn Section(
    title: &'static str,
    subtitle: &'static str,
    background: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=format!("py-16 {background}")>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="text-center mb-12">
                    <h2 class="text-3xl font-bold text-gray-900 mb-3">{title}</h2>
                    <div class="w-20 h-1 bg-teal-500 mx-auto"></div>
                    <p class="mt-4 text-gray-500 max-w-2xl mx-auto">{subtitle}</p>
                </div>
                {children()}
            </div>
        </section>
    }
}
