//! Client-side filtering over an already fetched listings collection.

use std::borrow::Cow;

use crate::models::listing::Listing;

/// Number of listings promoted to the landing page sections.
pub const FEATURED_COUNT: usize = 4;

/// Listings whose name, city or country contains `query`, ignoring case.
///
/// An empty query hands back the input slice itself.
pub fn filter_listings<'a>(listings: &'a [Listing], query: &str) -> Cow<'a, [Listing]> {
    if query.is_empty() {
        return Cow::Borrowed(listings);
    }
    let needle = query.to_lowercase();
    Cow::Owned(
        listings
            .iter()
            .filter(|listing| matches_query(listing, &needle))
            .cloned()
            .collect(),
    )
}

/// `needle` must already be lower-cased.
fn matches_query(listing: &Listing, needle: &str) -> bool {
    [Some(listing.name.as_str()), listing.city(), listing.country()]
        .into_iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Listings located in `destination`, compared case-insensitively and exactly.
pub fn filter_by_destination(listings: Vec<Listing>, destination: &str) -> Vec<Listing> {
    let destination = destination.to_lowercase();
    listings
        .into_iter()
        .filter(|listing| {
            listing
                .city()
                .is_some_and(|city| city.to_lowercase() == destination)
        })
        .collect()
}

/// Leading slice shown in the featured sections of the landing page.
pub fn featured(listings: &[Listing]) -> Vec<Listing> {
    listings.iter().take(FEATURED_COUNT).cloned().collect()
}

/// Hotels are featured when they are in Uganda or carry no country at all.
pub fn in_home_country(listing: &Listing) -> bool {
    listing
        .country()
        .map_or(true, |country| country.eq_ignore_ascii_case("uganda"))
}
