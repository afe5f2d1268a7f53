pub mod listing_card;
pub mod navbar;
pub mod no_results;
pub mod skeleton_card;
