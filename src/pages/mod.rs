pub mod destination;
pub mod landing;
pub mod not_found;
pub mod search;

pub use destination::DestinationPage;
pub use landing::LandingPage;
pub use not_found::NotFound;
pub use search::SearchPage;
