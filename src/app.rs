//! Root component of the Egret customer site.
//! Provides the session and listing source, then routes between the pages
//! under a shared navigation bar.
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

use crate::api::{provide_listing_source, ListingSourceHandle, ListingsApi};
use crate::components::navbar::Navbar;
use crate::config::ApiConfig;
use crate::pages::{DestinationPage, LandingPage, NotFound, SearchPage};
use crate::session::provide_session;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_session();
    provide_listing_source(ListingSourceHandle::new(ListingsApi::new(ApiConfig::from_env())));

    view! {
        <Stylesheet id="leptos" href="/pkg/egret.css"/>
        <Title text="Egret Hospitality"/>
        <Meta name="description" content="Hotels, restaurants and experiences across Uganda"/>
        <Link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined"/>

        <Router>
            <Navbar/>
            <main>
                <Routes>
                    <Route path="/" view=LandingPage/>
                    <Route path="/destinations/:destination" view=DestinationPage/>
                    <Route path="/search" view=SearchPage/>
                    <Route path="/*any" view=NotFound/>
                </Routes>
            </main>
        </Router>
    }
}
