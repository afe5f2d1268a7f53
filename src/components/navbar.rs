use leptos::ev::SubmitEvent;
use leptos::html::{Button, Div};
use leptos::*;
use leptos_router::{use_location, use_navigate, NavigateOptions, A};
use wasm_bindgen::JsCast;

use crate::navigation::{
    nav_visibility, search_href, NavIcon, NavVisibility, LIST_PROPERTY_PATH, NAV_ITEMS,
};
use crate::session::use_session;

pub const LOGO_PATH: &str = "/assets/logo.png";
pub const FALLBACK_LOGO_PATH: &str = "/fallback-logo.png";

fn icon_name(icon: NavIcon) -> &'static str {
    match icon {
        NavIcon::Home => "home",
        NavIcon::Map => "map",
        NavIcon::Utensils => "restaurant",
        NavIcon::Rss => "rss_feed",
    }
}

/// Site navigation, hidden on the pages listed in
/// [`HIDDEN_PATH_PREFIXES`](crate::navigation::HIDDEN_PATH_PREFIXES).
#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let visible =
        create_memo(move |_| nav_visibility(&pathname.get()) == NavVisibility::Visible);

    move || visible.get().then(|| view! { <NavbarContent/> })
}

#[component]
fn NavbarContent() -> impl IntoView {
    let session = use_session();
    let user = session.user();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let (is_menu_open, set_menu_open) = create_signal(false);
    let (is_user_menu_open, set_user_menu_open) = create_signal(false);
    let (search_query, set_search_query) = create_signal(String::new());
    let (logo_src, set_logo_src) = create_signal(LOGO_PATH);

    let user_menu_ref = create_node_ref::<Div>();
    let mobile_menu_ref = create_node_ref::<Div>();
    let menu_button_ref = create_node_ref::<Button>();

    // Close open menus on a mouse-down anywhere outside of them.
    let outside_click = window_event_listener(ev::mousedown, move |event| {
        let target = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok());
        let target = target.as_ref();

        let in_user_menu = user_menu_ref
            .get_untracked()
            .is_some_and(|menu| menu.contains(target));
        if !in_user_menu {
            set_user_menu_open.set(false);
        }

        let in_mobile_menu = mobile_menu_ref
            .get_untracked()
            .is_some_and(|menu| menu.contains(target));
        let on_menu_button = menu_button_ref
            .get_untracked()
            .is_some_and(|button| button.contains(target));
        if !in_mobile_menu && !on_menu_button {
            set_menu_open.set(false);
        }
    });
    on_cleanup(move || outside_click.remove());

    let on_search = Callback::new({
        let navigate = navigate.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if let Some(href) = search_href(&search_query.get_untracked()) {
                logging::log!("[NAVBAR] Searching: {}", href);
                navigate(&href, NavigateOptions::default());
                set_search_query.set(String::new());
                set_menu_open.set(false);
            }
        }
    });

    let on_logout = Callback::new(move |_: ()| {
        session.sign_out();
        set_user_menu_open.set(false);
        set_menu_open.set(false);
        navigate("/", NavigateOptions::default());
    });

    let desktop_links = NAV_ITEMS
        .iter()
        .map(|item| {
            let path = item.path;
            let is_active = move || pathname.get() == path;
            view! {
                <a
                    href=path
                    class=move || {
                        if is_active() {
                            "relative px-2 py-2 text-sm font-medium transition-all duration-200 flex items-center text-green-600 font-semibold"
                        } else {
                            "relative px-2 py-2 text-sm font-medium transition-all duration-200 flex items-center text-gray-700 hover:text-green-600"
                        }
                    }
                >
                    <span class="md:hidden material-symbols-outlined mr-2">{icon_name(item.icon)}</span>
                    {item.name}
                    {move || is_active().then(|| view! {
                        <span class="absolute bottom-0 left-0 w-full h-0.5 bg-gradient-to-r from-green-400 to-teal-400 rounded-full hidden md:block"></span>
                    })}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let user_actions = move || match user.get() {
        Some(user) => {
            let initials = user.initials();
            let first_name = user.first_name.clone();
            let email = user.email;
            view! {
                <div class="ml-3 relative" node_ref=user_menu_ref>
                    <button
                        type="button"
                        class="user-menu-button flex items-center space-x-2 focus:outline-none group"
                        aria-haspopup="true"
                        aria-expanded=move || is_user_menu_open.get().to_string()
                        on:click=move |_| set_user_menu_open.update(|open| *open = !*open)
                    >
                        <div class="w-9 h-9 rounded-full bg-gradient-to-r from-green-500 to-teal-500 text-white flex items-center justify-center text-sm font-medium shadow-md">
                            {initials}
                        </div>
                        <span class="text-gray-700 font-medium hidden md:inline">{first_name}</span>
                        <span class="material-symbols-outlined h-5 w-5 text-gray-500 hidden md:inline">
                            {move || if is_user_menu_open.get() { "expand_less" } else { "expand_more" }}
                        </span>
                    </button>
                    {move || {
                        let email = email.clone();
                        is_user_menu_open.get().then(|| view! {
                            <div
                                class="user-menu origin-top-right absolute right-0 mt-2 w-56 rounded-lg shadow-lg py-1 bg-white ring-1 ring-gray-200 z-50 overflow-hidden animate-fade-in"
                                role="menu"
                                aria-orientation="vertical"
                            >
                                <div class="px-4 py-3 border-b border-gray-100">
                                    <p class="text-sm font-medium text-gray-900">"Signed in as"</p>
                                    <p class="text-sm text-gray-500 truncate">{email}</p>
                                </div>
                                <a
                                    href="/account"
                                    class="flex items-center px-4 py-3 text-sm text-gray-700 hover:bg-green-50 hover:text-green-600"
                                    on:click=move |_| set_user_menu_open.set(false)
                                >
                                    <span class="material-symbols-outlined mr-3 text-gray-500">"person"</span>
                                    "My Profile"
                                </a>
                                <a
                                    href="/account/bookings"
                                    class="flex items-center px-4 py-3 text-sm text-gray-700 hover:bg-green-50 hover:text-green-600"
                                    on:click=move |_| set_user_menu_open.set(false)
                                >
                                    <span class="material-symbols-outlined mr-3 text-gray-500">"calendar_month"</span>
                                    "My Bookings"
                                </a>
                                <button
                                    type="button"
                                    class="flex w-full items-center px-4 py-3 text-sm text-gray-700 hover:bg-green-50 hover:text-green-600"
                                    role="menuitem"
                                    on:click=move |_| on_logout.call(())
                                >
                                    <span class="material-symbols-outlined mr-3 text-gray-500">"logout"</span>
                                    "Sign out"
                                </button>
                            </div>
                        })
                    }}
                </div>
            }
            .into_view()
        }
        None => view! {
            <div class="flex space-x-3">
                <A href="/login" class="px-4 py-2 rounded-md text-sm font-medium text-gray-700 hover:text-green-600 hover:bg-gray-50 hidden md:block">
                    "Sign in"
                </A>
                <A href="/register" class="px-4 py-2 rounded-md text-sm font-medium text-white bg-gradient-to-r from-green-500 to-teal-500 shadow-md hidden md:block">
                    "Get Started"
                </A>
            </div>
        }
        .into_view(),
    };

    view! {
        <nav class="bg-white/90 backdrop-blur-md shadow-sm border-b border-gray-100 sticky top-0 z-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row md:justify-between md:items-center h-auto md:h-20 py-2 md:py-0">
                    <div class="flex justify-between items-center w-full md:w-auto">
                        <div class="flex-shrink-0 flex items-center mr-10">
                            <A href="/" class="focus:outline-none group">
                                <img
                                    src=logo_src
                                    alt="Egret Hospitality Logo"
                                    class="h-16 w-auto transition-all duration-300 group-hover:scale-105"
                                    on:error=move |_| {
                                        if logo_src.get_untracked() != FALLBACK_LOGO_PATH {
                                            set_logo_src.set(FALLBACK_LOGO_PATH);
                                        }
                                    }
                                />
                            </A>
                        </div>
                        <div class="flex items-center space-x-3 md:space-x-6 order-2 md:order-none">
                            {user_actions}
                            <div class="md:hidden">
                                <button
                                    type="button"
                                    node_ref=menu_button_ref
                                    class="menu-toggle inline-flex items-center justify-center p-2 rounded-md text-gray-500 hover:text-green-600 hover:bg-gray-100"
                                    aria-label="Toggle navigation"
                                    aria-expanded=move || is_menu_open.get().to_string()
                                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                                >
                                    <span class="material-symbols-outlined h-6 w-6">
                                        {move || if is_menu_open.get() { "close" } else { "menu" }}
                                    </span>
                                </button>
                            </div>
                        </div>
                    </div>

                    <div class="flex flex-col md:flex-row md:items-center md:justify-between w-full mt-4 md:mt-0">
                        <div class="flex flex-wrap gap-2 md:gap-6 items-center justify-center md:justify-start">
                            {desktop_links}
                            <A href=LIST_PROPERTY_PATH class="hidden md:flex items-center px-3 py-2 text-sm text-gray-700 hover:text-green-600 hover:bg-green-50 rounded-md">
                                <span class="material-symbols-outlined mr-2 text-gray-500">"table_view"</span>
                                "List Your Property"
                            </A>
                        </div>
                        <div class="mt-4 md:mt-0 md:ml-8 flex justify-center md:justify-end w-full md:w-auto">
                            <form class="nav-search w-full max-w-md" on:submit=move |ev| on_search.call(ev)>
                                <div class="relative flex items-center bg-white rounded-lg shadow-sm px-4 py-2 w-full border border-gray-200 hover:border-green-400 focus-within:ring-2 focus-within:ring-green-500">
                                    <span class="material-symbols-outlined text-gray-400 mr-2">"search"</span>
                                    <input
                                        type="text"
                                        placeholder="Search hotels, restaurants, or location..."
                                        class="flex-1 outline-none text-sm text-gray-700 bg-transparent placeholder-gray-400"
                                        prop:value=search_query
                                        on:input=move |ev| set_search_query.set(event_target_value(&ev))
                                    />
                                    <button type="submit" class="ml-2 text-green-600 hover:text-green-700" aria-label="Search">
                                        <span class="material-symbols-outlined">"search"</span>
                                    </button>
                                </div>
                            </form>
                        </div>
                    </div>
                </div>
            </div>

            {move || is_menu_open.get().then(|| view! {
                <MobileMenu
                    menu_ref=mobile_menu_ref
                    search_query=search_query
                    set_search_query=set_search_query
                    set_menu_open=set_menu_open
                    on_search=on_search
                    on_logout=on_logout
                />
            })}
        </nav>
    }
}

#[component]
fn MobileMenu(
    menu_ref: NodeRef<Div>,
    search_query: ReadSignal<String>,
    set_search_query: WriteSignal<String>,
    set_menu_open: WriteSignal<bool>,
    on_search: Callback<SubmitEvent>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let user = session.user();
    let pathname = use_location().pathname;
    let close = move |_: ev::MouseEvent| set_menu_open.set(false);

    let links = NAV_ITEMS
        .iter()
        .map(|item| {
            let path = item.path;
            view! {
                <a
                    href=path
                    class=move || {
                        if pathname.get() == path {
                            "flex items-center px-4 py-3 text-base font-medium bg-green-50 text-green-600 border-l-4 border-green-500 mx-2 rounded-md"
                        } else {
                            "flex items-center px-4 py-3 text-base font-medium text-gray-700 hover:bg-green-50 hover:text-green-600 mx-2 rounded-md"
                        }
                    }
                    on:click=close
                >
                    <span class="material-symbols-outlined mr-2">{icon_name(item.icon)}</span>
                    {item.name}
                </a>
            }
        })
        .collect::<Vec<_>>();

    let account = move || match user.get() {
        Some(user) => view! {
            <div class="px-4 space-y-3">
                <div class="flex items-center">
                    <div class="w-10 h-10 rounded-full bg-gradient-to-r from-green-500 to-teal-500 text-white flex items-center justify-center text-sm font-medium shadow-md mr-3">
                        {user.initials()}
                    </div>
                    <div>
                        <p class="text-sm font-medium text-gray-900">{user.full_name()}</p>
                        <p class="text-xs text-gray-500">{user.email.clone()}</p>
                    </div>
                </div>
                <a href="/account" class="block px-4 py-2 text-base font-medium text-gray-700 hover:bg-green-50 rounded-md" on:click=close>
                    "My Account"
                </a>
                <button
                    type="button"
                    class="block w-full text-left px-4 py-2 text-base font-medium text-gray-700 hover:bg-green-50 rounded-md"
                    on:click=move |_| on_logout.call(())
                >
                    "Sign out"
                </button>
            </div>
        }
        .into_view(),
        None => view! {
            <div class="px-4 space-y-3">
                <a href="/login" class="block w-full px-4 py-3 text-center text-base font-medium text-green-600 bg-green-50 rounded-md" on:click=close>
                    "Sign in"
                </a>
                <a href="/register" class="block w-full px-4 py-3 text-center text-base font-medium text-white bg-gradient-to-r from-green-500 to-teal-500 rounded-md" on:click=close>
                    "Create Account"
                </a>
            </div>
        }
        .into_view(),
    };

    view! {
        <div class="mobile-menu md:hidden bg-white shadow-xl rounded-b-lg animate-slide-down" node_ref=menu_ref>
            <div class="pt-2 pb-3 space-y-1">
                {links}
                <a href=LIST_PROPERTY_PATH class="flex items-center px-4 py-3 text-base font-medium text-gray-700 hover:bg-green-50 mx-2 rounded-md" on:click=close>
                    <span class="material-symbols-outlined mr-2">"table_view"</span>
                    "List Your Property"
                </a>
            </div>
            <div class="px-4 py-3 border-t border-gray-200">
                <form on:submit=move |ev| on_search.call(ev)>
                    <div class="flex items-center bg-white rounded-lg shadow-sm px-4 py-2 w-full border border-gray-200">
                        <span class="material-symbols-outlined text-gray-400 mr-2">"search"</span>
                        <input
                            type="text"
                            placeholder="Search..."
                            class="flex-1 outline-none text-sm text-gray-700 bg-transparent"
                            prop:value=search_query
                            on:input=move |ev| set_search_query.set(event_target_value(&ev))
                        />
                    </div>
                </form>
            </div>
            <div class="pt-4 pb-6 border-t border-gray-200">{account}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    // `/assets/*` and `/fallback-logo.png` are both served from the site
    // root, which cargo-leptos fills from `assets/`.
    fn bundled(path: &str) -> bool {
        let name = path.trim_start_matches("/assets/").trim_start_matches('/');
        Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("assets")
            .join(name)
            .is_file()
    }

    #[test]
    fn test_logo_images_are_bundled() {
        assert!(bundled(LOGO_PATH));
        assert!(bundled(FALLBACK_LOGO_PATH));
    }
}
