//! Route tables and rules behind the navigation bar.

/// Pages that bring their own chrome; the navigation bar stays hidden on
/// them and on everything below them.
pub const HIDDEN_PATH_PREFIXES: &[&str] = &[
    "/login",
    "/register",
    "/forgot-password",
    "/reset-password",
    "/verify-email",
    "/business/register",
    "/business/dashboard",
    "/dashboard",
    "/approvals",
    "/admin",
    "/admin/",
    "/admin/dashboard",
    "/admin/approvals",
    "/admin/users",
    "/admin/businesses",
    "/admin/bookings",
    "/admin/transactions",
    "/admin/settings",
    "/admin/listing-approvals",
    "/admin/listing",
    "/business/ListOfProperty",
];

pub const LIST_PROPERTY_PATH: &str = "/business/ListOfProperty";
pub const SEARCH_PATH: &str = "/search";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavVisibility {
    Visible,
    Hidden,
}

pub fn nav_visibility(path: &str) -> NavVisibility {
    if HIDDEN_PATH_PREFIXES
        .iter()
        .any(|prefix| path.starts_with(prefix))
    {
        NavVisibility::Hidden
    } else {
        NavVisibility::Visible
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Home,
    Map,
    Utensils,
    Rss,
}

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub path: &'static str,
    pub name: &'static str,
    pub icon: NavIcon,
}

pub const NAV_ITEMS: &[NavItem] = &[
    NavItem { path: "/", name: "Home", icon: NavIcon::Home },
    NavItem { path: "/destinations", name: "Destinations", icon: NavIcon::Map },
    NavItem { path: "/hotels", name: "Hotels", icon: NavIcon::Home },
    NavItem { path: "/restaurants", name: "Restaurants", icon: NavIcon::Utensils },
    NavItem { path: "/activities", name: "Activities", icon: NavIcon::Rss },
];

/// Target of a navigation bar search, or `None` for a blank query.
///
/// The query is sent as typed; only the blank check trims it.
pub fn search_href(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        return None;
    }
    Some(format!("{SEARCH_PATH}?q={}", urlencoding::encode(query)))
}
