use leptos::*;

/// Pulsing placeholder shown while listings load.
#[component]
pub fn SkeletonCard() -> impl IntoView {
    view! {
        <div class="skeleton-card bg-gray-100 rounded-lg shadow-md overflow-hidden animate-pulse">
            <div class="bg-gray-300 h-48 w-full"></div>
            <div class="p-4">
                <div class="h-6 bg-gray-300 rounded w-3/4 mb-2"></div>
                <div class="h-4 bg-gray-300 rounded w-1/2 mb-4"></div>
                <div class="h-4 bg-gray-300 rounded w-1/4"></div>
            </div>
        </div>
    }
}

/// `count` skeleton cards.
pub fn skeleton_cards(count: usize) -> Vec<View> {
    (0..count).map(|_| view! { <SkeletonCard/> }.into_view()).collect()
}
