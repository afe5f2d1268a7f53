use leptos::*;

/// Empty state with a control that clears the active search.
#[component]
pub fn NoResults(#[prop(into)] message: String, on_clear: Callback<()>) -> impl IntoView {
    view! {
        <div class="no-results col-span-4 text-center py-12">
            <div class="text-gray-400 mb-4">{message}</div>
            <button
                type="button"
                class="clear-search text-teal-600 hover:text-teal-700 font-medium"
                on:click=move |_| on_clear.call(())
            >
                "Clear search"
            </button>
        </div>
    }
}
