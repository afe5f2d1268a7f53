use leptos::*;
use leptos_router::A;

/// 404 Not Found page
#[component]
pub fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_actix::ResponseOptions>() {
            response.set_status(actix_web::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <div class="min-h-screen bg-gray-100 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-gray-300 mb-4">"404"</h1>
                <p class="text-xl text-gray-600 mb-8">"Page not found"</p>
                <A href="/" class="px-6 py-3 bg-teal-600 text-white rounded-lg hover:bg-teal-700">
                    "Back to home"
                </A>
            </div>
        </div>
    }
}
