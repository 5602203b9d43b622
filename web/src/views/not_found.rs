use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

/// 404 page pointing visitors back at the finder.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="not-found">
            <div class="not-found-code">"404"</div>
            <h1>"Page Not Found"</h1>
            <p>
                "Looks like this page has gone flat. The page you're looking for "
                "doesn't exist or may have been moved."
            </p>
            <button
                class="not-found-home"
                on:click=move |_| navigate("/", Default::default())
            >
                "Back to the Beer Finder"
            </button>
        </div>
    }
}
