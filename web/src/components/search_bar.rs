use leptos::prelude::*;
use web_sys::KeyboardEvent;

#[component]
pub fn SearchBar<F>(
    query: RwSignal<String>,
    loading: Signal<bool>,
    on_search: F,
) -> impl IntoView
where
    F: Fn() + 'static + Copy + Send + Sync,
{
    let handle_keydown = move |ev: KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            on_search();
        }
    };

    view! {
        <div class="search-container">
            <input
                type="text"
                class="search-input"
                placeholder="Search for beers by name or type..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
                on:keydown=handle_keydown
            />
            <button
                class="search-button"
                on:click=move |_| on_search()
                disabled=move || loading.get()
            >
                {move || if loading.get() { "Searching..." } else { "Search" }}
            </button>
        </div>
    }
}
