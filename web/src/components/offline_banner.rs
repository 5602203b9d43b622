use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget};

/// Binary online/offline indicator driven by the browser connectivity events.
#[component]
pub fn OfflineBanner() -> impl IntoView {
    let offline = RwSignal::new(false);

    Effect::new(move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        offline.set(!window.navigator().on_line());

        let on_online: Closure<dyn FnMut(Event)> =
            Closure::wrap(Box::new(move |_event| offline.set(false)));
        let on_offline: Closure<dyn FnMut(Event)> =
            Closure::wrap(Box::new(move |_event| offline.set(true)));

        let target: &EventTarget = window.as_ref();
        target
            .add_event_listener_with_callback("online", on_online.as_ref().unchecked_ref())
            .expect("Failed to attach online listener");
        target
            .add_event_listener_with_callback("offline", on_offline.as_ref().unchecked_ref())
            .expect("Failed to attach offline listener");

        on_online.forget();
        on_offline.forget();
    });

    view! {
        {move || offline.get().then(|| view! {
            <div class="offline-notification" role="alert">
                <p>"You are currently offline. Some features may not work properly."</p>
            </div>
        })}
    }
}
