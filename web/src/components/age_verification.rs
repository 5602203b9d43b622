use leptos::prelude::*;

use crate::consent::{ConsentSignal, ConsentStore, LocalStorageConsent};

#[component]
pub fn AgeVerification() -> impl IntoView {
    let ConsentSignal(verified) = expect_context::<ConsentSignal>();

    // Check the persisted decision once the app is running in the browser.
    // Effects never run during server rendering, so localStorage is safe here.
    Effect::new(move |_| {
        if LocalStorageConsent.is_accepted() {
            verified.set(true);
        }
    });

    let handle_verify = move |_| {
        LocalStorageConsent.accept();
        verified.set(true);
    };

    let handle_reject = move |_| {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href("https://www.responsibility.org/");
        }
    };

    view! {
        {move || {
            if verified.get() {
                view! { <></> }.into_any()
            } else {
                view! {
                    <div class="age-verification-overlay">
                        <div class="age-verification-modal">
                            <h2>"Age Verification"</h2>
                            <div class="logo">"🍺"</div>
                            <p>"Welcome to Chicago Beer Finder"</p>
                            <p>"You must be 21 years or older to visit this site."</p>
                            <div class="buttons">
                                <button class="verify-button" on:click=handle_verify>
                                    "Yes, I am 21 or older"
                                </button>
                                <button class="reject-button" on:click=handle_reject>
                                    "No, I am under 21"
                                </button>
                            </div>
                            <p class="disclaimer">
                                "Please drink responsibly. Don't drink and drive."
                            </p>
                        </div>
                    </div>
                }.into_any()
            }
        }}
    }
}
