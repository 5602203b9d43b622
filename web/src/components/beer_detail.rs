use leptos::prelude::*;
use shared_types::BeerRecord;
use web_sys::MouseEvent;

/// Modal view of one beer. Shown with the summary record immediately; the
/// caller swaps in the richer detail record if its fetch succeeds.
#[component]
pub fn BeerDetailModal<F>(beer: BeerRecord, on_close: F) -> impl IntoView
where
    F: Fn() + 'static + Copy + Send + Sync,
{
    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal-content" on:click=move |ev: MouseEvent| ev.stop_propagation()>
                <button class="close-button" on:click=move |_| on_close()>"×"</button>

                <div class="beer-modal-header">
                    <h2>{beer.beer.clone()}</h2>
                    <div class="beer-meta">
                        <span class="beer-type">{beer.beer_type.clone()}</span>
                        <span class="abv">{format!("ABV: {}%", beer.abv.unwrap_or(0.0))}</span>
                        {beer.category.clone().map(|category| view! {
                            <span class="beer-category">{category}</span>
                        })}
                    </div>
                </div>

                <div class="beer-modal-info">
                    {beer.description.clone().map(|description| view! {
                        <div class="beer-detail-section">
                            <h3>"Description"</h3>
                            <p>{description}</p>
                        </div>
                    })}

                    <div class="beer-detail-section">
                        <h3>"Brewery"</h3>
                        <p>{beer.brewery.clone()}</p>
                        <p>{format!("{}, {}, {}", beer.address, beer.city, beer.state)}</p>
                        {beer.website.clone().map(|website| view! {
                            <p>
                                <a
                                    href=website
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="brewery-link"
                                >
                                    "Visit Brewery Website"
                                </a>
                            </p>
                        })}
                    </div>
                </div>
            </div>
        </div>
    }
}
