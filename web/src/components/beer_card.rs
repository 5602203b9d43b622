use leptos::prelude::*;
use shared_types::BeerRecord;
use web_sys::MouseEvent;

#[component]
pub fn BeerCard<F>(beer: BeerRecord, on_select: F) -> impl IntoView
where
    F: Fn(BeerRecord) + 'static + Copy + Send + Sync,
{
    let record = beer.clone();

    view! {
        <div class="beer-card" on:click=move |_| on_select(record.clone())>
            <h3>{beer.beer.clone()}</h3>
            <div class="beer-details">
                <p><strong>"Type: "</strong>{beer.beer_type.clone()}</p>
                <p><strong>"ABV: "</strong>{format!("{}%", beer.abv.unwrap_or(0.0))}</p>
                {beer.description.clone().map(|description| view! {
                    <p><strong>"Description: "</strong>{description}</p>
                })}
            </div>
            <div class="location-details">
                <h4>{format!("Available at: {}", beer.brewery)}</h4>
                <p>{beer.address.clone()}</p>
                <p>{format!("{}, {}", beer.city, beer.state)}</p>
                {beer.website.clone().map(|website| view! {
                    <a
                        href=website
                        target="_blank"
                        rel="noopener noreferrer"
                        on:click=move |ev: MouseEvent| ev.stop_propagation()
                    >
                        "Visit Website"
                    </a>
                })}
            </div>
        </div>
    }
}
