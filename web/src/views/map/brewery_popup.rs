use leptos::prelude::*;
use shared_types::BreweryAggregate;
use thaw::{Label, LabelSize};

#[component]
pub fn BreweryPopup(brewery: BreweryAggregate) -> impl IntoView {
    view! {
        <div style="margin: 0.5rem 0; display: flex; flex-direction: column; gap: 0.5rem;">
            <Label size=LabelSize::Large>{brewery.name.clone()}</Label>
            <p style="margin: 0; color: #6b7280; font-size: 0.875rem;">
                {brewery.address.clone()}
            </p>
            <p style="margin: 0; color: #6b7280; font-size: 0.875rem;">
                {format!("{}, {}", brewery.city, brewery.state)}
            </p>

            {brewery.website.clone().map(|website| view! {
                <a href=website target="_blank"
                   style="background: #667eea; color: white; padding: 0.5rem 1rem; border-radius: 6px; text-decoration: none; text-align: center; font-weight: 600;">
                    "Visit Website"
                </a>
            })}

            {(!brewery.beers.is_empty()).then(|| view! {
                <div class="popup-beer-list">
                    <h4 style="margin: 0.25rem 0;">"Available Beers:"</h4>
                    <ul style="margin: 0; padding-left: 1rem;">
                        {brewery.beers.iter().map(|beer| view! {
                            <li>
                                {format!(
                                    "{} - {} ({}%)",
                                    beer.name,
                                    beer.beer_type,
                                    beer.abv.unwrap_or(0.0)
                                )}
                            </li>
                        }).collect_view()}
                    </ul>
                </div>
            })}
        </div>
    }
}
