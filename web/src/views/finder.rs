use leptos::{prelude::*, task::spawn_local};
use shared_types::BeerRecord;

use crate::{
    components::{
        error::ErrorView, loading::LoadingView, offline_banner::OfflineBanner, BeerCard,
        BeerDetailModal, FilterPanel, SearchBar,
    },
    consent::ConsentSignal,
    server::{fetch_beer_detail, fetch_breweries, fetch_filter_options, search_beers},
    state::{
        apply_detail, build_search_request, FilterSelection, SearchOutcome, SearchState, ViewMode,
    },
    views::map::BreweryMap,
};

#[component]
pub fn FinderPage() -> impl IntoView {
    let ConsentSignal(verified) = expect_context::<ConsentSignal>();

    let query = RwSignal::new(String::new());
    let filters = RwSignal::new(FilterSelection::default());
    let search = RwSignal::new(SearchState::default());
    let view_mode = RwSignal::new(ViewMode::List);
    let selected_beer = RwSignal::new(None::<BeerRecord>);

    // Reference data, fetched once per consent-acceptance session. Until the
    // age gate resolves nothing touches the network.
    let filter_options = Resource::new(
        move || verified.get(),
        move |verified| async move {
            if !verified {
                return None;
            }
            match fetch_filter_options().await {
                Ok(options) => Some(options),
                Err(e) => {
                    leptos::logging::error!("failed to load filter options: {e}");
                    None
                }
            }
        },
    );

    let all_breweries = Resource::new(
        move || verified.get(),
        move |verified| async move {
            if !verified {
                return Vec::new();
            }
            match fetch_breweries().await {
                Ok(breweries) => breweries,
                Err(e) => {
                    leptos::logging::error!("failed to load breweries: {e}");
                    Vec::new()
                }
            }
        },
    );

    let run_search = move || {
        if !verified.get_untracked() {
            return;
        }
        match build_search_request(&query.get_untracked(), &filters.get_untracked()) {
            Err(_) => search.update(|s| s.fail_validation()),
            Ok(request) => {
                let token = search.try_update(|s| s.begin_search()).unwrap_or_default();
                spawn_local(async move {
                    let outcome = match search_beers(request).await {
                        Ok(results) => SearchOutcome::Success(results),
                        Err(e) => {
                            leptos::logging::error!("search failed: {e}");
                            SearchOutcome::TransportError
                        }
                    };
                    search.update(|s| s.apply_outcome(token, outcome));
                });
            }
        }
    };

    // Opens the detail modal with the clicked record right away, then tries
    // to upgrade it to the full detail row. Any failure keeps the summary.
    let select_beer = move |record: BeerRecord| {
        selected_beer.set(Some(record.clone()));
        let Some(id) = record.beer_id else {
            return;
        };
        spawn_local(async move {
            match fetch_beer_detail(id).await {
                Ok(detail) => selected_beer.update(|current| apply_detail(current, id, detail)),
                Err(e) => {
                    leptos::logging::log!("beer detail fetch failed, keeping summary: {e}");
                }
            }
        });
    };

    let close_detail = move || selected_beer.set(None);

    let search_breweries = Signal::derive(move || search.get().brewery_aggregates);

    view! {
        <div class="app">
            <header class="app-header">
                <h1>"Chicago Beer Finder"</h1>
                <p>"Find your favorite beers in the Windy City"</p>
            </header>

            <OfflineBanner/>

            <SearchBar
                query=query
                loading=Signal::derive(move || search.get().loading)
                on_search=run_search
            />

            <Suspense fallback=|| view! {
                <LoadingView message=Some("Loading filters...".to_string())/>
            }>
                {move || filter_options.get().map(|options| match options {
                    Some(options) => view! {
                        <FilterPanel options=options filters=filters/>
                    }.into_any(),
                    None => view! { <></> }.into_any(),
                })}
            </Suspense>

            {move || search.get().error.map(|message| view! {
                <ErrorView message=Some(message)/>
            })}

            <div class="view-tabs">
                <button
                    class="view-tab"
                    class:active=move || view_mode.get() == ViewMode::List
                    on:click=move |_| view_mode.set(ViewMode::List)
                >
                    "List"
                </button>
                <button
                    class="view-tab"
                    class:active=move || view_mode.get() == ViewMode::Map
                    on:click=move |_| view_mode.set(ViewMode::Map)
                >
                    "Map"
                </button>
                <button
                    class="view-tab"
                    class:active=move || view_mode.get() == ViewMode::AllBreweries
                    on:click=move |_| view_mode.set(ViewMode::AllBreweries)
                >
                    "All Breweries"
                </button>
            </div>

            {move || match view_mode.get() {
                ViewMode::List => {
                    let results = search.get().results;
                    let count = results.len();
                    view! {
                        <div class="results">
                            {(count > 0).then(|| view! {
                                <p class="results-count">
                                    {format!(
                                        "Found {} {}",
                                        count,
                                        if count == 1 { "beer" } else { "beers" }
                                    )}
                                </p>
                            })}
                            {results.into_iter().map(|beer| view! {
                                <BeerCard beer=beer on_select=select_beer/>
                            }).collect_view()}
                        </div>
                    }.into_any()
                }
                ViewMode::Map => {
                    if search.with(|s| s.brewery_aggregates.is_empty()) {
                        view! {
                            <div class="map-placeholder">
                                <p>"No breweries to show yet. Search for beers first."</p>
                            </div>
                        }.into_any()
                    } else {
                        view! { <BreweryMap breweries=search_breweries/> }.into_any()
                    }
                }
                ViewMode::AllBreweries => view! {
                    {move || match all_breweries.get() {
                        Some(breweries) => view! {
                            <BreweryMap breweries=breweries/>
                        }.into_any(),
                        None => view! {
                            <LoadingView message=Some("Loading breweries...".to_string())/>
                        }.into_any(),
                    }}
                }.into_any(),
            }}

            {move || selected_beer.get().map(|beer| view! {
                <BeerDetailModal beer=beer on_close=close_detail/>
            })}
        </div>
    }
}
