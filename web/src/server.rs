use leptos::prelude::*;
use leptos::server;
use shared_types::{BeerRecord, BreweryAggregate, FilterOptions};

use crate::state::SearchRequest;

#[server]
pub async fn search_beers(request: SearchRequest) -> Result<Vec<BeerRecord>, ServerFnError> {
    match crate::api::client::search(&request).await {
        Ok(results) => Ok(results),
        Err(e) => {
            tracing::error!("beer search failed: {e}");
            Err(ServerFnError::new(format!("Search API error: {}", e)))
        }
    }
}

#[server]
pub async fn fetch_filter_options() -> Result<FilterOptions, ServerFnError> {
    match crate::api::client::filters().await {
        Ok(options) => Ok(options),
        Err(e) => {
            tracing::error!("filter options fetch failed: {e}");
            Err(ServerFnError::new(format!("Search API error: {}", e)))
        }
    }
}

#[server]
pub async fn fetch_breweries() -> Result<Vec<BreweryAggregate>, ServerFnError> {
    match crate::api::client::breweries().await {
        Ok(breweries) => Ok(breweries),
        Err(e) => {
            tracing::error!("brewery list fetch failed: {e}");
            Err(ServerFnError::new(format!("Search API error: {}", e)))
        }
    }
}

#[server]
pub async fn fetch_beer_detail(beer_id: i64) -> Result<Option<BeerRecord>, ServerFnError> {
    match crate::api::client::beer_detail(beer_id).await {
        Ok(detail) => Ok(detail),
        Err(e) => {
            tracing::error!("beer detail fetch for id {beer_id} failed: {e}");
            Err(ServerFnError::new(format!("Search API error: {}", e)))
        }
    }
}
