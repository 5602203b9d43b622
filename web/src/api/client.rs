use std::sync::OnceLock;
use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use shared_types::{BeerRecord, BreweryAggregate, FilterOptions};
use thiserror::Error;

use crate::state::SearchRequest;

const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Requests that hang longer than this are aborted and surfaced as a
/// transport failure.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request to the beer API failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("beer API returned status {0}")]
    Status(u16),
}

static HTTP: OnceLock<Client> = OnceLock::new();

fn http() -> &'static Client {
    HTTP.get_or_init(|| {
        Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to construct the beer API HTTP client")
    })
}

pub fn api_base() -> String {
    std::env::var("BEER_API_URL").unwrap_or_else(|_| DEFAULT_API_BASE.to_string())
}

async fn send_json<T>(request: reqwest::RequestBuilder) -> Result<T, ApiError>
where
    T: serde::de::DeserializeOwned,
{
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        tracing::warn!("beer API rejected the request with status {status}");
        return Err(ApiError::Status(status.as_u16()));
    }
    Ok(response.json::<T>().await?)
}

pub async fn search(request: &SearchRequest) -> Result<Vec<BeerRecord>, ApiError> {
    #[derive(Deserialize, Default)]
    struct SearchResponse {
        #[serde(default)]
        results: Vec<BeerRecord>,
    }

    let params = request.params();
    tracing::debug!("searching beers with {} parameter(s)", params.len());
    let response: SearchResponse = send_json(
        http()
            .get(format!("{}/api/search", api_base()))
            .query(&params),
    )
    .await?;
    Ok(response.results)
}

pub async fn filters() -> Result<FilterOptions, ApiError> {
    send_json(http().get(format!("{}/api/filters", api_base()))).await
}

pub async fn breweries() -> Result<Vec<BreweryAggregate>, ApiError> {
    #[derive(Deserialize, Default)]
    struct BreweriesResponse {
        #[serde(default)]
        breweries: Vec<BreweryAggregate>,
    }

    let response: BreweriesResponse =
        send_json(http().get(format!("{}/api/breweries", api_base()))).await?;
    Ok(response.breweries)
}

/// `/api/beer/{id}` answers with an array for frontend compatibility; only
/// the first element matters.
pub async fn beer_detail(beer_id: i64) -> Result<Option<BeerRecord>, ApiError> {
    let records: Vec<BeerRecord> =
        send_json(http().get(format!("{}/api/beer/{}", api_base(), beer_id))).await?;
    Ok(records.into_iter().next())
}
