use serde::{Deserialize, Serialize};
use shared_types::{BeerRecord, BreweryAggregate, BreweryBeer};
use thiserror::Error;

pub const VALIDATION_MESSAGE: &str = "Please enter a search term or select filters";
pub const EMPTY_RESULT_MESSAGE: &str = "No beers found matching your criteria";
pub const TRANSPORT_ERROR_MESSAGE: &str = "An error occurred while searching. Please try again.";

/// Trims `value` and drops it entirely when nothing is left.
pub fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// The user's current filter picks. Absent fields mean "no constraint".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    pub beer_type: Option<String>,
    pub min_abv: Option<f64>,
    pub max_abv: Option<f64>,
    pub brewery: Option<String>,
    pub category_id: Option<String>,
}

impl FilterSelection {
    pub fn is_unconstrained(&self) -> bool {
        self.beer_type.as_deref().and_then(non_empty).is_none()
            && self.min_abv.is_none()
            && self.max_abv.is_none()
            && self.brewery.as_deref().and_then(non_empty).is_none()
            && self.category_id.as_deref().and_then(non_empty).is_none()
    }

    pub fn clear(&mut self) {
        *self = FilterSelection::default();
    }
}

/// A validated search request, ready to be turned into query parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: Option<String>,
    pub beer_type: Option<String>,
    pub min_abv: Option<f64>,
    pub max_abv: Option<f64>,
    pub brewery: Option<String>,
    pub category_id: Option<String>,
}

impl SearchRequest {
    /// Query-string pairs for `/api/search`. Unset fields are omitted rather
    /// than sent as empty strings.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(q) = &self.query {
            params.push(("q", q.clone()));
        }
        if let Some(beer_type) = &self.beer_type {
            params.push(("type", beer_type.clone()));
        }
        if let Some(min) = self.min_abv {
            params.push(("min_abv", min.to_string()));
        }
        if let Some(max) = self.max_abv {
            params.push(("max_abv", max.to_string()));
        }
        if let Some(brewery) = &self.brewery {
            params.push(("brewery", brewery.clone()));
        }
        if let Some(category_id) = &self.category_id {
            params.push(("category_id", category_id.clone()));
        }
        params
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no search criteria")]
pub struct NoSearchCriteria;

/// Builds the request from the current query text and filters, rejecting the
/// combination of an empty trimmed query and fully unconstrained filters
/// before any network traffic happens.
pub fn build_search_request(
    query: &str,
    filters: &FilterSelection,
) -> Result<SearchRequest, NoSearchCriteria> {
    let query = non_empty(query);
    if query.is_none() && filters.is_unconstrained() {
        return Err(NoSearchCriteria);
    }
    Ok(SearchRequest {
        query,
        beer_type: filters.beer_type.as_deref().and_then(non_empty),
        min_abv: filters.min_abv,
        max_abv: filters.max_abv,
        brewery: filters.brewery.as_deref().and_then(non_empty),
        category_id: filters.category_id.as_deref().and_then(non_empty),
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    List,
    Map,
    AllBreweries,
}

/// Terminal result of one search request.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    Success(Vec<BeerRecord>),
    TransportError,
}

/// Search lifecycle state. Mutated only through the methods below so the
/// staleness guard cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchState {
    pub loading: bool,
    pub error: Option<String>,
    pub results: Vec<BeerRecord>,
    pub brewery_aggregates: Vec<BreweryAggregate>,
    generation: u64,
}

impl SearchState {
    /// Marks a new in-flight request and returns its staleness token.
    pub fn begin_search(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.error = None;
        self.generation
    }

    pub fn fail_validation(&mut self) {
        self.loading = false;
        self.error = Some(VALIDATION_MESSAGE.to_string());
    }

    /// Applies a completed request. A token issued by anything but the most
    /// recent `begin_search` call is stale and its outcome is dropped, so a
    /// slow earlier response can never clobber a newer one.
    pub fn apply_outcome(&mut self, token: u64, outcome: SearchOutcome) {
        if token != self.generation {
            return;
        }
        match outcome {
            SearchOutcome::Success(results) if !results.is_empty() => {
                self.brewery_aggregates = group_by_brewery(&results);
                self.results = results;
                self.error = None;
            }
            SearchOutcome::Success(_) => {
                self.results = Vec::new();
                self.brewery_aggregates = Vec::new();
                self.error = Some(EMPTY_RESULT_MESSAGE.to_string());
            }
            SearchOutcome::TransportError => {
                self.results = Vec::new();
                self.brewery_aggregates = Vec::new();
                self.error = Some(TRANSPORT_ERROR_MESSAGE.to_string());
            }
        }
        self.loading = false;
    }
}

/// Swaps the open detail record for its richer version, but only while the
/// modal still shows the beer the fetch was issued for. A missing detail row
/// leaves the summary record in place.
pub fn apply_detail(
    selected: &mut Option<BeerRecord>,
    requested_id: i64,
    detail: Option<BeerRecord>,
) {
    let Some(detail) = detail else {
        return;
    };
    if selected.as_ref().and_then(|b| b.beer_id) == Some(requested_id) {
        *selected = Some(detail);
    }
}

/// Groups flat search results into one aggregate per (brewery name, address)
/// pair, preserving first-appearance order and the API's beer order within
/// each brewery.
pub fn group_by_brewery(records: &[BeerRecord]) -> Vec<BreweryAggregate> {
    let mut aggregates: Vec<BreweryAggregate> = Vec::new();
    for record in records {
        let beer = BreweryBeer {
            name: record.beer.clone(),
            beer_type: record.beer_type.clone(),
            abv: record.abv,
            description: record.description.clone(),
            category: record.category.clone(),
        };
        if let Some(existing) = aggregates
            .iter_mut()
            .find(|a| a.name == record.brewery && a.address == record.address)
        {
            if existing.lat.is_none() {
                existing.lat = record.coordinates.map(|c| c.lat);
                existing.lng = record.coordinates.map(|c| c.lng);
            }
            existing.beers.push(beer);
        } else {
            aggregates.push(BreweryAggregate {
                name: record.brewery.clone(),
                address: record.address.clone(),
                city: record.city.clone(),
                state: record.state.clone(),
                website: record.website.clone(),
                description: None,
                lat: record.coordinates.map(|c| c.lat),
                lng: record.coordinates.map(|c| c.lng),
                beers: vec![beer],
            });
        }
    }
    aggregates
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::LatLng;

    fn record(beer: &str, brewery: &str, address: &str) -> BeerRecord {
        BeerRecord {
            beer: beer.to_string(),
            beer_type: "IPA".to_string(),
            abv: Some(6.5),
            brewery: brewery.to_string(),
            address: address.to_string(),
            city: "Chicago".to_string(),
            state: "IL".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn empty_query_and_filters_is_rejected() {
        let filters = FilterSelection::default();
        assert_eq!(build_search_request("", &filters), Err(NoSearchCriteria));
        assert_eq!(build_search_request("   ", &filters), Err(NoSearchCriteria));
    }

    #[test]
    fn whitespace_only_filters_count_as_unset() {
        let filters = FilterSelection {
            beer_type: Some("  ".to_string()),
            brewery: Some(String::new()),
            ..Default::default()
        };
        assert!(filters.is_unconstrained());
        assert_eq!(build_search_request("", &filters), Err(NoSearchCriteria));
    }

    #[test]
    fn filters_alone_are_sufficient() {
        let filters = FilterSelection {
            min_abv: Some(5.0),
            ..Default::default()
        };
        let request = build_search_request("", &filters).unwrap();
        assert!(request.query.is_none());
        assert_eq!(request.params(), vec![("min_abv", "5".to_string())]);
    }

    #[test]
    fn query_is_trimmed_and_empty_fields_are_omitted() {
        let filters = FilterSelection {
            beer_type: Some("Stout".to_string()),
            category_id: Some(" ".to_string()),
            ..Default::default()
        };
        let request = build_search_request("  IPA  ", &filters).unwrap();
        assert_eq!(
            request.params(),
            vec![("q", "IPA".to_string()), ("type", "Stout".to_string())]
        );
    }

    #[test]
    fn clear_filters_is_idempotent() {
        let mut filters = FilterSelection {
            beer_type: Some("Lager".to_string()),
            min_abv: Some(4.0),
            max_abv: Some(8.0),
            brewery: Some("Half Acre".to_string()),
            category_id: Some("3".to_string()),
        };
        filters.clear();
        let once = filters.clone();
        filters.clear();
        assert_eq!(filters, once);
        assert!(filters.is_unconstrained());
    }

    #[test]
    fn grouping_merges_on_name_and_address() {
        let records = vec![
            record("Daisy Cutter", "Half Acre", "4257 N Lincoln Ave"),
            record("Anti-Hero", "Revolution", "2323 N Milwaukee Ave"),
            record("Pony", "Half Acre", "4257 N Lincoln Ave"),
        ];
        let aggregates = group_by_brewery(&records);
        assert_eq!(aggregates.len(), 2);
        assert_eq!(aggregates[0].name, "Half Acre");
        assert_eq!(aggregates[0].beers.len(), 2);
        assert_eq!(aggregates[0].beers[0].name, "Daisy Cutter");
        assert_eq!(aggregates[0].beers[1].name, "Pony");
        assert_eq!(aggregates[1].beers.len(), 1);
    }

    #[test]
    fn same_name_different_address_stays_separate() {
        let records = vec![
            record("Daisy Cutter", "Half Acre", "4257 N Lincoln Ave"),
            record("Beer Hates Astronauts", "Half Acre", "2050 W Balmoral Ave"),
        ];
        let aggregates = group_by_brewery(&records);
        assert_eq!(aggregates.len(), 2);
    }

    #[test]
    fn grouping_invariants_hold() {
        let records = vec![
            record("A", "X", "1"),
            record("B", "Y", "2"),
            record("C", "X", "1"),
            record("D", "Z", "3"),
        ];
        let aggregates = group_by_brewery(&records);
        assert!(aggregates.len() <= records.len());
        for r in &records {
            let owners: Vec<_> = aggregates
                .iter()
                .filter(|a| a.name == r.brewery && a.address == r.address)
                .collect();
            assert_eq!(owners.len(), 1);
            assert!(owners[0].beers.iter().any(|b| b.name == r.beer));
        }
    }

    #[test]
    fn grouping_backfills_coordinates_from_later_records() {
        let mut first = record("A", "X", "1");
        first.coordinates = None;
        let mut second = record("B", "X", "1");
        second.coordinates = Some(LatLng { lat: 41.9, lng: -87.7 });
        let aggregates = group_by_brewery(&[first, second]);
        assert_eq!(aggregates.len(), 1);
        assert_eq!(aggregates[0].lat, Some(41.9));
    }

    #[test]
    fn two_records_one_brewery_scenario() {
        let records = vec![
            record("Anti-Hero", "Revolution", "2323 N Milwaukee Ave"),
            record("Fist City", "Revolution", "2323 N Milwaukee Ave"),
        ];
        let mut state = SearchState::default();
        let token = state.begin_search();
        state.apply_outcome(token, SearchOutcome::Success(records));
        assert_eq!(state.results.len(), 2);
        assert_eq!(state.brewery_aggregates.len(), 1);
        assert_eq!(state.brewery_aggregates[0].beers.len(), 2);
        assert!(!state.loading);
        assert!(state.error.is_none());
    }

    #[test]
    fn begin_search_sets_loading_and_clears_error() {
        let mut state = SearchState::default();
        state.fail_validation();
        assert_eq!(state.error.as_deref(), Some(VALIDATION_MESSAGE));
        let token = state.begin_search();
        assert!(state.loading);
        assert!(state.error.is_none());
        assert!(token > 0);
    }

    #[test]
    fn empty_result_sets_message_and_clears_lists() {
        let mut state = SearchState::default();
        let token = state.begin_search();
        state.apply_outcome(token, SearchOutcome::Success(vec![record("A", "X", "1")]));
        let token = state.begin_search();
        state.apply_outcome(token, SearchOutcome::Success(Vec::new()));
        assert!(state.results.is_empty());
        assert!(state.brewery_aggregates.is_empty());
        assert_eq!(state.error.as_deref(), Some(EMPTY_RESULT_MESSAGE));
        assert!(!state.loading);
    }

    #[test]
    fn transport_error_sets_generic_message() {
        let mut state = SearchState::default();
        let token = state.begin_search();
        state.apply_outcome(token, SearchOutcome::TransportError);
        assert!(state.results.is_empty());
        assert_eq!(state.error.as_deref(), Some(TRANSPORT_ERROR_MESSAGE));
        assert!(!state.loading);
    }

    #[test]
    fn stale_response_resolving_last_is_dropped() {
        let mut state = SearchState::default();
        let first = state.begin_search();
        let second = state.begin_search();
        // The newer request resolves first, then the older one limps in.
        state.apply_outcome(second, SearchOutcome::Success(vec![record("New", "X", "1")]));
        state.apply_outcome(first, SearchOutcome::Success(vec![record("Old", "Y", "2")]));
        assert_eq!(state.results.len(), 1);
        assert_eq!(state.results[0].beer, "New");
        assert!(!state.loading);
    }

    #[test]
    fn stale_response_resolving_first_is_dropped() {
        let mut state = SearchState::default();
        let first = state.begin_search();
        let second = state.begin_search();
        state.apply_outcome(first, SearchOutcome::Success(vec![record("Old", "Y", "2")]));
        // The stale application must not have touched anything, including loading.
        assert!(state.loading);
        assert!(state.results.is_empty());
        state.apply_outcome(second, SearchOutcome::Success(vec![record("New", "X", "1")]));
        assert_eq!(state.results[0].beer, "New");
        assert!(!state.loading);
    }

    #[test]
    fn stale_transport_error_does_not_clobber_results() {
        let mut state = SearchState::default();
        let first = state.begin_search();
        let second = state.begin_search();
        state.apply_outcome(second, SearchOutcome::Success(vec![record("New", "X", "1")]));
        state.apply_outcome(first, SearchOutcome::TransportError);
        assert_eq!(state.results.len(), 1);
        assert!(state.error.is_none());
    }

    #[test]
    fn detail_replaces_matching_selection() {
        let mut summary = record("Anti-Hero", "Revolution", "2323 N Milwaukee Ave");
        summary.beer_id = Some(42);
        let mut detail = summary.clone();
        detail.description = Some("Iconic Chicago IPA".to_string());
        let mut selected = Some(summary);
        apply_detail(&mut selected, 42, Some(detail));
        assert_eq!(
            selected.unwrap().description.as_deref(),
            Some("Iconic Chicago IPA")
        );
    }

    #[test]
    fn empty_detail_keeps_the_summary_record() {
        let mut summary = record("Anti-Hero", "Revolution", "2323 N Milwaukee Ave");
        summary.beer_id = Some(42);
        let mut selected = Some(summary.clone());
        apply_detail(&mut selected, 42, None);
        assert_eq!(selected, Some(summary));
    }

    #[test]
    fn detail_for_a_different_beer_is_ignored() {
        let mut wanted = record("Anti-Hero", "Revolution", "2323 N Milwaukee Ave");
        wanted.beer_id = Some(42);
        let mut open = record("Fist City", "Revolution", "2323 N Milwaukee Ave");
        open.beer_id = Some(7);
        let mut selected = Some(open.clone());
        // The slow response for beer 42 lands after the user opened beer 7.
        apply_detail(&mut selected, 42, Some(wanted));
        assert_eq!(selected, Some(open));
    }
}
