use serde::{Deserialize, Serialize};

/// A coordinate pair as returned by the search API.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// One flat beer row from `/api/search` (and `/api/beer/{id}`).
///
/// The API joins beers against breweries and categories, so most fields are
/// present in practice, but none of the optional ones are guaranteed.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct BeerRecord {
    pub beer_id: Option<i64>,
    pub beer: String,
    #[serde(rename = "type")]
    pub beer_type: String,
    pub abv: Option<f64>,
    pub description: Option<String>,
    pub brewery: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub website: Option<String>,
    pub coordinates: Option<LatLng>,
    pub category: Option<String>,
    pub parent_category: Option<String>,
}

/// A beer as listed under a brewery in `/api/breweries`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct BreweryBeer {
    pub name: String,
    #[serde(rename = "type")]
    pub beer_type: String,
    pub abv: Option<f64>,
    pub description: Option<String>,
    pub category: Option<String>,
}

/// Brewery-grouped projection used by the map views.
///
/// Either fetched wholesale from `/api/breweries` or derived client-side by
/// grouping search results on the (name, address) key.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct BreweryAggregate {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub website: Option<String>,
    pub description: Option<String>,
    pub lat: Option<f64>,
    pub lng: Option<f64>,
    pub beers: Vec<BreweryBeer>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct AbvRange {
    pub min: f64,
    pub max: f64,
}

impl Default for AbvRange {
    fn default() -> Self {
        AbvRange { min: 0.0, max: 15.0 }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Subcategory {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub subcategories: Vec<Subcategory>,
}

/// Reference data behind the filter controls, fetched once per session
/// from `/api/filters`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct FilterOptions {
    pub types: Vec<String>,
    pub abv_range: AbvRange,
    pub breweries: Vec<String>,
    pub categories: Vec<Category>,
}
