pub mod brewery_map;
pub mod brewery_popup;

pub use brewery_map::BreweryMap;
