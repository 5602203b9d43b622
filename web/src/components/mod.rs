pub mod age_verification;
pub mod beer_card;
pub mod beer_detail;
pub mod error;
pub mod filter_panel;
pub mod loading;
pub mod offline_banner;
pub mod search_bar;

// Re-export commonly used types
pub use beer_card::BeerCard;
pub use beer_detail::BeerDetailModal;
pub use filter_panel::FilterPanel;
pub use search_bar::SearchBar;
