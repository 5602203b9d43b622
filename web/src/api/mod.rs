#[cfg(feature = "ssr")]
pub mod client;
