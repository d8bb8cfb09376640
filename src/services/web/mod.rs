//! Fetching search-result pages and pulling magnet links out of them.

pub mod pages;
pub mod scraper;

pub use pages::PageUrl;
pub use scraper::{HttpMagnetSource, MagnetSource};
