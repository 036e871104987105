mod fetcher;
mod traits;

pub use fetcher::ScraperImpl;
pub use traits::Scraper;
