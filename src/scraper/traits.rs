use crate::model::ScraperError;

pub trait Scraper {
    /// Performs a single GET and returns the body when the status is exactly 200.
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ScraperError>;
}
