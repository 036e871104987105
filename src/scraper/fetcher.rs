use crate::model::ScraperError;
use crate::scraper::Scraper;

use reqwest::StatusCode;
use reqwest::blocking::Client;

pub struct ScraperImpl {
    client: Client,
}

impl ScraperImpl {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ScraperError::Client(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Scraper for ScraperImpl {
    fn fetch(&self, url: &str) -> Result<Vec<u8>, ScraperError> {
        let response = self.client.get(url)
            .send()
            .map_err(|e| ScraperError::Http(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ScraperError::InvalidResponse(status.as_u16()));
        }

        response
            .bytes()
            .map(|body| body.to_vec())
            .map_err(|e| ScraperError::Body(e.to_string()))
    }
}
