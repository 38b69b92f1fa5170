use super::{EventQuery, EventRecord, parse_feature_collection};
use crate::Result;
use core::time::Duration;
use ohno::{IntoAppError, bail};

const LOG_TARGET: &str = "   catalog";

/// Event search endpoint of the USGS earthquake catalog.
pub const CATALOG_BASE_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query.geojson";

#[derive(Debug, Clone)]
pub struct Provider {
    client: reqwest::Client,
    base_url: String,
}

impl Provider {
    /// Create a provider for the given endpoint, or for [`CATALOG_BASE_URL`] when none is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: Option<&str>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("quakeplot/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .into_app_err("unable to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.unwrap_or(CATALOG_BASE_URL).to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Run an event search and return the matching records in the order the service sent them.
    ///
    /// # Errors
    ///
    /// Returns an error if the service cannot be reached, answers with a non-success
    /// status, or sends a body that is not a valid feature collection.
    pub async fn fetch_events(&self, query: &EventQuery) -> Result<Vec<EventRecord>> {
        log::info!(target: LOG_TARGET, "Querying '{}' for events from {} to {}", self.base_url, query.start, query.end);

        let response = self
            .client
            .get(&self.base_url)
            .query(&query.to_query_pairs())
            .send()
            .await
            .into_app_err_with(|| format!("sending HTTP request to {}", self.base_url))?;

        let status = response.status();
        if !status.is_success() {
            bail!("unexpected HTTP status {status} from {}", self.base_url);
        }

        let text = response.text().await.into_app_err("reading event catalog response body")?;
        log::debug!(target: LOG_TARGET, "Event catalog response length: {} bytes", text.len());

        let records = parse_feature_collection(&text)?;
        log::debug!(target: LOG_TARGET, "Decoded {} event records", records.len());

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let provider = Provider::new(None, Duration::from_secs(5)).unwrap();
        assert_eq!(provider.base_url(), CATALOG_BASE_URL);
    }

    #[test]
    fn test_custom_base_url() {
        let provider = Provider::new(Some("http://localhost:1234/query"), Duration::from_secs(5)).unwrap();
        assert_eq!(provider.base_url(), "http://localhost:1234/query");
    }
}
