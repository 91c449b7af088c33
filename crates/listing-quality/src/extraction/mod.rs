//! Listing page fetch and heuristic field extraction.

mod html;
mod images;
mod json_ld;

pub use html::{extract_from_html, ExtractedPage};

use crate::config::ExtractionConfig;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;
use url::Url;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
    (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Geen URL opgegeven.")]
    EmptyUrl,
    #[error("Ongeldige URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("Pagina ophalen mislukt: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Pagina ophalen mislukt: HTTP {status} voor {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

/// Trim the input and default to https when no scheme is given.
pub fn normalize_url(raw: &str) -> Result<Url, ExtractionError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ExtractionError::EmptyUrl);
    }
    let candidate = if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    Url::parse(&candidate).map_err(|source| ExtractionError::InvalidUrl {
        url: trimmed.to_string(),
        source,
    })
}

/// Downloads listing pages with a desktop browser identity.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &ExtractionConfig) -> Result<Self, ExtractionError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self { client })
    }

    /// Shared client for follow-up requests such as image downloads.
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub async fn fetch(&self, url: &Url) -> Result<String, ExtractionError> {
        debug!(%url, "fetching listing page");
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::Status {
                url: url.to_string(),
                status,
            });
        }
        let body = response.text().await?;
        debug!(%url, bytes = body.len(), "listing page fetched");
        Ok(body)
    }
}
