//! Fetch, extract, analyse and score one listing page.

use crate::config::{ExtractionConfig, VisionConfig};
use crate::extraction::{extract_from_html, normalize_url, ExtractionError, PageFetcher};
use crate::lqm::{LqmEngine, ListingData};
use crate::report::ListingReport;
use crate::vision::VisionAnalyzer;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Service facade behind the analyze endpoint and CLI command.
#[derive(Debug, Clone)]
pub struct ListingAnalyzer {
    fetcher: PageFetcher,
    vision: VisionAnalyzer,
    engine: LqmEngine,
}

impl ListingAnalyzer {
    pub fn new(extraction: &ExtractionConfig, vision: VisionConfig) -> Result<Self, AnalysisError> {
        let fetcher = PageFetcher::new(extraction)?;
        let vision = VisionAnalyzer::new(vision, fetcher.client().clone());
        Ok(Self {
            fetcher,
            vision,
            engine: LqmEngine::standard(),
        })
    }

    pub fn engine(&self) -> &LqmEngine {
        &self.engine
    }

    pub fn vision_enabled(&self) -> bool {
        self.vision.is_enabled()
    }

    pub async fn analyze(&self, raw_url: &str) -> Result<ListingReport, AnalysisError> {
        let url = normalize_url(raw_url)?;
        let html = self.fetcher.fetch(&url).await?;
        let mut page = extract_from_html(&html, &url);

        if let Some(photo) = page.first_photo_url.as_ref().filter(|_| self.vision.is_enabled()) {
            let verdicts = self.vision.analyze(photo).await;
            verdicts.apply_to(&mut page.data);
        }

        let report = self.score(Some(raw_url.trim().to_string()), page.data);
        info!(
            %url,
            total_score = report.total_lqm_score,
            items = report.items.len(),
            "listing analysed"
        );
        Ok(report)
    }

    /// Score an already extracted record without network access.
    pub fn score(&self, url: Option<String>, data: ListingData) -> ListingReport {
        let items = self.engine.score_all(&data);
        debug!(items = items.len(), "listing scored");
        ListingReport::build(url, data, items)
    }
}
