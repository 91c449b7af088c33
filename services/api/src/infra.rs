use listing_quality::ListingAnalyzer;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) analyzer: Arc<ListingAnalyzer>,
}

#[cfg(test)]
pub(crate) fn test_state(ready: bool) -> AppState {
    use listing_quality::config::{ExtractionConfig, VisionConfig};
    use metrics_exporter_prometheus::PrometheusBuilder;

    let analyzer = ListingAnalyzer::new(&ExtractionConfig::default(), VisionConfig::disabled())
        .expect("http client builds");
    AppState {
        readiness: Arc::new(AtomicBool::new(ready)),
        metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        analyzer: Arc::new(analyzer),
    }
}
