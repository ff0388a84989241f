use metrics_exporter_prometheus::PrometheusHandle;
use scam_radar::listings::ListingFormat;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn parse_format(raw: &str) -> Result<ListingFormat, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "json" => Ok(ListingFormat::Json),
        "csv" => Ok(ListingFormat::Csv),
        other => Err(format!("unsupported listing format '{other}' (expected json or csv)")),
    }
}
