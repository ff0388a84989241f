use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::Listing;
use super::report::ScamReportRequest;
use super::service::{ListingRiskService, ListingServiceError};

/// Body accepted by the report drafting endpoint.
#[derive(Debug, Deserialize)]
pub struct ReportDraftRequest {
    pub report: ScamReportRequest,
    #[serde(default)]
    pub listing: Option<Listing>,
}

/// Router builder exposing listing scoring and report drafting endpoints.
pub fn listing_router(service: Arc<ListingRiskService>) -> Router {
    Router::new()
        .route("/api/v1/listings/assess", post(assess_handler))
        .route("/api/v1/listings/assess/batch", post(assess_batch_handler))
        .route("/api/v1/reports/draft", post(draft_report_handler))
        .with_state(service)
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<ListingRiskService>>,
    Json(listing): Json<Listing>,
) -> Response {
    match service.assess(listing) {
        Ok(assessed) => (StatusCode::OK, Json(assessed)).into_response(),
        Err(err) => error_response(err),
    }
}

pub(crate) async fn assess_batch_handler(
    State(service): State<Arc<ListingRiskService>>,
    Json(listings): Json<Vec<Listing>>,
) -> Response {
    match service.assess_batch(listings) {
        Ok(assessed) => {
            let payload = json!({
                "total": assessed.len(),
                "results": assessed,
            });
            (StatusCode::OK, Json(payload)).into_response()
        }
        Err(err) => error_response(err),
    }
}

pub(crate) async fn draft_report_handler(
    State(service): State<Arc<ListingRiskService>>,
    Json(request): Json<ReportDraftRequest>,
) -> Response {
    let ReportDraftRequest { report, listing } = request;
    match service.draft_report(report, listing.as_ref()) {
        Ok(draft) => (StatusCode::OK, Json(draft)).into_response(),
        Err(err) => error_response(err),
    }
}

fn error_response(err: ListingServiceError) -> Response {
    let payload = json!({
        "error": err.to_string(),
    });
    (err.status_code(), Json(payload)).into_response()
}
