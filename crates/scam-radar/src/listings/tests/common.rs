use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::config::AssessmentConfig;
use crate::listings::domain::Listing;
use crate::listings::report::ScamReportRequest;
use crate::listings::risk::RiskEngine;
use crate::listings::{listing_router, ListingRiskService};

pub(super) const CLEAN_DESCRIPTION: &str =
    "Bicicletta da citta in buone condizioni, freni e cambio revisionati da poco.";

pub(super) fn engine() -> RiskEngine {
    RiskEngine::new()
}

pub(super) fn ordinary_photos() -> Vec<String> {
    vec![
        "https://images.sbito.it/api/v1/img/bici-1.jpg".to_string(),
        "https://images.sbito.it/api/v1/img/bici-2.jpg".to_string(),
        "https://images.sbito.it/api/v1/img/bici-3.jpg".to_string(),
    ]
}

/// Listing on which no evaluator fires.
pub(super) fn clean_listing() -> Listing {
    Listing::new("Bicicletta usata")
        .with_price(45.0)
        .with_description(CLEAN_DESCRIPTION)
        .with_photos(ordinary_photos())
        .with_location("Torino")
        .with_seller("Marco Rossi", Some("privato"))
        .with_link("https://www.subito.it/biciclette/bicicletta-usata-torino-5551234.htm")
        .with_id("5551234")
}

/// Bare discounted phone listing: price, title, description, photos and location all fire.
pub(super) fn discounted_phone_listing() -> Listing {
    Listing::new("iPhone 13 come nuovo")
        .with_price(90.0)
        .with_id("8881234")
        .with_link("https://www.subito.it/telefonia/iphone-13-roma-8881234.htm")
}

pub(super) fn report_request() -> ScamReportRequest {
    ScamReportRequest {
        listing_id: "8881234".to_string(),
        listing_url: "https://www.subito.it/telefonia/iphone-13-roma-8881234.htm".to_string(),
        reason: "Il venditore chiede pagamento anticipato su carta prepagata".to_string(),
        reporter_email: Some("user@example.com".to_string()),
        additional_info: None,
    }
}

pub(super) fn service_with_batch_limit(max_batch_size: usize) -> ListingRiskService {
    ListingRiskService::new(AssessmentConfig { max_batch_size })
}

pub(super) fn router_with_batch_limit(max_batch_size: usize) -> axum::Router {
    listing_router(Arc::new(service_with_batch_limit(max_batch_size)))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
