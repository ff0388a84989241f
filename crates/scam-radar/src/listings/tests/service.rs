use super::common::*;
use crate::listings::domain::Listing;
use crate::listings::guard::{ListingGuard, ListingViolation};
use crate::listings::risk::RiskLevel;
use crate::listings::service::ListingServiceError;
use crate::listings::ListingRiskService;

#[test]
fn guard_rejects_contract_violations() {
    let guard = ListingGuard;

    assert_eq!(
        guard.check(&Listing::new("   ")),
        Err(ListingViolation::EmptyTitle)
    );
    assert_eq!(
        guard.check(&Listing::new("Divano").with_price(-10.0)),
        Err(ListingViolation::NegativePrice { found: -10.0 })
    );
    assert_eq!(
        guard.check(&Listing::new("Divano").with_price(f64::NAN)),
        Err(ListingViolation::NonFinitePrice)
    );
    assert_eq!(guard.check(&Listing::new("Divano").with_price(0.0)), Ok(()));
}

#[test]
fn assess_attaches_display_only_when_surfaced() {
    let service = ListingRiskService::default();

    let flagged = service
        .assess(discounted_phone_listing())
        .expect("listing assessed");
    assert_eq!(flagged.assessment.risk_level, RiskLevel::High);
    assert_eq!(
        flagged.display.map(|display| display.label),
        Some("ATTENZIONE TRUFFA")
    );
    assert_eq!(flagged.title, "iPhone 13 come nuovo");

    let clean = service.assess(clean_listing()).expect("listing assessed");
    assert!(clean.display.is_none());
    assert_eq!(clean.listing_id, clean_listing().listing_id);
}

#[test]
fn assess_rejects_negative_prices() {
    let service = ListingRiskService::default();

    let err = service
        .assess(clean_listing().with_price(-1.0))
        .expect_err("negative price rejected");

    assert!(matches!(
        err,
        ListingServiceError::InvalidListing(ListingViolation::NegativePrice { .. })
    ));
    assert_eq!(err.status_code(), axum::http::StatusCode::UNPROCESSABLE_ENTITY);
}

#[test]
fn batch_preserves_input_order() {
    let service = service_with_batch_limit(5);

    let results = service
        .assess_batch(vec![clean_listing(), discounted_phone_listing()])
        .expect("batch assessed");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].assessment.score, 0);
    assert_eq!(results[1].assessment.score, 73);
}

#[test]
fn batch_respects_configured_limit() {
    let service = service_with_batch_limit(2);

    let err = service
        .assess_batch(vec![clean_listing(), clean_listing(), clean_listing()])
        .expect_err("batch too large");

    match err {
        ListingServiceError::BatchTooLarge { max, found } => {
            assert_eq!((max, found), (2, 3));
        }
        other => panic!("expected batch limit error, got {other:?}"),
    }
}

#[test]
fn batch_reports_the_offending_position() {
    let service = service_with_batch_limit(5);

    let err = service
        .assess_batch(vec![clean_listing(), Listing::new("")])
        .expect_err("invalid entry");

    assert!(matches!(
        err,
        ListingServiceError::InvalidBatchEntry {
            index: 1,
            source: ListingViolation::EmptyTitle
        }
    ));
    assert!(err.to_string().contains("position 1"));
}

#[test]
fn draft_report_enriches_with_assessment() {
    let service = ListingRiskService::default();
    let listing = discounted_phone_listing();

    let draft = service
        .draft_report(report_request(), Some(&listing))
        .expect("draft built");

    assert_eq!(draft.assessment.as_ref().map(|a| a.score), Some(73));
    let info = draft.report.additional_info.expect("context attached");
    assert!(info.starts_with("Automatic score: 73/100. Reasons: "));
}

#[test]
fn draft_report_without_listing_keeps_user_input() {
    let service = ListingRiskService::default();

    let draft = service
        .draft_report(report_request(), None)
        .expect("draft built");

    assert!(draft.assessment.is_none());
    assert!(draft.report.additional_info.is_none());
}
