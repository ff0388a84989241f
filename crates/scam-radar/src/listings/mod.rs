//! Marketplace listing risk scoring.
//!
//! Listings flow one way: the guard rejects contract violations, the risk
//! engine runs each facet evaluator and folds their contributions into an
//! `Assessment`, and the service/router expose the result together with the
//! display tier and report drafting helpers used by the frontend.

pub mod domain;
pub mod guard;
pub mod import;
pub mod report;
pub mod risk;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{Listing, ListingId};
pub use guard::{ListingGuard, ListingViolation};
pub use import::{ListingFormat, ListingImportError, ListingImporter};
pub use report::{ReportContext, ReportViolation, ScamReport, ScamReportRequest};
pub use risk::{Assessment, RiskDisplay, RiskEngine, RiskLevel, RuleOutcome};
pub use router::{listing_router, ReportDraftRequest};
pub use service::{AssessedListing, ListingRiskService, ListingServiceError, ReportDraft};
