use std::sync::Arc;

use axum::http::StatusCode;
use serde::Serialize;
use tracing::{info, warn};

use super::domain::{Listing, ListingId};
use super::guard::{ListingGuard, ListingViolation};
use super::report::{ReportViolation, ScamReport, ScamReportRequest};
use super::risk::{Assessment, RiskDisplay, RiskEngine};
use crate::config::AssessmentConfig;

/// Scored listing as returned to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AssessedListing {
    pub listing_id: Option<ListingId>,
    pub link: Option<String>,
    pub title: String,
    pub assessment: Assessment,
    /// Only present when the tier should be surfaced to the user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<RiskDisplay>,
}

impl AssessedListing {
    fn new(listing: Listing, assessment: Assessment) -> Self {
        let display = assessment
            .risk_level
            .requires_attention()
            .then(|| *assessment.risk_level.display());

        Self {
            listing_id: listing.listing_id,
            link: listing.link,
            title: listing.title,
            assessment,
            display,
        }
    }
}

/// Validated report plus the assessment it was enriched with, if any.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportDraft {
    pub report: ScamReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,
}

/// Facade composing the boundary guard with the risk engine.
pub struct ListingRiskService {
    guard: ListingGuard,
    engine: Arc<RiskEngine>,
    config: AssessmentConfig,
}

impl Default for ListingRiskService {
    fn default() -> Self {
        Self::new(AssessmentConfig::default())
    }
}

impl ListingRiskService {
    pub fn new(config: AssessmentConfig) -> Self {
        Self::with_engine(Arc::new(RiskEngine::new()), config)
    }

    pub fn with_engine(engine: Arc<RiskEngine>, config: AssessmentConfig) -> Self {
        Self {
            guard: ListingGuard,
            engine,
            config,
        }
    }

    pub fn config(&self) -> AssessmentConfig {
        self.config
    }

    /// Validate and score a single listing.
    pub fn assess(&self, listing: Listing) -> Result<AssessedListing, ListingServiceError> {
        if let Err(violation) = self.guard.check(&listing) {
            warn!(listing_id = ?listing.listing_id, %violation, "listing rejected");
            return Err(violation.into());
        }

        let assessment = self.engine.evaluate(&listing);
        Ok(AssessedListing::new(listing, assessment))
    }

    /// Score a batch; the whole batch is rejected if any entry is invalid.
    pub fn assess_batch(
        &self,
        listings: Vec<Listing>,
    ) -> Result<Vec<AssessedListing>, ListingServiceError> {
        if listings.len() > self.config.max_batch_size {
            return Err(ListingServiceError::BatchTooLarge {
                max: self.config.max_batch_size,
                found: listings.len(),
            });
        }

        for (index, listing) in listings.iter().enumerate() {
            self.guard
                .check(listing)
                .map_err(|source| ListingServiceError::InvalidBatchEntry { index, source })?;
        }

        let assessed: Vec<AssessedListing> = listings
            .into_iter()
            .map(|listing| {
                let assessment = self.engine.evaluate(&listing);
                AssessedListing::new(listing, assessment)
            })
            .collect();

        let flagged = assessed
            .iter()
            .filter(|entry| entry.display.is_some())
            .count();
        info!(total = assessed.len(), flagged, "listing batch assessed");

        Ok(assessed)
    }

    /// Validate a user report, attaching the automatic assessment when the listing is known.
    pub fn draft_report(
        &self,
        request: ScamReportRequest,
        listing: Option<&Listing>,
    ) -> Result<ReportDraft, ListingServiceError> {
        let report = request.validate()?;

        let assessment = match listing {
            Some(listing) => {
                self.guard.check(listing)?;
                Some(self.engine.evaluate(listing))
            }
            None => None,
        };

        let report = match &assessment {
            Some(assessment) => report.with_assessment(assessment),
            None => report,
        };

        info!(listing_id = %report.listing_id.0, "scam report drafted");
        Ok(ReportDraft { report, assessment })
    }
}

/// Error raised by the listing risk service.
#[derive(Debug, thiserror::Error)]
pub enum ListingServiceError {
    #[error(transparent)]
    InvalidListing(#[from] ListingViolation),
    #[error("listing at position {index} is invalid: {source}")]
    InvalidBatchEntry {
        index: usize,
        #[source]
        source: ListingViolation,
    },
    #[error("batch of {found} listings exceeds the limit of {max}")]
    BatchTooLarge { max: usize, found: usize },
    #[error(transparent)]
    InvalidReport(#[from] ReportViolation),
}

impl ListingServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ListingServiceError::BatchTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ListingServiceError::InvalidListing(_)
            | ListingServiceError::InvalidBatchEntry { .. }
            | ListingServiceError::InvalidReport(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}
