use serde::{Deserialize, Serialize};
use url::Url;

use super::domain::ListingId;
use super::risk::Assessment;

const MAX_LISTING_ID_CHARS: usize = 100;
const MIN_REASON_CHARS: usize = 10;
const MAX_REASON_CHARS: usize = 1000;
const MAX_EMAIL_CHARS: usize = 100;
const MAX_ADDITIONAL_INFO_CHARS: usize = 2000;

const SUPPORTED_MARKETPLACES: &[&str] = &["subito.it", "ebay.it", "ebay.com"];
const SPAM_REASONS: &[&str] = &["test", "spam", "prova"];

/// Validation failures for a user-submitted fraud report.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReportViolation {
    #[error("listing_id must be between 1 and 100 characters")]
    InvalidListingId,
    #[error("listing_url is not a valid http(s) URL: {0}")]
    InvalidUrl(String),
    #[error("listing_url must point to a supported marketplace (subito.it or eBay), found {host}")]
    UnsupportedMarketplace { host: String },
    #[error("reason must be between 10 and 1000 characters")]
    ReasonLength,
    #[error("reason looks like a test or spam submission")]
    SpamReason,
    #[error("reporter_email is not a valid address")]
    InvalidEmail,
    #[error("additional_info exceeds 2000 characters")]
    AdditionalInfoTooLong,
}

/// Automatic context attached to a report so reviewers see why the listing was flagged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportContext {
    pub score: u8,
    pub reasons: Vec<String>,
}

impl ReportContext {
    pub fn from_assessment(assessment: &Assessment) -> Self {
        Self {
            score: assessment.score,
            reasons: assessment.reasons.clone(),
        }
    }

    pub fn summary(&self) -> String {
        format!(
            "Automatic score: {}/100. Reasons: {}",
            self.score,
            self.reasons.join(", ")
        )
    }
}

/// Report as typed by the user, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScamReportRequest {
    pub listing_id: String,
    pub listing_url: String,
    pub reason: String,
    #[serde(default)]
    pub reporter_email: Option<String>,
    #[serde(default)]
    pub additional_info: Option<String>,
}

/// Validated payload ready to be forwarded to the report sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScamReport {
    pub listing_id: ListingId,
    pub listing_url: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reporter_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl ScamReportRequest {
    pub fn validate(self) -> Result<ScamReport, ReportViolation> {
        let listing_id = self.listing_id.trim();
        let id_chars = listing_id.chars().count();
        if id_chars == 0 || id_chars > MAX_LISTING_ID_CHARS {
            return Err(ReportViolation::InvalidListingId);
        }

        let listing_url = validate_listing_url(self.listing_url.trim())?;

        let reason = self.reason.trim();
        if SPAM_REASONS.contains(&reason.to_lowercase().as_str()) {
            return Err(ReportViolation::SpamReason);
        }
        let reason_chars = reason.chars().count();
        if !(MIN_REASON_CHARS..=MAX_REASON_CHARS).contains(&reason_chars) {
            return Err(ReportViolation::ReasonLength);
        }

        let reporter_email = match self.reporter_email.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(email) if email.chars().count() > MAX_EMAIL_CHARS || !email.contains('@') => {
                return Err(ReportViolation::InvalidEmail)
            }
            Some(email) => Some(email.to_string()),
        };

        let additional_info = match self.additional_info.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(info) if info.chars().count() > MAX_ADDITIONAL_INFO_CHARS => {
                return Err(ReportViolation::AdditionalInfoTooLong)
            }
            Some(info) => Some(info.to_string()),
        };

        Ok(ScamReport {
            listing_id: ListingId(listing_id.to_string()),
            listing_url,
            reason: reason.to_string(),
            reporter_email,
            additional_info,
        })
    }
}

impl ScamReport {
    /// Append the automatic score summary to the user's notes.
    pub fn with_assessment(mut self, assessment: &Assessment) -> Self {
        let summary = ReportContext::from_assessment(assessment).summary();
        let combined = match self.additional_info.take() {
            Some(note) => format!("{note}\n\n{summary}"),
            None => summary,
        };
        self.additional_info = Some(combined.chars().take(MAX_ADDITIONAL_INFO_CHARS).collect());
        self
    }
}

fn validate_listing_url(raw: &str) -> Result<String, ReportViolation> {
    let url = Url::parse(raw).map_err(|err| ReportViolation::InvalidUrl(err.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ReportViolation::InvalidUrl(format!(
            "unsupported scheme {}",
            url.scheme()
        )));
    }

    let host = url
        .host_str()
        .ok_or_else(|| ReportViolation::InvalidUrl("missing host".to_string()))?
        .to_ascii_lowercase();
    let supported = SUPPORTED_MARKETPLACES
        .iter()
        .any(|domain| host == *domain || host.ends_with(&format!(".{domain}")));
    if !supported {
        return Err(ReportViolation::UnsupportedMarketplace { host });
    }

    Ok(url.to_string())
}
