mod display;
pub(crate) mod rules;

pub use display::RiskDisplay;

use super::domain::Listing;
use serde::{Deserialize, Serialize};
use tracing::debug;

const MAX_SCORE: i32 = 100;
const HIGH_RISK_THRESHOLD: u8 = 70;
const MEDIUM_RISK_THRESHOLD: u8 = 40;

/// Signed contribution of a single rule evaluator, with an optional
/// explanation for the user. Trust signals lower the score without a reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleOutcome {
    pub contribution: i32,
    pub reason: Option<String>,
}

impl RuleOutcome {
    pub fn none() -> Self {
        Self {
            contribution: 0,
            reason: None,
        }
    }

    pub fn flag(contribution: i32, reason: impl Into<String>) -> Self {
        Self {
            contribution,
            reason: Some(reason.into()),
        }
    }

    pub fn silent(contribution: i32) -> Self {
        Self {
            contribution,
            reason: None,
        }
    }
}

/// Risk tier derived from the clamped score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub const fn from_score(score: u8) -> Self {
        if score >= HIGH_RISK_THRESHOLD {
            RiskLevel::High
        } else if score >= MEDIUM_RISK_THRESHOLD {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
        }
    }

    /// Low risk listings get no indicator at all.
    pub const fn requires_attention(self) -> bool {
        !matches!(self, RiskLevel::Low)
    }
}

/// Result of scoring one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    pub score: u8,
    pub reasons: Vec<String>,
    pub risk_level: RiskLevel,
}

impl Assessment {
    fn from_raw(raw_score: i32, reasons: Vec<String>) -> Self {
        let score = raw_score.clamp(0, MAX_SCORE) as u8;
        Self {
            score,
            reasons,
            risk_level: RiskLevel::from_score(score),
        }
    }
}

/// Stateless scorer running every facet evaluator over a listing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskEngine;

impl RiskEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, listing: &Listing) -> Assessment {
        let outcomes = [
            listing
                .scoring_price()
                .map(|price| rules::price::evaluate(price, &listing.title)),
            Some(rules::title::evaluate(&listing.title)),
            Some(rules::description::evaluate(listing.description.as_deref())),
            Some(rules::photos::evaluate(&listing.photos)),
            Some(rules::location::evaluate(listing.location.as_deref())),
            listing.seller_name.as_deref().map(rules::seller::evaluate),
        ];

        let mut raw_score = 0;
        let mut reasons = Vec::new();
        for outcome in outcomes.into_iter().flatten() {
            raw_score += outcome.contribution;
            if let Some(reason) = outcome.reason {
                reasons.push(reason);
            }
        }

        let assessment = Assessment::from_raw(raw_score, reasons);
        debug!(
            raw_score,
            score = assessment.score,
            risk_level = assessment.risk_level.label(),
            reasons = assessment.reasons.len(),
            "listing evaluated"
        );
        assessment
    }
}
