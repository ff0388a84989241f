use std::sync::OnceLock;

use regex::Regex;

use super::super::RuleOutcome;

const MIN_DESCRIPTION_CHARS: usize = 20;
const SHORT_DESCRIPTION_SCORE: i32 = 15;

/// Red flags in declaration order; the first match decides the outcome.
const RED_FLAGS: &[(&str, i32, &str)] = &[
    (
        r"pagament[oi] antic|\badvance payment\b|\bpay(?:ment)? upfront\b",
        35,
        "advance payment requested",
    ),
    (
        r"western union|moneygram|ricarica|\btop[- ]?ups?\b",
        40,
        "untraceable payment method",
    ),
    (
        r"spedizion[ei] grat|\bfree shipping\b",
        10,
        "free shipping for an expensive item",
    ),
    (
        r"whatsapp|telegram",
        15,
        "contact requested outside the platform",
    ),
    (
        r"no perditempo|solo interessat|\bno time[- ]?wasters\b|\bserious buyers only\b",
        8,
        "aggressive tone",
    ),
];

struct RedFlag {
    pattern: Regex,
    score: i32,
    reason: &'static str,
}

fn red_flags() -> &'static [RedFlag] {
    static FLAGS: OnceLock<Vec<RedFlag>> = OnceLock::new();
    FLAGS.get_or_init(|| {
        RED_FLAGS
            .iter()
            .map(|(pattern, score, reason)| RedFlag {
                pattern: Regex::new(pattern).expect("red flag pattern compiles"),
                score: *score,
                reason: *reason,
            })
            .collect()
    })
}

pub(crate) fn evaluate(description: Option<&str>) -> RuleOutcome {
    let description = match description {
        Some(text) if text.chars().count() >= MIN_DESCRIPTION_CHARS => text.to_lowercase(),
        _ => {
            return RuleOutcome::flag(
                SHORT_DESCRIPTION_SCORE,
                "description very short or missing",
            )
        }
    };

    red_flags()
        .iter()
        .find(|flag| flag.pattern.is_match(&description))
        .map(|flag| RuleOutcome::flag(flag.score, flag.reason))
        .unwrap_or_else(RuleOutcome::none)
}
