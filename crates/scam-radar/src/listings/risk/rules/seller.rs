use std::sync::OnceLock;

use regex::Regex;

use super::super::RuleOutcome;

const MIN_SELLER_NAME_CHARS: usize = 3;
const MISSING_NAME_SCORE: i32 = 8;
const SUSPICIOUS_NAME_SCORE: i32 = 12;

// Generated handles: "user123", "account045", or a long unbroken run of letters.
const SUSPICIOUS_NAME_SHAPES: &[&str] = &[r"(?i)^user\d+$", r"(?i)^account\d+$", r"(?i)^[a-z]{20,}$"];

fn suspicious_shapes() -> &'static [Regex] {
    static SHAPES: OnceLock<Vec<Regex>> = OnceLock::new();
    SHAPES.get_or_init(|| {
        SUSPICIOUS_NAME_SHAPES
            .iter()
            .map(|pattern| Regex::new(pattern).expect("seller name pattern compiles"))
            .collect()
    })
}

pub(crate) fn evaluate(seller_name: &str) -> RuleOutcome {
    if seller_name.chars().count() < MIN_SELLER_NAME_CHARS {
        return RuleOutcome::flag(MISSING_NAME_SCORE, "seller name not specified");
    }

    if suspicious_shapes()
        .iter()
        .any(|shape| shape.is_match(seller_name))
    {
        RuleOutcome::flag(SUSPICIOUS_NAME_SCORE, "suspicious seller name")
    } else {
        RuleOutcome::none()
    }
}
