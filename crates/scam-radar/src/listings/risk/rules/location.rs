use super::super::RuleOutcome;
use super::contains_any;

const MIN_LOCATION_CHARS: usize = 3;
const MISSING_LOCATION_SCORE: i32 = 10;
const GENERIC_LOCATION_SCORE: i32 = 12;

const GENERIC_LOCATIONS: &[&str] = &["italia", "tutta italia", "everywhere"];

pub(crate) fn evaluate(location: Option<&str>) -> RuleOutcome {
    let location = match location {
        Some(text) if text.chars().count() >= MIN_LOCATION_CHARS => text.to_lowercase(),
        _ => return RuleOutcome::flag(MISSING_LOCATION_SCORE, "location not specified"),
    };

    if contains_any(&location, GENERIC_LOCATIONS) {
        RuleOutcome::flag(GENERIC_LOCATION_SCORE, "location too generic")
    } else {
        RuleOutcome::none()
    }
}
