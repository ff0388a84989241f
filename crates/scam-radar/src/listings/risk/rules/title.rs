use super::super::RuleOutcome;
use super::{contains_any, contains_word};

/// Keywords sharing a score. Negative scores are trust signals and carry no reason.
///
/// `keywords` match anywhere in the title; `words` only match whole words.
pub(crate) struct TitleSignal {
    pub(crate) keywords: &'static [&'static str],
    pub(crate) words: &'static [&'static str],
    pub(crate) score: i32,
    pub(crate) reason: Option<&'static str>,
}

pub(crate) const TITLE_SIGNALS: &[TitleSignal] = &[
    TitleSignal {
        keywords: &["nuovo", "sigillato", "scontato"],
        words: &["sealed"],
        score: 10,
        reason: Some("too-good-to-be-true promises"),
    },
    TitleSignal {
        keywords: &["urgente", "affare"],
        words: &["urgent"],
        score: 8,
        reason: Some("suspicious sense of urgency"),
    },
    TitleSignal {
        keywords: &["originale", "100% originale"],
        words: &["original"],
        score: 5,
        reason: Some("excessive emphasis on authenticity"),
    },
    TitleSignal {
        keywords: &["garanzia", "scontrino"],
        words: &["warranty", "receipt"],
        score: -5,
        reason: None,
    },
];

/// Applies the single strongest matching signal; earlier groups win ties.
pub(crate) fn evaluate(title: &str) -> RuleOutcome {
    let title = title.to_lowercase();

    TITLE_SIGNALS
        .iter()
        .filter(|signal| {
            contains_any(&title, signal.keywords)
                || signal.words.iter().any(|word| contains_word(&title, word))
        })
        .fold(None::<&TitleSignal>, |strongest, signal| match strongest {
            Some(current) if signal.score.abs() <= current.score.abs() => Some(current),
            _ => Some(signal),
        })
        .map(|signal| match signal.reason {
            Some(reason) => RuleOutcome::flag(signal.score, reason),
            None => RuleOutcome::silent(signal.score),
        })
        .unwrap_or_else(RuleOutcome::none)
}
