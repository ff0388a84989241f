//! Facet evaluators. Each one is a pure function over declarative tables;
//! table order is significant wherever first-match semantics apply.

pub(crate) mod description;
pub(crate) mod location;
pub(crate) mod photos;
pub(crate) mod price;
pub(crate) mod seller;
pub(crate) mod title;

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

fn contains_word(haystack: &str, word: &str) -> bool {
    haystack
        .split(|c: char| !c.is_alphanumeric())
        .any(|token| token == word)
}
