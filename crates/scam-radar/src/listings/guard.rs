use super::domain::Listing;

/// Contract violations detected before a listing reaches the risk engine.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListingViolation {
    #[error("listing title must not be empty")]
    EmptyTitle,
    #[error("listing price must not be negative (found {found})")]
    NegativePrice { found: f64 },
    #[error("listing price must be a finite number")]
    NonFinitePrice,
}

/// Boundary check applied by callers of the engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListingGuard;

impl ListingGuard {
    pub fn check(&self, listing: &Listing) -> Result<(), ListingViolation> {
        if listing.title.trim().is_empty() {
            return Err(ListingViolation::EmptyTitle);
        }

        if let Some(price) = listing.price {
            if !price.is_finite() {
                return Err(ListingViolation::NonFinitePrice);
            }
            if price < 0.0 {
                return Err(ListingViolation::NegativePrice { found: price });
            }
        }

        Ok(())
    }
}
