use serde::{Deserialize, Serialize};

/// Opaque identifier assigned to a listing by the marketplace it was scraped from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub String);

/// Marketplace listing as supplied by the search backend.
///
/// Only `title` is mandatory. Every other facet may be missing, and each rule
/// evaluator decides whether a missing facet is itself a risk signal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    pub title: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub price_text: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub photos: Vec<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub seller_name: Option<String>,
    #[serde(default)]
    pub seller_type: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
    #[serde(default, alias = "id")]
    pub listing_id: Option<ListingId>,
}

impl Listing {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            price: None,
            price_text: None,
            description: None,
            photos: Vec::new(),
            location: None,
            seller_name: None,
            seller_type: None,
            link: None,
            listing_id: None,
        }
    }

    pub fn with_price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn with_price_text(mut self, price_text: impl Into<String>) -> Self {
        self.price_text = Some(price_text.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_photos<I, S>(mut self, photos: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.photos = photos.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_seller(mut self, name: impl Into<String>, seller_type: Option<&str>) -> Self {
        self.seller_name = Some(name.into());
        self.seller_type = seller_type.map(str::to_string);
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.listing_id = Some(ListingId(id.into()));
        self
    }

    /// Numeric price usable for scoring. Zero counts as "no price": free
    /// items only carry a textual price.
    pub fn scoring_price(&self) -> Option<f64> {
        self.price.filter(|price| *price != 0.0)
    }
}
