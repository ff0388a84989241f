use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::domain::{Listing, ListingId};

const PHOTO_SEPARATOR: char = '|';

/// Source encoding of a listing export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListingFormat {
    #[default]
    Json,
    Csv,
}

impl ListingFormat {
    /// Guess the format from a file extension, defaulting to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ListingFormat::Csv,
            _ => ListingFormat::Json,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ListingImportError {
    #[error("failed to read listing export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid listing CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid listing JSON data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads listings exported by the search backend for offline scoring.
pub struct ListingImporter;

impl ListingImporter {
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        format: ListingFormat,
    ) -> Result<Vec<Listing>, ListingImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file, format)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: ListingFormat,
    ) -> Result<Vec<Listing>, ListingImportError> {
        match format {
            ListingFormat::Json => Ok(serde_json::from_reader(reader)?),
            ListingFormat::Csv => parse_csv(reader),
        }
    }
}

fn parse_csv<R: Read>(reader: R) -> Result<Vec<Listing>, ListingImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut listings = Vec::new();

    for record in csv_reader.deserialize::<ListingRow>() {
        listings.push(record?.into_listing());
    }

    Ok(listings)
}

#[derive(Debug, Deserialize)]
struct ListingRow {
    title: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    price: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    price_text: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    photos: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    seller_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    seller_type: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    link: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    listing_id: Option<String>,
}

impl ListingRow {
    fn into_listing(self) -> Listing {
        let photos = self
            .photos
            .map(|cell| {
                cell.split(PHOTO_SEPARATOR)
                    .map(str::trim)
                    .filter(|photo| !photo.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        // An unparsable price keeps the raw cell as the textual price.
        let (price, price_text) = match self.price {
            Some(raw) => match parse_price(&raw) {
                Some(price) => (Some(price), self.price_text),
                None => (None, self.price_text.or(Some(raw))),
            },
            None => (None, self.price_text),
        };

        Listing {
            title: self.title,
            price,
            price_text,
            description: self.description,
            photos,
            location: self.location,
            seller_name: self.seller_name,
            seller_type: self.seller_type,
            link: self.link,
            listing_id: self.listing_id.map(ListingId),
        }
    }
}

fn parse_price(raw: &str) -> Option<f64> {
    let cleaned = raw.trim().trim_start_matches('€').trim_end_matches('€').trim();
    // Italian notation: "." groups thousands, "," marks decimals.
    cleaned
        .replace('.', "")
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
