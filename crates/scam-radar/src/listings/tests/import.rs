use std::io::Cursor;
use std::path::Path;

use crate::listings::domain::ListingId;
use crate::listings::import::{ListingFormat, ListingImportError, ListingImporter};

#[test]
fn csv_rows_become_listings() {
    let csv = "title,price,description,photos,location,seller_name,listing_id\n\
               iPhone 13,90,,https://img.example.com/a.jpg | https://img.example.com/b.jpg,Roma,Mario,111\n\
               Divano letto,Contattami,Divano tre posti in buono stato,,,,222\n";

    let listings = ListingImporter::from_reader(Cursor::new(csv), ListingFormat::Csv)
        .expect("csv parses");

    assert_eq!(listings.len(), 2);
    let phone = &listings[0];
    assert_eq!(phone.price, Some(90.0));
    assert!(phone.description.is_none());
    assert_eq!(
        phone.photos,
        vec![
            "https://img.example.com/a.jpg".to_string(),
            "https://img.example.com/b.jpg".to_string(),
        ]
    );
    assert_eq!(phone.listing_id, Some(ListingId("111".to_string())));

    let sofa = &listings[1];
    assert_eq!(sofa.price, None);
    assert_eq!(sofa.price_text.as_deref(), Some("Contattami"));
    assert!(sofa.photos.is_empty());
    assert!(sofa.location.is_none());
    assert!(sofa.seller_name.is_none());
}

#[test]
fn csv_prices_accept_euro_sign_and_decimal_comma() {
    let csv = "title,price\nLampada,€ 12,5\n";
    // The comma splits the cell, so quote it.
    let quoted = "title,price\nLampada,\"€ 12,5\"\n";

    assert!(ListingImporter::from_reader(Cursor::new(csv), ListingFormat::Csv).is_err());
    let listings = ListingImporter::from_reader(Cursor::new(quoted), ListingFormat::Csv)
        .expect("csv parses");
    assert_eq!(listings[0].price, Some(12.5));
}

#[test]
fn csv_prices_accept_italian_thousands_separator() {
    let csv = "title,price\nRolex Submariner,1.200\nMacBook Pro,\"€ 1.200,50\"\n";

    let listings =
        ListingImporter::from_reader(Cursor::new(csv), ListingFormat::Csv).expect("csv parses");

    assert_eq!(listings[0].price, Some(1200.0));
    assert_eq!(listings[1].price, Some(1200.5));
}

#[test]
fn json_accepts_id_alias_and_defaults() {
    let json = r#"[
        {"title": "PS5 digital", "price": 120.0, "id": "abc"},
        {"title": "Bicicletta", "photos": ["a.jpg", "b.jpg"], "seller_name": "Marco"}
    ]"#;

    let listings = ListingImporter::from_reader(Cursor::new(json), ListingFormat::Json)
        .expect("json parses");

    assert_eq!(listings[0].listing_id, Some(ListingId("abc".to_string())));
    assert!(listings[0].photos.is_empty());
    assert_eq!(listings[1].photos.len(), 2);
    assert_eq!(listings[1].seller_name.as_deref(), Some("Marco"));
}

#[test]
fn malformed_json_is_reported() {
    let err = ListingImporter::from_reader(Cursor::new("{\"title\": 1"), ListingFormat::Json)
        .expect_err("invalid json");
    assert!(matches!(err, ListingImportError::Json(_)));
}

#[test]
fn format_is_inferred_from_extension() {
    assert_eq!(
        ListingFormat::from_path(Path::new("export/listings.CSV")),
        ListingFormat::Csv
    );
    assert_eq!(
        ListingFormat::from_path(Path::new("export/listings.json")),
        ListingFormat::Json
    );
    assert_eq!(
        ListingFormat::from_path(Path::new("export/listings")),
        ListingFormat::Json
    );
}
