use std::io::Cursor;
use std::sync::Arc;
use std::thread;

use scam_radar::config::AssessmentConfig;
use scam_radar::listings::{
    Listing, ListingFormat, ListingImporter, ListingRiskService, RiskEngine, RiskLevel,
    ScamReportRequest,
};

fn counterfeit_watch() -> Listing {
    Listing::new("Rolex Submariner originale urgente")
        .with_price(500.0)
        .with_description("Pagamento anticipato tramite bonifico, spedizione gratuita in tutta Italia")
        .with_photos(["https://cdn.example.com/stock/rolex.jpg"])
        .with_location("Milano")
        .with_seller("user12345", Some("privato"))
        .with_id("7770001")
}

#[test]
fn counterfeit_listing_saturates_the_scale() {
    let assessment = RiskEngine::new().evaluate(&counterfeit_watch());

    // 40 price + 8 title + 35 description + 10 photos + 12 seller = 105.
    assert_eq!(assessment.score, 100);
    assert_eq!(assessment.risk_level, RiskLevel::High);
    assert_eq!(
        assessment.reasons,
        vec![
            "price suspiciously low for rolex (€500)".to_string(),
            "suspicious sense of urgency".to_string(),
            "advance payment requested".to_string(),
            "only one photo available".to_string(),
            "suspicious seller name".to_string(),
        ]
    );
    assert_eq!(
        assessment.risk_level.badge(assessment.score).as_deref(),
        Some("⚠️ ATTENZIONE TRUFFA (100/100)")
    );
}

#[test]
fn imported_export_is_scored_in_order() {
    let export = "\
title,price,description,photos,location,seller_name,seller_type,link,listing_id
Lampada da tavolo,25,Lampada in ottone funzionante con lampadina inclusa,https://img.example.com/a.jpg|https://img.example.com/b.jpg,Bologna,Giulia Verdi,privato,,101
PS5 sigillata,90,,,,,,,102
";
    let listings = ListingImporter::from_reader(Cursor::new(export), ListingFormat::Csv)
        .expect("export parses");
    let service = ListingRiskService::new(AssessmentConfig { max_batch_size: 10 });

    let results = service.assess_batch(listings).expect("batch assessed");

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].assessment.score, 0);
    assert!(results[0].display.is_none());

    // 30 price + 15 description + 20 photos + 10 location; title has no exact keyword.
    let console = &results[1];
    assert_eq!(console.assessment.score, 75);
    assert_eq!(console.assessment.risk_level, RiskLevel::High);
    assert_eq!(console.display.map(|display| display.icon), Some("⚠️"));
}

#[test]
fn report_draft_carries_the_automatic_score() {
    let service = ListingRiskService::default();
    let request = ScamReportRequest {
        listing_id: "7770001".to_string(),
        listing_url: "https://www.subito.it/orologi/rolex-submariner-milano-7770001.htm".to_string(),
        reason: "Richiede bonifico anticipato e non risponde alle domande".to_string(),
        reporter_email: None,
        additional_info: Some("Ho contattato il venditore ieri".to_string()),
    };

    let draft = service
        .draft_report(request, Some(&counterfeit_watch()))
        .expect("report drafted");

    let info = draft.report.additional_info.expect("notes present");
    assert!(info.starts_with("Ho contattato il venditore ieri\n\nAutomatic score: 100/100."));
    assert!(info.contains("advance payment requested"));
}

#[test]
fn shared_engine_is_deterministic_across_threads() {
    let engine = Arc::new(RiskEngine::new());
    let expected = engine.evaluate(&counterfeit_watch());

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || engine.evaluate(&counterfeit_watch()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().expect("worker finished"), expected);
    }
}
