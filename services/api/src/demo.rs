use crate::infra::parse_format;
use clap::Args;
use scam_radar::error::AppError;
use scam_radar::listings::{
    AssessedListing, Listing, ListingFormat, ListingImportError, ListingImporter,
    ListingRiskService, ScamReportRequest,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Listing export to score (JSON array or CSV with a header row)
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Input encoding; inferred from the file extension when omitted
    #[arg(long, value_parser = parse_format)]
    pub(crate) format: Option<ListingFormat>,
    /// Emit machine-readable JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct AssessmentRun {
    total: usize,
    results: Vec<AssessedListing>,
    rejected: Vec<RejectedListing>,
}

#[derive(Debug, Serialize)]
struct RejectedListing {
    index: usize,
    title: String,
    error: String,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        input,
        format,
        json,
    } = args;

    let format = format.unwrap_or_else(|| ListingFormat::from_path(&input));
    let listings = ListingImporter::from_path(&input, format)?;
    let run = assess_all(&ListingRiskService::default(), listings);

    if json {
        let payload = serde_json::to_string_pretty(&run).map_err(ListingImportError::from)?;
        println!("{payload}");
    } else {
        println!("Scored {} listings from {}", run.total, input.display());
        render_run(&run);
    }

    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let service = ListingRiskService::default();
    let listings = sample_listings();

    println!("Scam radar demo");
    let run = assess_all(&service, listings.clone());
    render_run(&run);

    let riskiest = run
        .results
        .iter()
        .max_by_key(|entry| entry.assessment.score)
        .and_then(|entry| {
            listings
                .iter()
                .find(|listing| listing.listing_id == entry.listing_id)
        });

    if let Some(listing) = riskiest {
        let request = ScamReportRequest {
            listing_id: listing
                .listing_id
                .as_ref()
                .map(|id| id.0.clone())
                .unwrap_or_default(),
            listing_url: listing.link.clone().unwrap_or_default(),
            reason: "Il venditore chiede un pagamento anticipato fuori piattaforma".to_string(),
            reporter_email: None,
            additional_info: None,
        };
        let draft = service.draft_report(request, Some(listing))?;

        println!("\nDrafted report for listing {}", draft.report.listing_id.0);
        println!("  URL: {}", draft.report.listing_url);
        println!("  Reason: {}", draft.report.reason);
        if let Some(info) = &draft.report.additional_info {
            println!("  Notes: {info}");
        }
    }

    Ok(())
}

fn assess_all(service: &ListingRiskService, listings: Vec<Listing>) -> AssessmentRun {
    let total = listings.len();
    let mut results = Vec::with_capacity(total);
    let mut rejected = Vec::new();

    for (index, listing) in listings.into_iter().enumerate() {
        let title = listing.title.clone();
        match service.assess(listing) {
            Ok(assessed) => results.push(assessed),
            Err(err) => rejected.push(RejectedListing {
                index,
                title,
                error: err.to_string(),
            }),
        }
    }

    AssessmentRun {
        total,
        results,
        rejected,
    }
}

fn render_run(run: &AssessmentRun) {
    for entry in &run.results {
        println!("{}", summary_line(entry));
        for reason in &entry.assessment.reasons {
            println!("    - {reason}");
        }
    }

    if !run.rejected.is_empty() {
        println!("\nRejected listings");
        for rejected in &run.rejected {
            println!(
                "  #{} {}: {}",
                rejected.index, rejected.title, rejected.error
            );
        }
    }
}

fn summary_line(entry: &AssessedListing) -> String {
    let level = entry.assessment.risk_level;
    let badge = level
        .badge(entry.assessment.score)
        .unwrap_or_else(|| format!("{}/100", entry.assessment.score));
    format!("  [{}] {} {}", level.label(), entry.title, badge)
}

fn sample_listings() -> Vec<Listing> {
    vec![
        Listing::new("Bicicletta da corsa Bianchi")
            .with_price(420.0)
            .with_description("Telaio in alluminio taglia 54, gruppo Shimano 105, tagliandata a marzo.")
            .with_photos([
                "https://images.sbito.it/api/v1/img/bianchi-1.jpg",
                "https://images.sbito.it/api/v1/img/bianchi-2.jpg",
                "https://images.sbito.it/api/v1/img/bianchi-3.jpg",
            ])
            .with_location("Padova")
            .with_seller("Luca Bianchi", Some("privato"))
            .with_link("https://www.subito.it/biciclette/bianchi-padova-4410001.htm")
            .with_id("4410001"),
        Listing::new("Playstation 5 come nuovo urgente")
            .with_price(90.0)
            .with_description("Scrivimi su whatsapp, spedisco ovunque.")
            .with_photos(["https://images.sbito.it/api/v1/img/ps5.jpg"])
            .with_location("Italia")
            .with_seller("account77", None)
            .with_link("https://www.subito.it/console/playstation-5-4410002.htm")
            .with_id("4410002"),
        Listing::new("iPhone 14 Pro originale con scontrino")
            .with_price(520.0)
            .with_description("Batteria al 91%, sempre con cover, vendo per passaggio ad Android.")
            .with_photos([
                "https://images.sbito.it/api/v1/img/iphone-1.jpg",
                "https://images.sbito.it/api/v1/img/iphone-2.jpg",
            ])
            .with_location("Firenze")
            .with_seller("Sara Neri", Some("privato"))
            .with_link("https://www.subito.it/telefonia/iphone-14-pro-4410003.htm")
            .with_id("4410003"),
        Listing::new("Divano tre posti")
            .with_price(1.0)
            .with_location("Roma")
            .with_id("4410004"),
    ]
}
