//! # Seed Catalog Loader
//!
//! Populates the database with sample beers for development.
//!
//! ## Usage
//! ```bash
//! # Seed the built-in sample catalog into $BEERSTOCK_DB_PATH (or ./beerstock.db)
//! cargo run -p beerstock-db --bin seed
//!
//! # Specify database path
//! cargo run -p beerstock-db --bin seed -- --db ./data/beerstock.db
//!
//! # Load beers from a JSON file (array of BeerDto)
//! cargo run -p beerstock-db --bin seed -- --file ./catalog.json
//! ```
//!
//! Every beer goes through `StockService::create_beer`, so the usual
//! validation applies. Names that are already registered are skipped, which
//! makes re-running the seed harmless.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use beerstock_core::{BeerDto, BeerType, StockError};
use beerstock_db::{Database, DbConfig};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Sample catalog: (name, brand, max, quantity, type)
const SAMPLE_CATALOG: &[(&str, &str, i64, i64, BeerType)] = &[
    ("Skol", "Ambev", 50, 10, BeerType::Lager),
    ("Brahma", "Ambev", 60, 25, BeerType::Lager),
    ("Heineken", "Heineken", 80, 40, BeerType::Lager),
    ("Colorado Indica", "Colorado", 30, 12, BeerType::Ipa),
    ("Guinness Draught", "Guinness", 40, 8, BeerType::Stout),
    ("Hoegaarden", "AB InBev", 35, 20, BeerType::Witbier),
    ("Eisenbahn Weizenbier", "Eisenbahn", 45, 15, BeerType::Weiss),
    ("Therezopolis Gold", "Therezopolis", 25, 5, BeerType::Ale),
    ("Malzbier Brahma", "Ambev", 30, 18, BeerType::Malzbier),
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    let mut db_path: Option<String> = None;
    let mut catalog_file: Option<PathBuf> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--file" | "-f" => {
                if i + 1 < args.len() {
                    catalog_file = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Beerstock Seed Catalog Loader");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>     Database file path (default: $BEERSTOCK_DB_PATH or ./beerstock.db)");
                println!("  -f, --file <PATH>   JSON array of beers to load instead of the sample catalog");
                println!("  -h, --help          Show this help message");
                return Ok(());
            }
            other => {
                warn!(argument = %other, "Ignoring unknown argument");
            }
        }
        i += 1;
    }

    let mut config = DbConfig::from_env()?;
    if let Some(path) = db_path {
        config.database_path = PathBuf::from(path);
    }

    let catalog = match &catalog_file {
        Some(path) => load_catalog(path)?,
        None => sample_catalog(),
    };

    println!("🍺 Beerstock Seed Catalog Loader");
    println!("================================");
    println!("Database: {}", config.database_path.display());
    println!("Beers:    {}", catalog.len());
    println!();

    let db = Database::new(config).await?;

    println!("✓ Connected to database");
    println!("✓ Migrations applied");
    println!();

    let stock = db.stock();
    let mut created = 0;
    let mut skipped = 0;

    for candidate in catalog {
        let name = candidate.name.clone();
        match stock.create_beer(candidate).await {
            Ok(beer) => {
                created += 1;
                info!(id = ?beer.id, name = %beer.name, "Seeded beer");
            }
            Err(StockError::AlreadyRegistered { .. }) => {
                skipped += 1;
                println!("  Skipping '{}': already registered", name);
            }
            Err(err) if err.is_recoverable() => {
                eprintln!("  Rejected '{}': {}", name, err);
            }
            Err(err) => return Err(err.into()),
        }
    }

    let total = db.beers().count().await?;

    println!();
    println!("✓ Created {} beers, skipped {}", created, skipped);
    println!("  Catalog now holds {} beers", total);

    db.close().await;
    Ok(())
}

/// Installs the fmt subscriber. `RUST_LOG` overrides the default filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,beerstock=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn sample_catalog() -> Vec<BeerDto> {
    SAMPLE_CATALOG
        .iter()
        .map(|&(name, brand, max, quantity, beer_type)| {
            BeerDto::candidate(name, brand, max, quantity, beer_type)
        })
        .collect()
}

/// Reads a JSON array of beers. Ids in the file are ignored so that
/// storage assigns them.
fn load_catalog(path: &Path) -> Result<Vec<BeerDto>, Box<dyn std::error::Error>> {
    let raw = fs::read_to_string(path)?;
    let mut beers: Vec<BeerDto> = serde_json::from_str(&raw)?;
    for beer in &mut beers {
        beer.id = None;
    }
    Ok(beers)
}
