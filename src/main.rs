//! Golden Leaf Catalog CLI
//!
//! Imports one category from the Golden Leaf store API and prints the
//! products as JSON on stdout. Logs go to stderr.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use golden_leaf_catalog::cli;
use golden_leaf_catalog::config::LoggingSettings;
use golden_leaf_catalog::{ProductFetcher, Settings};

fn init_tracing(logging: &LoggingSettings) {
    // RUST_LOG takes precedence over the configured directives
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if logging.json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let settings = Settings::load().context("Failed to load configuration")?;
    init_tracing(&settings.logging);

    let category_id = cli::category_from_args(std::env::args())?;

    let fetcher = ProductFetcher::new(&settings.catalog)
        .context("Failed to create product fetcher")?;

    let stdout = std::io::stdout();
    cli::export_category(&fetcher, &category_id, &mut stdout.lock()).await?;

    Ok(())
}
