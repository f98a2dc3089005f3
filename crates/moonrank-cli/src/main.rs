//! moonrank: rarity ranking for generative-asset metadata collections.
//! Entry point for the command line binary.

mod cli;
mod config;
mod ingest;
mod output;

use clap::Parser;
use moonrank_ranker::rank_documents;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    let config = config::Config::load(cli.config.as_deref())?.merge_cli(&cli);

    // Initialise structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("moonrank {}", env!("CARGO_PKG_VERSION"));

    let (input_dir, output_path) = config.require_paths()?;
    info!("Filtered attributes: {:?}", config.ranking.filtered_attributes());

    let files = ingest::scan_input_dir(input_dir)?;
    info!("Reading {} metadata files from {}", files.len(), input_dir.display());
    let documents = ingest::load_documents(&files)?;

    let ranked = rank_documents(&documents, ingest::stable_id, &config.ranking)?;

    output::write_json(output_path, &ranked.mints)?;
    info!("Wrote {} ranked assets to {}", ranked.mints.len(), output_path.display());

    match config.paths.duplicates.as_deref() {
        Some(path) if !ranked.duplicates.is_empty() => {
            output::write_json(path, &ranked.duplicates)?;
            info!(
                "Wrote {} duplicate clusters ({} assets) to {}",
                ranked.duplicates.len(),
                ranked.duplicate_count(),
                path.display()
            );
        }
        Some(_) => info!("No duplicates found; duplicate report not written"),
        None => {}
    }

    Ok(())
}
