// List the act references cited by each Texas statute chapter.

use anyhow::{Context, Result};
use statute_acts::{output, texas_chapters, HttpFetcher, Pipeline};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,statute_acts=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let fetcher = HttpFetcher::new().context("Failed to build HTTP client")?;

    let chapters = texas_chapters();
    let report = Pipeline::new(fetcher).collect(&chapters).await;

    tracing::info!(
        chapters = report.chapters.len(),
        references = report.reference_count(),
        skipped = report.skipped.len(),
        "Chapter pass complete"
    );

    print!("{}", output::render_references(&report));

    Ok(())
}
