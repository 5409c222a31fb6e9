// Summarize every act reference cited by the Texas statute chapters and
// write the results to a JSON file.

use anyhow::{Context, Result};
use openai_client::OpenAIClient;
use statute_acts::ai::{DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use statute_acts::output::DEFAULT_SUMMARIES_PATH;
use statute_acts::pipeline::DEFAULT_DELAY;
use statute_acts::{
    output, texas_chapters, ActSummarizer, Config, HttpFetcher, OpenAIGenerator, Pipeline,
};
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

    let config = Config::from_env();
    let api_key = config.require_openai_api_key()?;

    let fetcher = HttpFetcher::new().context("Failed to build HTTP client")?;
    let client = OpenAIClient::new(api_key).with_base_url(&config.openai_base_url);
    let generator = OpenAIGenerator::new(client)
        .with_model(DEFAULT_MODEL)
        .with_temperature(DEFAULT_TEMPERATURE)
        .with_max_tokens(DEFAULT_MAX_TOKENS);
    tracing::info!(model = generator.model(), "Starting act summarization run");

    let summarizer = ActSummarizer::new(generator).with_delay(DEFAULT_DELAY);

    let chapters = texas_chapters();
    let report = Pipeline::new(fetcher).collect(&chapters).await;
    let summaries = summarizer.summarize_report(&report).await;

    let fallbacks = summaries.iter().filter(|s| s.is_fallback()).count();
    tracing::info!(
        summaries = summaries.len(),
        fallbacks,
        skipped = report.skipped.len(),
        "Summarization pass complete"
    );

    print!("{}", output::render_summaries(&summaries));

    output::write_summaries(DEFAULT_SUMMARIES_PATH, &summaries)
        .with_context(|| format!("Failed to write summaries to {DEFAULT_SUMMARIES_PATH}"))?;
    println!(
        "\nWrote {} act summaries to {DEFAULT_SUMMARIES_PATH}",
        summaries.len()
    );

    Ok(())
}
