use std::collections::BTreeMap;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::{error, info};

use topicgap::concepts::cluster::TOP_PHRASES;
use topicgap::concepts::extract::ConceptExtractor;
use topicgap::config::Config;
use topicgap::fetch::http::HttpFetcher;
use topicgap::nlp::chunker::RuleChunker;
use topicgap::nlp::traits::LanguageModel;
use topicgap::output::{terminal, to_json};
use topicgap::pipeline::audit::{
    page_clusters, run_audit, AuditOutcome, AuditRequest, PAGE_UNAVAILABLE,
};
use topicgap::report::models::ErrorBody;

/// topicgap: find the topics your competitors cover and you don't.
///
/// Reads `{"myUrl": "...", "competitorUrls": [...]}` from stdin (or
/// --input) and prints a JSON gap report on stdout.
#[derive(Parser)]
#[command(name = "topicgap", version, about)]
struct Cli {
    /// Read the request from a file instead of stdin
    #[arg(long)]
    input: Option<PathBuf>,

    /// Output format for the report
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the concept clusters extracted from a single page
    Concepts {
        /// The page to analyze
        url: String,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Text,
}

/// One head word in the `concepts` listing.
#[derive(Serialize)]
struct ClusterSummary {
    total_freq: u32,
    top_phrases: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries only the JSON result
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("topicgap=info")),
        )
        .init();

    let cli = Cli::parse();

    match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            error!(error = %format!("{e:#}"), "topicgap failed");
            print_json(&ErrorBody::from_error(&e), cli.pretty);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<ExitCode> {
    let config = Config::load()?;

    let model: Arc<dyn LanguageModel> = Arc::new(RuleChunker::load()?);
    let extractor = ConceptExtractor::new(model).with_extra_stop_clusters(config.load_stoplist()?);
    let fetcher = HttpFetcher::new(
        &config.user_agent,
        config.fetch_timeout,
        config.min_paragraph_length,
    )?;

    if let Some(Commands::Concepts { url }) = &cli.command {
        let clusters = page_clusters(&fetcher, &extractor, url).await?;
        let summary: BTreeMap<String, ClusterSummary> = clusters
            .into_iter()
            .map(|(head, cluster)| {
                let summary = ClusterSummary {
                    total_freq: cluster.total_freq,
                    top_phrases: cluster.top_phrases(TOP_PHRASES),
                };
                (head, summary)
            })
            .collect();
        print_json(&summary, cli.pretty);
        return Ok(ExitCode::SUCCESS);
    }

    let raw = read_request(cli.input.as_deref())?;
    let request = AuditRequest::from_json(&raw)?;
    let my_url = request.target_url()?;
    let competitor_urls = request.competitor_urls();

    info!(
        url = my_url,
        competitors = competitor_urls.len(),
        "Starting audit"
    );

    let settings = config.audit_settings();
    match run_audit(&fetcher, &extractor, my_url, competitor_urls, &settings).await {
        AuditOutcome::PageUnavailable => {
            print_json(&ErrorBody::new(PAGE_UNAVAILABLE), cli.pretty);
        }
        AuditOutcome::Report(report) => match cli.format {
            OutputFormat::Json => print_json(&report, cli.pretty),
            OutputFormat::Text => terminal::display_report(&report),
        },
    }

    Ok(ExitCode::SUCCESS)
}

fn read_request(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read request from stdin")?;
            Ok(raw)
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) {
    match to_json(value, pretty) {
        Ok(json) => println!("{json}"),
        Err(e) => error!(error = %e, "Failed to write output"),
    }
}
