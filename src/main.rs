use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusBuilder;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

use evidence_validator::app::ValidateArticlesUseCase;
use evidence_validator::config::Config;
use evidence_validator::constants;
use evidence_validator::infra::NdjsonFileOutputAdapter;
use evidence_validator::logging;
use evidence_validator::observability::metrics;
use evidence_validator::{ArticleValidator, FunctionalVariants, GeneVariantPair, OntologyPolicy, ResearchData};

#[derive(Parser)]
#[command(name = "evidence_validator")]
#[command(about = "Validate and normalize metadata extracted from functional-variant studies")]
#[command(version = "0.1.0")]
struct Cli {
    /// Print Prometheus metrics to stderr when the command finishes
    #[arg(long, global = true)]
    print_metrics: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a research-article payload (single article or {"data": [...]})
    Validate {
        /// Path to the payload JSON file
        input: PathBuf,
        /// Reject assay types without a canonical ontology identifier
        #[arg(long)]
        strict: bool,
        /// Directory for validated.ndjson and rejected.ndjson
        #[arg(long)]
        output_dir: Option<String>,
        /// Source document name recorded on every output (defaults to the input file name)
        #[arg(long)]
        source: Option<String>,
    },
    /// Filter and de-duplicate gene/variant pairs, printing the result as JSON
    NormalizeVariants {
        /// Path to a JSON list of {gene, variant} pairs or {"data": [...]}
        input: PathBuf,
    },
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VariantPayload {
    Wrapped { data: Vec<GeneVariantPair> },
    Bare(Vec<GeneVariantPair>),
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

async fn run_validate(
    config: &Config,
    input: &Path,
    strict: bool,
    output_dir: Option<String>,
    source: Option<String>,
) -> Result<()> {
    let payload = read_input(input)?;
    let batch = ResearchData::from_json_str(&payload)
        .with_context(|| format!("Failed to parse research data in {}", input.display()))?;

    let policy = if strict {
        OntologyPolicy::Strict
    } else {
        config.validation.ontology_policy
    };
    let output_dir = output_dir.unwrap_or_else(|| config.output.directory.clone());
    let source = source.unwrap_or_else(|| {
        input
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| input.display().to_string())
    });

    let validated_path = format!("{}/{}", output_dir, constants::VALIDATED_OUTPUT_FILE);
    let rejected_path = format!("{}/{}", output_dir, constants::REJECTED_OUTPUT_FILE);
    let use_case = ValidateArticlesUseCase::new(
        ArticleValidator::new(policy),
        Box::new(NdjsonFileOutputAdapter::new(&validated_path)?),
        Box::new(NdjsonFileOutputAdapter::new(&rejected_path)?),
    );

    info!(source = %source, articles = batch.len(), policy = %policy, "Validating payload");
    let report = use_case.validate_batch(&source, batch).await?;

    println!("\n📊 Validation results for {}:", report.source);
    println!("   Total articles: {}", report.total);
    println!("   Accepted: {}", report.accepted);
    println!("   Rejected: {}", report.rejected);
    println!("   Validated output: {}", validated_path);
    println!("   Rejected output: {}", rejected_path);

    if !report.rejections.is_empty() {
        println!("\n⚠️  Rejections:");
        for rejected in &report.rejections {
            println!(
                "   - article #{} ({}): {}",
                rejected.index,
                rejected.article_id.as_deref().unwrap_or("unnamed"),
                rejected.rejection.reason
            );
        }
    }

    Ok(())
}

fn run_normalize_variants(input: &Path) -> Result<()> {
    let payload = read_input(input)?;
    let pairs = match serde_json::from_str::<VariantPayload>(&payload)
        .with_context(|| format!("Failed to parse variant pairs in {}", input.display()))?
    {
        VariantPayload::Wrapped { data } => data,
        VariantPayload::Bare(pairs) => pairs,
    };

    let (variants, summary) = FunctionalVariants::normalize_with_summary(pairs);
    metrics::variants::summary_recorded(&summary);
    info!(
        kept = summary.kept,
        dropped_prefix = summary.dropped_prefix,
        dropped_duplicate = summary.dropped_duplicate,
        "Variant pairs normalized"
    );

    println!("{}", serde_json::to_string_pretty(&variants)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let config = Config::load()?;
    let _log_guard = logging::init_logging(&config.logging);

    let metrics_handle = if cli.print_metrics {
        Some(
            PrometheusBuilder::new()
                .install_recorder()
                .context("Failed to install Prometheus recorder")?,
        )
    } else {
        None
    };

    let result = match cli.command {
        Commands::Validate {
            input,
            strict,
            output_dir,
            source,
        } => run_validate(&config, &input, strict, output_dir, source).await,
        Commands::NormalizeVariants { input } => run_normalize_variants(&input),
    };

    if let Err(e) = &result {
        error!("Command failed: {:#}", e);
    }

    if let Some(handle) = metrics_handle {
        eprintln!("{}", handle.render());
    }

    result
}
