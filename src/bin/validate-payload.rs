use anyhow::{Context, Result};
use clap::Parser;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::{fs, path::PathBuf};

use evidence_validator::{ArticleValidator, ResearchData};

/// Check a research-data payload against the ResearchData v1 schema.
#[derive(Parser, Debug)]
#[command(name = "validate-payload", version, about = "Validate research-data JSON against schema")]
struct Cli {
    /// Path to the payload JSON file to validate
    path: PathBuf,

    /// Optional path to a schema file (defaults to schemas/research_data.v1.json)
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Also run the field and cross-field rules on every article
    #[arg(long)]
    rules: bool,
}

fn load_json(path: &PathBuf) -> Result<Value> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let json: Value = serde_json::from_str(&data)
        .with_context(|| format!("Failed to parse JSON in {}", path.display()))?;
    Ok(json)
}

fn main() -> Result<()> {
    let args = Cli::parse();
    let schema_path = args
        .schema
        .unwrap_or_else(|| PathBuf::from("schemas/research_data.v1.json"));

    let schema_json = load_json(&schema_path)?;
    let instance = load_json(&args.path)?;

    // jsonschema 0.17 ties compile errors to the schema lifetime; leak the parsed schema for CLI lifetime
    let schema_static: &'static Value = Box::leak(Box::new(schema_json));

    let compiled = JSONSchema::options()
        .compile(schema_static)
        .context("Failed to compile JSON Schema")?;

    if let Err(errors) = compiled.validate(&instance) {
        eprintln!("invalid:");
        for error in errors {
            eprintln!("- {} at {}", error, error.instance_path);
        }
        std::process::exit(1)
    }

    if args.rules {
        let batch: ResearchData = serde_json::from_value(instance)
            .context("Payload matches the schema but not the article shape")?;
        let validator = ArticleValidator::default();
        let mut failed = false;
        for (index, fields) in batch.data.into_iter().enumerate() {
            if let Err(err) = validator.validate(fields) {
                if !failed {
                    eprintln!("rejected:");
                }
                failed = true;
                eprintln!("- article #{}: {}", index, err);
            }
        }
        if failed {
            std::process::exit(1)
        }
    }

    println!("valid");
    Ok(())
}
