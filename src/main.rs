//! orcamdf - CLI to estimate quotes for custom MDF cabinetry projects.

use anyhow::{Context, Result};
use clap::Parser;
use std::fmt::Write as _;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use orcamdf_core::{
    estimate_project, storage, validate_modules, validate_settings, Project, QuoteResult,
    Settings,
};

/// Estimate cost, materials and sale price for a cabinetry project file.
#[derive(Parser, Debug)]
#[command(name = "orcamdf")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input project JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Price book JSON file; shipped defaults apply when omitted or missing
    #[arg(short, long)]
    settings: Option<PathBuf>,

    /// Write the quote result as JSON to this path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Validate only, don't estimate
    #[arg(long)]
    validate: bool,

    /// Print the quote result as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let settings = match &args.settings {
        Some(path) => storage::load_settings_or_default(path)
            .with_context(|| format!("Failed to load settings from {}", path.display()))?,
        None => Settings::default(),
    };
    for warning in &validate_settings(&settings).warnings {
        warn!("{}", warning);
    }

    info!("Processing: {}", args.input.display());

    let project = storage::load_project(&args.input)
        .with_context(|| format!("Failed to load {}", args.input.display()))?;

    info!(
        "Loaded project '{}' with {} module(s)",
        project.project_name,
        project.modules.len()
    );

    // Validate
    let validation = validate_modules(&project.modules);

    for warning in &validation.warnings {
        warn!("{}", warning);
    }

    for err in &validation.errors {
        error!("{}", err);
    }

    if !validation.passed {
        anyhow::bail!("Validation failed");
    }

    // Validate-only mode
    if args.validate {
        info!("Validation passed");
        return Ok(());
    }

    let result = estimate_project(&project, &settings);

    if let Some(output) = &args.output {
        let json = serde_json::to_string_pretty(&result)?;
        std::fs::write(output, json)
            .with_context(|| format!("Failed to write {}", output.display()))?;
        info!("Wrote: {}", output.display());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_quote(&project, &result));
    }

    Ok(())
}

/// Render the quote as a plain-text table.
fn render_quote(project: &Project, result: &QuoteResult) -> String {
    let mut out = String::new();

    writeln!(out, "Orçamento: {}", project.project_name).unwrap();
    if !project.client_name.is_empty() {
        writeln!(out, "Cliente: {}", project.client_name).unwrap();
    }
    writeln!(out).unwrap();

    writeln!(
        out,
        "{:<36} {:>9} {:<6} {:>9} {:>11}",
        "Material", "Qtd", "Un", "Preço", "Total"
    )
    .unwrap();
    for item in &result.material_list {
        writeln!(
            out,
            "{:<36} {:>9.2} {:<6} {:>9.2} {:>11.2}",
            item.name, item.quantity, item.unit, item.unit_price, item.total_price
        )
        .unwrap();
    }
    writeln!(out).unwrap();

    writeln!(out, "Mão de obra:       R$ {:.2}", result.labor_cost).unwrap();
    writeln!(out, "Custo total:       R$ {:.2}", result.total_cost).unwrap();
    writeln!(out, "Preço sugerido:    R$ {:.2}", result.suggested_price).unwrap();
    writeln!(out, "Prazo de produção: {} dia(s)", result.production_time_days).unwrap();

    if !result.observations.is_empty() {
        writeln!(out).unwrap();
        writeln!(out, "Observações:").unwrap();
        for observation in &result.observations {
            writeln!(out, "- {}", observation).unwrap();
        }
    }

    out
}
