use clap::Parser;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use meal_totals::cli::{Cli, Command};
use meal_totals::error::Result;
use meal_totals::interface::{confirm_overwrite, display_summary, display_value_issues};
use meal_totals::storage::{
    ensure_distinct, is_stdio, load_meal_plan, save_enhanced, write_meal_csv,
};
use meal_totals::totals::{enhance_with_policy, find_value_issues, totals_by_meal, ValuePolicy};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout stays clean for JSON output.
fn init_logging(verbose: bool) {
    let default = if verbose { "meal_totals=debug" } else { "meal_totals=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Totals {
            output,
            compact,
            force,
        } => cmd_totals(&cli.file, cli.policy, output.as_deref(), !compact, force),
        Command::Summary => cmd_summary(&cli.file, cli.policy),
        Command::ExportCsv { output, force } => cmd_export_csv(&cli.file, cli.policy, &output, force),
        Command::Check => cmd_check(&cli.file),
    }
}

/// Write the plan with totals attached.
fn cmd_totals(
    file: &Path,
    policy: ValuePolicy,
    output: Option<&Path>,
    pretty: bool,
    force: bool,
) -> Result<()> {
    let plan = load_meal_plan(file)?;
    let enhanced = enhance_with_policy(&plan, policy)?;

    if let Some(path) = output.filter(|p| !is_stdio(p)) {
        ensure_distinct(file, path)?;
        if !confirm_overwrite(path, force)? {
            eprintln!("Not overwriting {}.", path.display());
            return Ok(());
        }
    }

    save_enhanced(output, &enhanced, pretty)?;

    if let Some(path) = output.filter(|p| !is_stdio(p)) {
        eprintln!("Totals written to {}", path.display());
    }

    Ok(())
}

/// Print per-meal and plan totals.
fn cmd_summary(file: &Path, policy: ValuePolicy) -> Result<()> {
    let plan = load_meal_plan(file)?;
    let enhanced = enhance_with_policy(&plan, policy)?;
    let per_meal = totals_by_meal(&plan);

    display_summary(&enhanced, &per_meal);
    Ok(())
}

/// Export per-meal totals to CSV.
fn cmd_export_csv(file: &Path, policy: ValuePolicy, output: &Path, force: bool) -> Result<()> {
    let plan = load_meal_plan(file)?;
    // Policy check only; the CSV is built from per-meal sums.
    enhance_with_policy(&plan, policy)?;
    ensure_distinct(file, output)?;

    if !confirm_overwrite(output, force)? {
        eprintln!("Not overwriting {}.", output.display());
        return Ok(());
    }

    write_meal_csv(&plan, &totals_by_meal(&plan), output)?;
    println!("Exported {} meals to {}", plan.refeicoes.len(), output.display());
    Ok(())
}

/// Validate structure and report unreadable nutrient values.
fn cmd_check(file: &Path) -> Result<()> {
    let plan = load_meal_plan(file)?;

    println!(
        "Meal plan OK: {} meals, {} items",
        plan.refeicoes.len(),
        plan.item_count()
    );
    display_value_issues(&find_value_issues(&plan));
    Ok(())
}
