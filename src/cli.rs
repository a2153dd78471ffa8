use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::totals::ValuePolicy;

/// meal_totals — Sum calories and macronutrients across a meal plan.
#[derive(Parser, Debug)]
#[command(name = "meal_totals")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the meal plan JSON file ("-" reads stdin).
    #[arg(short, long, default_value = "meal_plan.json")]
    pub file: PathBuf,

    /// How to treat nutrient values that are present but not numeric.
    #[arg(long, value_enum, default_value_t = ValuePolicy::Zero)]
    pub policy: ValuePolicy,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write the meal plan with its `totalizers` attached.
    Totals {
        /// Output file (stdout when omitted).
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit single-line JSON instead of pretty-printed.
        #[arg(long)]
        compact: bool,

        /// Overwrite the output file without asking.
        #[arg(long)]
        force: bool,
    },

    /// Print a per-meal totals table.
    Summary,

    /// Export per-meal totals to CSV.
    ExportCsv {
        /// Output CSV file.
        #[arg(short, long)]
        output: PathBuf,

        /// Overwrite the output file without asking.
        #[arg(long)]
        force: bool,
    },

    /// Validate the plan and list non-numeric nutrient values.
    Check,
}

impl Default for Command {
    fn default() -> Self {
        Command::Totals {
            output: None,
            compact: false,
            force: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["meal_totals"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.file, PathBuf::from("meal_plan.json"));
        assert_eq!(cli.policy, ValuePolicy::Zero);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_totals_with_options() {
        let cli = Cli::parse_from([
            "meal_totals",
            "--file",
            "-",
            "--policy",
            "reject",
            "totals",
            "--output",
            "out.json",
            "--compact",
        ]);
        assert_eq!(cli.policy, ValuePolicy::Reject);
        match cli.command {
            Some(Command::Totals { output, compact, force }) => {
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert!(compact);
                assert!(!force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_export_csv_requires_output() {
        assert!(Cli::try_parse_from(["meal_totals", "export-csv"]).is_err());
    }
}
