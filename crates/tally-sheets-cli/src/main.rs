//! Tally Sheets CLI - evaluate spreadsheet formulas from the command line

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tally_sheets::prelude::*;
use tally_sheets::{evaluate_formula, tokenize};

#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about = "Spreadsheet formula evaluator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a formula, optionally against cells defined first
    #[command(alias = "e")]
    Eval {
        /// Formula text, e.g. "(A1 + 2) * 3"
        formula: String,

        /// Cell definition LABEL=FORMULA, calculated in the order given
        #[arg(short, long = "cell", value_name = "LABEL=FORMULA")]
        cells: Vec<String>,

        /// Print the outcome as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the tokens a formula splits into
    Tokens {
        /// Formula text
        formula: String,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Eval {
            formula,
            cells,
            json,
        } => eval(&formula, &cells, json),
        Commands::Tokens { formula } => show_tokens(&formula),
    }
}

fn eval(formula: &str, cells: &[String], json: bool) -> Result<()> {
    let memory = build_memory(cells)?;

    let tokens = tokenize(formula).with_context(|| format!("Failed to tokenize '{}'", formula))?;
    let outcome = evaluate_formula(&tokens, &memory);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if json {
        // JSON has no infinity, so non-finite results go out as text
        let result = if outcome.result().is_finite() {
            serde_json::json!(outcome.result())
        } else {
            serde_json::json!(format_number(outcome.result()))
        };
        let value = serde_json::json!({
            "result": result,
            "error": outcome.error_str(),
        });
        writeln!(out, "{}", value)?;
    } else {
        writeln!(out, "{}", format_number(outcome.result()))?;
        if outcome.is_error() {
            writeln!(out, "error: {}", outcome.error_str())?;
        }
    }

    Ok(())
}

/// Assign and calculate each `LABEL=FORMULA` definition in turn
fn build_memory(cells: &[String]) -> Result<SheetMemory> {
    let mut memory = SheetMemory::new();

    for definition in cells {
        let Some((label, text)) = definition.split_once('=') else {
            bail!("Cell definition '{}' must look like LABEL=FORMULA", definition);
        };
        let label = label.trim();

        memory
            .set_cell_formula_text(label, text)
            .with_context(|| format!("Invalid cell definition '{}'", definition))?;
        let outcome = memory
            .calculate_cell(label)
            .with_context(|| format!("Failed to calculate {}", label))?;

        if outcome.is_error() {
            log::warn!("{} = {} ({})", label, outcome.result(), outcome.error_str());
        }
    }

    Ok(memory)
}

fn show_tokens(formula: &str) -> Result<()> {
    let tokens = tokenize(formula).with_context(|| format!("Failed to tokenize '{}'", formula))?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for token in tokens {
        writeln!(out, "{}", token)?;
    }

    Ok(())
}

/// Render a result the way a cell would show it
fn format_number(value: f64) -> String {
    if value == f64::INFINITY {
        "Infinity".to_string()
    } else if value == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}
