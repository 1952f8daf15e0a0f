//! `run`: compute and write the A minus B diff

use anyhow::{Context, Result};
use colored::*;

use super::print_lines;
use crate::cli::RunArgs;
use bomdiff_cli::api::SuiteTalkClient;
use bomdiff_cli::config::{DEFAULT_CSV_NAME, RunOptions};
use bomdiff_cli::export::XlsxSkip;
use bomdiff_cli::input::parse_groups;
use bomdiff_cli::run_diff;

pub async fn handle_run_command(args: RunArgs) -> Result<()> {
    // Input and credential problems surface before any request is made
    let (group_a, group_b) = parse_groups(&args.groups.group_a, &args.groups.group_b)?;
    let client = SuiteTalkClient::from_env()?;

    let csv_path = match args.output {
        Some(path) => path,
        None => std::env::current_dir()
            .context("Failed to resolve current directory")?
            .join(DEFAULT_CSV_NAME),
    };

    let options = RunOptions {
        count_absolute_line_qty: !args.signed,
        csv_path,
        xlsx_path: args.xlsx,
        diagnostics: args.diagnostics,
    };

    println!(
        "{} {} vs {} sales orders",
        "Running...".cyan(),
        group_a.len(),
        group_b.len()
    );

    let report = run_diff(&client, &group_a, &group_b, &options).await?;

    println!("Retrieval mode: {}", report.mode.to_string().bright_green().bold());
    if !report.probe.inaccessible.is_empty() {
        println!(
            "{} SuiteQL catalog not available for: {}",
            "!".yellow(),
            report.probe.inaccessible.join(", ")
        );
    }

    for verification in &report.verification {
        println!("{}", verification);
    }

    for (group, lines) in &report.negative_lines {
        println!();
        println!("-- Negative lines in {} (raw) --", group.label());
        if lines.is_empty() {
            println!("No negative line quantities in these SOs.");
        } else {
            print_lines(lines);
        }
    }

    println!();
    println!("Rows in A - B with non-zero diff: {}", report.table.len());
    println!("Wrote outputs:");
    println!(" - {}", report.outputs.csv.display().to_string().bright_green());
    match &report.outputs.xlsx {
        Ok(path) => println!(" - {}", path.display().to_string().bright_green()),
        Err(XlsxSkip::Unavailable) => {
            println!(" - {}", "Skipped XLSX (built without spreadsheet support)".yellow())
        }
        Err(XlsxSkip::Failed(reason)) => {
            println!(" - {} {}", "Skipped XLSX:".yellow(), reason)
        }
        Err(XlsxSkip::NoPath) => {}
    }

    println!("{} {}", "Done:".bright_green().bold(), report.outputs.csv.display());
    Ok(())
}
