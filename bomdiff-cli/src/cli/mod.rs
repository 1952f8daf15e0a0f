//! Command-line interface definitions

pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bomdiff-cli")]
#[command(about = "BoM diff (A - B) on NetSuite sales order line items")]
#[command(version)]
pub struct Cli {
    /// Show progress logs (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute A minus B per item and write CSV (and optionally XLSX)
    Run(RunArgs),
    /// Check that both groups' IDs resolve to sales orders
    Verify(GroupArgs),
    /// List raw negative-quantity lines of the given sales orders
    Negatives(NegativesArgs),
    /// Check SuiteQL connectivity and catalog access
    Probe,
    /// Show the loaded environment with secrets masked
    Env,
}

/// The two groups of sales order internal IDs
#[derive(Args)]
pub struct GroupArgs {
    /// Group A IDs, comma or newline separated
    #[arg(short = 'a', long)]
    pub group_a: String,

    /// Group B IDs, comma or newline separated
    #[arg(short = 'b', long)]
    pub group_b: String,
}

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub groups: GroupArgs,

    /// CSV output path (defaults to bomdiff_A_minus_B.csv in the current directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also write a spreadsheet to this path
    #[arg(long)]
    pub xlsx: Option<PathBuf>,

    /// Sum signed line quantities instead of absolute values
    #[arg(long)]
    pub signed: bool,

    /// Print the negative-line audit for both groups before diffing
    #[arg(long)]
    pub diagnostics: bool,
}

#[derive(Args)]
pub struct NegativesArgs {
    /// Sales order IDs, comma or newline separated
    #[arg(long)]
    pub ids: String,
}
