//! `probe`: connectivity and catalog access check

use anyhow::Result;
use colored::*;

use bomdiff_cli::api::SuiteTalkClient;
use bomdiff_cli::bom::{check_connectivity, probe_catalogs};

pub async fn handle_probe_command() -> Result<()> {
    let client = SuiteTalkClient::from_env()?;

    check_connectivity(&client).await?;
    println!("SuiteQL {}", "ok".bright_green());

    let probe = probe_catalogs(&client).await;
    for table in &probe.accessible {
        println!("  {} {}", "✓".green(), table);
    }
    for table in &probe.inaccessible {
        println!("  {} {}", "✗".red(), table);
    }
    println!("Retrieval mode: {}", probe.mode().to_string().bright_green().bold());

    Ok(())
}
