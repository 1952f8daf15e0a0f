//! `verify`: resolve both groups' IDs without diffing

use anyhow::Result;
use colored::*;

use crate::cli::GroupArgs;
use bomdiff_cli::api::SuiteTalkClient;
use bomdiff_cli::bom::{Group, check_connectivity, select_mode, verify_sales_orders};
use bomdiff_cli::input::parse_groups;

pub async fn handle_verify_command(args: GroupArgs) -> Result<()> {
    let (group_a, group_b) = parse_groups(&args.group_a, &args.group_b)?;
    let client = SuiteTalkClient::from_env()?;

    check_connectivity(&client).await?;
    let mode = select_mode(&client).await;
    println!("Retrieval mode: {}", mode.to_string().bright_green().bold());

    for (group, ids) in [(Group::A, &group_a), (Group::B, &group_b)] {
        let report = verify_sales_orders(&client, mode, ids, group.label()).await?;
        let marker = if report.all_found() { "✓".green() } else { "✗".red() };
        println!("{} {}", marker, report);
    }

    Ok(())
}
