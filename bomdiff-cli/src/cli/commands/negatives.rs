//! `negatives`: audit raw negative-quantity lines

use anyhow::Result;

use super::print_lines;
use crate::cli::NegativesArgs;
use bomdiff_cli::BomDiffError;
use bomdiff_cli::api::SuiteTalkClient;
use bomdiff_cli::bom::negative_lines;
use bomdiff_cli::input::parse_id_list;

pub async fn handle_negatives_command(args: NegativesArgs) -> Result<()> {
    let ids = parse_id_list(&args.ids)?;
    if ids.is_empty() {
        return Err(BomDiffError::EmptyGroup("--ids").into());
    }
    let client = SuiteTalkClient::from_env()?;

    let lines = negative_lines(&client, &ids).await?;
    if lines.is_empty() {
        println!("No negative line quantities in these SOs.");
    } else {
        println!("Negative line quantities (raw, before abs):");
        print_lines(&lines);
    }

    Ok(())
}
