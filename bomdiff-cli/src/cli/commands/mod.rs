//! Command handlers

pub mod env;
pub mod negatives;
pub mod probe;
pub mod run;
pub mod verify;

use colored::*;

use bomdiff_cli::bom::LineRecord;

/// Print lines as an aligned table
pub(crate) fn print_lines(lines: &[LineRecord]) {
    let header = format!(
        "  {:>10}  {:>10}  {:<32}  {:>10}",
        "so_id", "item_id", "item_name", "line_qty"
    );
    println!("{}", header.bold());
    for line in lines {
        let item_id = line.item_id.map(|id| id.to_string()).unwrap_or_default();
        println!(
            "  {:>10}  {:>10}  {:<32}  {:>10}",
            line.record_id, item_id, line.item_name, line.quantity
        );
    }
}
