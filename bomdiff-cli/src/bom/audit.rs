//! Negative-quantity line audit
//!
//! Lists raw lines with a negative quantity before any absolute-value
//! normalization, so reversal/credit lines can be reviewed. SuiteQL only.

use anyhow::{Context, Result};

use super::lines::lines_from_rows;
use super::models::LineRecord;
use crate::api::ErpApi;
use crate::api::query::negative_lines_query;
use crate::input::dedup_ids;

/// Negative lines of `ids`, ordered by record then item name
pub async fn negative_lines(api: &dyn ErpApi, ids: &[i64]) -> Result<Vec<LineRecord>> {
    let ids = dedup_ids(ids);
    if ids.is_empty() {
        return Ok(Vec::new());
    }

    let rows = api
        .suiteql(&negative_lines_query(&ids))
        .await
        .context("Failed to query negative line quantities")?;

    let lines = lines_from_rows(&rows);
    if lines.is_empty() {
        log::info!("No negative line quantities in {} orders", ids.len());
    } else {
        log::info!("{} negative line quantities in {} orders", lines.len(), ids.len());
    }
    Ok(lines)
}
