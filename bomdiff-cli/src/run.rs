//! End-to-end diff run

use anyhow::{Context, Result};

use crate::api::ErpApi;
use crate::bom::{
    CatalogProbe, DiffTable, Group, LineRecord, RetrievalMode, VerificationReport,
    check_connectivity, compare_groups, negative_lines, probe_catalogs, verify_sales_orders,
};
use crate::config::RunOptions;
use crate::error::BomDiffError;
use crate::export::{WrittenOutputs, write_outputs};

/// What a completed run did
#[derive(Debug, Clone)]
pub struct RunReport {
    pub probe: CatalogProbe,
    pub mode: RetrievalMode,
    /// One report per group whose verification succeeded
    pub verification: Vec<VerificationReport>,
    /// Negative-line audit per group (diagnostics in bulk mode only)
    pub negative_lines: Vec<(Group, Vec<LineRecord>)>,
    pub table: DiffTable,
    pub outputs: WrittenOutputs,
}

/// Compute A minus B for two groups of sales orders and write the outputs.
///
/// The retrieval mode is decided once from the catalog probe and used for
/// both groups. Verification and the negative-line audit are diagnostic and
/// never stop the run; retrieval and CSV failures do.
pub async fn run_diff(
    api: &dyn ErpApi,
    group_a: &[i64],
    group_b: &[i64],
    options: &RunOptions,
) -> Result<RunReport> {
    if group_a.is_empty() {
        return Err(BomDiffError::EmptyGroup(Group::A.label()).into());
    }
    if group_b.is_empty() {
        return Err(BomDiffError::EmptyGroup(Group::B.label()).into());
    }

    check_connectivity(api)
        .await
        .context("SuiteQL connectivity check failed")?;

    let probe = probe_catalogs(api).await;
    let mode = probe.mode();
    log::info!("Retrieval mode: {}", mode);

    let mut verification = Vec::new();
    for (group, ids) in [(Group::A, group_a), (Group::B, group_b)] {
        match verify_sales_orders(api, mode, ids, group.label()).await {
            Ok(report) => verification.push(report),
            Err(e) => log::warn!("{} verification failed: {:#}", group.label(), e),
        }
    }

    let mut negatives = Vec::new();
    if options.diagnostics {
        match mode {
            RetrievalMode::Bulk => {
                for (group, ids) in [(Group::A, group_a), (Group::B, group_b)] {
                    match negative_lines(api, ids).await {
                        Ok(lines) => negatives.push((group, lines)),
                        Err(e) => log::warn!("{} negative-line audit failed: {:#}", group.label(), e),
                    }
                }
            }
            RetrievalMode::Fallback => {
                log::info!("Negative-line audit needs SuiteQL; skipped in {} mode", mode)
            }
        }
    }

    let table = compare_groups(api, mode, group_a, group_b, options.count_absolute_line_qty).await?;

    let outputs = write_outputs(&table, &options.csv_path, options.xlsx_path.as_deref())?;

    Ok(RunReport {
        probe,
        mode,
        verification,
        negative_lines: negatives,
        table,
        outputs,
    })
}
