//! Catalog availability probe deciding the retrieval mode for a run

use anyhow::Result;

use super::models::RetrievalMode;
use crate::api::ErpApi;
use crate::api::query::{CONNECTIVITY_CHECK, REQUIRED_TABLES, table_probe_query};

/// Outcome of probing the SuiteQL tables the bulk path needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogProbe {
    pub accessible: Vec<&'static str>,
    pub inaccessible: Vec<&'static str>,
}

impl CatalogProbe {
    /// Bulk only when every required table answered
    pub fn mode(&self) -> RetrievalMode {
        if self.inaccessible.is_empty() {
            RetrievalMode::Bulk
        } else {
            RetrievalMode::Fallback
        }
    }
}

/// Run the trivial `SELECT 1 AS ok` query; failure here is fatal for the run
pub async fn check_connectivity(api: &dyn ErpApi) -> Result<()> {
    let rows = api.suiteql(CONNECTIVITY_CHECK).await?;
    log::info!("SuiteQL connectivity OK ({} row)", rows.len());
    Ok(())
}

/// Probe each required table once; any failure marks that table inaccessible
pub async fn probe_catalogs(api: &dyn ErpApi) -> CatalogProbe {
    let mut probe = CatalogProbe {
        accessible: Vec::new(),
        inaccessible: Vec::new(),
    };

    for table in REQUIRED_TABLES {
        match api.suiteql(&table_probe_query(table)).await {
            Ok(_) => probe.accessible.push(table),
            Err(e) => {
                log::debug!("Probe of \"{}\" failed: {:#}", table, e);
                probe.inaccessible.push(table);
            }
        }
    }

    if probe.inaccessible.is_empty() {
        log::info!("Record access OK for: {}", probe.accessible.join(", "));
    } else {
        log::warn!(
            "SuiteQL record catalog not available for: {}; falling back to REST Records for Sales Order lines",
            probe.inaccessible.join(", ")
        );
    }

    probe
}

/// Probe and return only the chosen mode
pub async fn select_mode(api: &dyn ErpApi) -> RetrievalMode {
    probe_catalogs(api).await.mode()
}
