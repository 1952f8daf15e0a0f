//! Sales order BoM diff (A minus B) against NetSuite.
//!
//! The single entry point for front ends is [`run_diff`]: give it an API
//! client, two groups of sales order internal IDs and the run options, and it
//! probes the SuiteQL catalogs, retrieves lines in bulk or per record, writes
//! the diff and returns a report of what happened.

pub mod api;
pub mod bom;
pub mod config;
pub mod error;
pub mod export;
pub mod input;
mod run;

#[cfg(test)]
pub(crate) mod testing;

pub use error::BomDiffError;
pub use run::{RunReport, run_diff};
