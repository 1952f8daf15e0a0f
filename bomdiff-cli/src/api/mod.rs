//! NetSuite API Module
//!
//! Signed access to the two endpoints the diff needs: SuiteQL for bulk
//! declarative queries and REST Records for per-record lookups.

pub mod auth;
pub mod client;
pub mod query;

pub use auth::OAuthSigner;
pub use client::{ErpApi, REQUEST_TIMEOUT, Row, SuiteTalkClient};
