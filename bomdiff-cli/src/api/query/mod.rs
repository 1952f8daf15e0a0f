//! SuiteQL query builders
//!
//! Every query the pipeline issues is built here so the shapes (aliases,
//! filters) stay in one place and can be asserted on in tests.

pub mod suiteql;

pub use suiteql::{
    CONNECTIVITY_CHECK, REQUIRED_TABLES, id_list, negative_lines_query, sales_order_lines_query,
    table_probe_query, verify_sales_orders_query,
};
