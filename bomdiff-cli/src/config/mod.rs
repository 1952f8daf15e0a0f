//! Configuration: credentials, .env discovery and per-run options

pub mod credentials;
pub mod env_file;
pub mod options;

pub use credentials::{Credentials, mask_secret};
pub use env_file::{env_file_candidates, find_env_file, load_env_file};
pub use options::{DEFAULT_CSV_NAME, RunOptions};
