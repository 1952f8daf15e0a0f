//! .env discovery
//!
//! Search order: app-bundle resources next to the executable, the executable's
//! own directory, then the current working directory. The first file found wins
//! and already-set process variables are left untouched.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const ENV_FILE_NAME: &str = ".env";

/// Candidate .env locations in priority order
pub fn env_file_candidates(exe: Option<&Path>, cwd: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    if let Some(exe_dir) = exe.and_then(Path::parent) {
        // <App>.app/Contents/MacOS/<exe> -> <App>.app/Contents/Resources/.env
        if let Some(contents) = exe_dir.parent() {
            candidates.push(contents.join("Resources").join(ENV_FILE_NAME));
        }
        candidates.push(exe_dir.join(ENV_FILE_NAME));
    }

    if let Some(cwd) = cwd {
        candidates.push(cwd.join(ENV_FILE_NAME));
    }

    candidates
}

/// First candidate that exists as a regular file
pub fn find_env_file(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates.iter().find(|p| p.is_file()).cloned()
}

/// Locate and load the .env file; returns the path that was loaded, if any
pub fn load_env_file() -> Result<Option<PathBuf>> {
    let exe = std::env::current_exe().ok();
    let cwd = std::env::current_dir().ok();
    let candidates = env_file_candidates(exe.as_deref(), cwd.as_deref());

    let Some(path) = find_env_file(&candidates) else {
        log::debug!("No .env file found in {} candidate locations", candidates.len());
        return Ok(None);
    };

    // from_path never overrides variables already present in the process
    dotenvy::from_path(&path)
        .with_context(|| format!("Failed to load env file: {}", path.display()))?;
    log::info!("Loaded environment from {}", path.display());

    Ok(Some(path))
}
