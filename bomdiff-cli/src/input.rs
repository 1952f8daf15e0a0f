//! Parsing of free-text ID lists

use std::collections::HashSet;

use crate::error::BomDiffError;

/// Parse comma- and/or newline-separated sales order internal IDs.
///
/// Blank tokens are ignored; any other token must be ASCII digits only.
/// Repeated IDs are kept once, at their first position.
pub fn parse_id_list(text: &str) -> Result<Vec<i64>, BomDiffError> {
    let mut ids = Vec::new();
    for part in text.split([',', '\n']) {
        let part = part.trim();
        if part.is_empty() {
            continue;
        }
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(BomDiffError::InvalidId(part.to_string()));
        }
        let id = part
            .parse::<i64>()
            .map_err(|_| BomDiffError::InvalidId(part.to_string()))?;
        ids.push(id);
    }
    Ok(dedup_ids(&ids))
}

/// Drop repeated IDs, keeping first-seen order
pub fn dedup_ids(ids: &[i64]) -> Vec<i64> {
    let mut seen = HashSet::with_capacity(ids.len());
    ids.iter().copied().filter(|id| seen.insert(*id)).collect()
}

/// Parse both groups, rejecting an empty one before any network activity
pub fn parse_groups(group_a: &str, group_b: &str) -> Result<(Vec<i64>, Vec<i64>), BomDiffError> {
    let a = parse_id_list(group_a)?;
    let b = parse_id_list(group_b)?;
    if a.is_empty() {
        return Err(BomDiffError::EmptyGroup("Group A"));
    }
    if b.is_empty() {
        return Err(BomDiffError::EmptyGroup("Group B"));
    }
    Ok((a, b))
}
