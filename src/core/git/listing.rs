use super::RemoteGit;
use crate::utils::Result;
use std::collections::HashSet;

const HEAD_SUFFIX: &str = "/HEAD";
const SYMREF_ARROW: &str = " -> ";

pub fn list_remote_branches<G: RemoteGit + ?Sized>(git: &G) -> Result<Vec<String>> {
    let output = git.remote_branch_listing()?;
    let branches = parse_remote_branch_listing(&output);
    tracing::debug!(count = branches.len(), "listed remote branches");
    Ok(branches)
}

/// Trimmed, non-blank lines in listing order, without the symbolic HEAD pointer.
pub fn parse_remote_branch_listing(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| !is_head_pointer(line))
        .map(str::to_string)
        .collect()
}

pub fn parse_merged_listing(output: &str) -> HashSet<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

fn is_head_pointer(line: &str) -> bool {
    let reference = line
        .split_once(SYMREF_ARROW)
        .map(|(reference, _)| reference)
        .unwrap_or(line);
    reference.trim_end().ends_with(HEAD_SUFFIX)
}
