//! App-wide constants.
//!
//! Centralises the tool name and pipeline limits so a rename or tuning
//! change only requires changing this file.

/// Display name of the tool (lowercase).
pub const APP_NAME: &str = "revu";

/// Maximum number of changed files queried for history per run.
///
/// Larger change sets are reduced to a random sample of this size to
/// bound subprocess cost.
pub const SAMPLE_CAP: usize = 150;

/// How many non-selected candidates are shown without `--all`.
pub const OTHERS_PREVIEW: usize = 5;

/// Upper bound on concurrently running `git shortlog` subprocesses.
pub const MAX_CONCURRENT_QUERIES: usize = 16;
