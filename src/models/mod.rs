//! Core data types for the reviewer-suggestion pipeline.

/// One author's commit count for a single file, parsed from history output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRecord {
    /// Number of commits by this author touching the file.
    pub commits: u32,
    /// Display identity, typically `Name <email>`.
    pub identity: String,
}

/// Outcome of a history query for one file.
///
/// A failed query is distinguishable from a file with no history so that
/// callers can report it without aborting the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileHistory {
    /// The query succeeded; the file may still have zero records.
    Records(Vec<CommitRecord>),
    /// The query failed (file untracked, removed, or subprocess error).
    QueryFailed(String),
}

impl FileHistory {
    /// Records contributed by this file. A failed query contributes none.
    pub fn records(&self) -> &[CommitRecord] {
        match self {
            FileHistory::Records(records) => records,
            FileHistory::QueryFailed(_) => &[],
        }
    }
}

/// A ranked reviewer candidate: identity plus aggregated commit count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub identity: String,
    pub commits: u32,
}

impl Candidate {
    pub fn new(identity: impl Into<String>, commits: u32) -> Self {
        Self {
            identity: identity.into(),
            commits,
        }
    }
}

/// The ranked list split for presentation: highlighted picks and the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Top-ranked candidates, in rank order.
    pub selected: Vec<Candidate>,
    /// Remaining candidates, possibly truncated for display.
    pub others: Vec<Candidate>,
}

/// Identity substrings excluded from the ranking.
///
/// Always contains the invoking user's identity; `--ignore` terms are
/// appended. Matching is plain substring containment against the
/// candidate's display identity.
#[derive(Debug, Clone)]
pub struct IgnoreList {
    terms: Vec<String>,
}

impl IgnoreList {
    /// Build the list from the detected user plus extra terms.
    ///
    /// Empty terms (e.g. from trailing commas in `--ignore`) are dropped.
    pub fn new(user: &str, extra: impl IntoIterator<Item = String>) -> Self {
        let terms = std::iter::once(user.to_string())
            .chain(extra)
            .filter(|term| !term.is_empty())
            .collect();
        Self { terms }
    }

    /// Returns `true` if `identity` contains any ignore term as a substring.
    pub fn matches(&self, identity: &str) -> bool {
        self.terms.iter().any(|term| identity.contains(term))
    }

    /// The active filter terms.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }
}
