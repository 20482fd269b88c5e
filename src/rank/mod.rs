//! Reviewer ranking: aggregation of per-file history and top-N selection.

use indexmap::IndexMap;

use crate::constants::OTHERS_PREVIEW;
use crate::models::{Candidate, FileHistory, IgnoreList, Selection};

/// Merge per-file history results into a ranked candidate list.
///
/// Records are flattened across files and grouped by identity in encounter
/// order; commit counts for repeat identities add. Identities matching the
/// ignore list are dropped, then the groups are sorted by total commits
/// descending. The sort is stable, so ties keep their encounter order.
pub fn aggregate(histories: &[FileHistory], ignore: &IgnoreList) -> Vec<Candidate> {
    let mut tally: IndexMap<&str, u32> = IndexMap::new();
    for history in histories {
        for record in history.records() {
            *tally.entry(record.identity.as_str()).or_insert(0) += record.commits;
        }
    }

    let mut ranked: Vec<Candidate> = tally
        .into_iter()
        .filter(|(identity, _)| !ignore.matches(identity))
        .map(|(identity, commits)| Candidate::new(identity, commits))
        .collect();
    ranked.sort_by(|a, b| b.commits.cmp(&a.commits));

    ranked
}

/// Split the ranked list into highlighted picks and the remainder.
///
/// `selected` is the first `min(num, len)` entries in rank order. The
/// remainder is truncated to the first [`OTHERS_PREVIEW`] entries unless
/// `show_all` is set.
pub fn select(ranked: Vec<Candidate>, num: usize, show_all: bool) -> Selection {
    let cut = num.min(ranked.len());
    let mut selected = ranked;
    let mut others = selected.split_off(cut);
    if !show_all {
        others.truncate(OTHERS_PREVIEW);
    }
    Selection { selected, others }
}
