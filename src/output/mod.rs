//! Terminal rendering of file listings and the ranked reviewer blocks.
//!
//! Renderers build a `String` so they stay testable; printing happens at
//! the call site.

use colored::Colorize;

use crate::models::Selection;

/// Render a file listing, one `  – path` line per file, in green.
pub fn render_files(files: &[String]) -> String {
    let mut out = String::new();
    for file in files {
        out.push_str(&format!("  – {}\n", file.green()));
    }
    out
}

/// Render the reviewer suggestion blocks.
///
/// Selected candidates are printed with a green identity and yellow count;
/// the remaining candidates follow in a dimmed block. The two blocks are
/// separated by blank lines.
pub fn render_selection(selection: &Selection) -> String {
    let mut out = String::new();

    out.push('\n');
    for candidate in &selection.selected {
        out.push_str(&format!(
            "  – {}, {}\n",
            candidate.identity.green(),
            candidate.commits.to_string().yellow()
        ));
    }

    out.push('\n');
    for candidate in &selection.others {
        out.push_str(&format!(
            "  – {}\n",
            format!("{}, {}", candidate.identity, candidate.commits).dimmed()
        ));
    }

    out
}
