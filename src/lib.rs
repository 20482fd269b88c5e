//! revu — suggest code reviewers from git history (library crate).
//!
//! Re-exports public modules for integration tests and external use.

pub mod constants;
pub mod git;
pub mod models;
pub mod output;
pub mod progress;
pub mod rank;
pub mod sample;
