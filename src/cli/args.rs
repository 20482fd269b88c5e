//! Clap argument types.

use clap::Parser;

/// Suggest code reviewers based on changed files.
///
/// Compares the working tree against a branch, samples the changed files,
/// and ranks past committers of those files by commit volume.
#[derive(Parser, Debug)]
#[command(name = revu::constants::APP_NAME, version)]
pub struct Cli {
    /// Number of reviewers to select.
    #[arg(long, default_value_t = 2)]
    pub num: usize,

    /// Branch to compare with for determining changed files.
    #[arg(long, default_value = "master")]
    pub branch: String,

    /// Comma-separated list of users to ignore from reviewers.
    /// The invoking user is always ignored.
    #[arg(long, value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// Show all possible reviewers instead of only the top 5 runners-up.
    #[arg(long, default_value_t = false)]
    pub all: bool,

    /// Print the changed-file list and the sampled subset.
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}
