//! revu — suggest code reviewers from git history.
//!
//! Entry point and error handling boundary. Uses `anyhow` for ergonomic
//! error propagation and user-facing messages.

mod cli;

use std::env;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use cli::args::Cli;
use revu::constants::SAMPLE_CAP;
use revu::models::IgnoreList;
use revu::progress::StatusLine;
use revu::{git, output, rank, sample};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let status = StatusLine::new(true);

    let cwd = env::current_dir().context("could not determine current directory")?;
    let repo_root = git::find_repo_root(&cwd).await?;

    let username = git::active_user_name(&repo_root).await?;
    let ignore = IgnoreList::new(&username, cli.ignore);

    status.start(&format!("Getting changed files since \"{}\"", cli.branch));
    let changed = git::changed_files(&repo_root, &cli.branch)
        .await
        .context("could not determine changed files")?;
    status.succeed(&format!(
        "{} changed files since \"{}\".",
        changed.len(),
        cli.branch
    ));

    if cli.verbose {
        println!();
        println!("Changed files:");
        print!("{}", output::render_files(&changed));
    }

    let mut rng = StdRng::from_entropy();
    let sampled = sample::sample(&changed, SAMPLE_CAP, &mut rng);
    if cli.verbose {
        println!();
        println!("Sample of changed files:");
        print!("{}", output::render_files(&sampled));
        println!();
    }

    status.start(&format!(
        "Getting last committers for the changed files... [Sample size: < {SAMPLE_CAP} files]"
    ));
    let histories = git::query_histories(&repo_root, &sampled).await;
    let ranked = rank::aggregate(&histories, &ignore);
    status.succeed(&format!("{} possible reviewers selected.", ranked.len()));

    let selection = rank::select(ranked, cli.num, cli.all);
    print!("{}", output::render_selection(&selection));

    Ok(())
}
