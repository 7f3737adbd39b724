//! Print ranked picker suggestions for a query
//!
//! Run: cargo run --bin sift -- options.json "mo"
//!
//! The options file is a JSON array of `{"value", "label", "searchTerms", "searchImportance"}`
//! objects. Without a query every option is printed in file order.

use anyhow::Context;
use clap::Parser;
use sift::{options, SelectSearch};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "sift", version, about = "Ranked autocomplete over a picker option list")]
struct Args {
    /// JSON file with the option list
    options: PathBuf,

    /// Search term; omit to list every option
    query: Option<String>,

    /// Print at most this many rows
    #[arg(short, long)]
    limit: Option<usize>,

    /// Log at info level (RUST_LOG overrides)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let options = options::from_json_file(&args.options)
        .with_context(|| format!("loading options from {}", args.options.display()))?;

    let mut search = SelectSearch::new(options);
    search.set_search_term(args.query.unwrap_or_default());

    let results = search.results_with_limit(args.limit.unwrap_or(usize::MAX));
    tracing::info!(
        query = search.search_term(),
        options = search.options().len(),
        rows = results.len(),
        "search complete"
    );

    for option in results {
        println!("{}\t{}", option.value, option.label);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
