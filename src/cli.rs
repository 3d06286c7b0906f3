use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lang-stats")]
#[command(author, version, about = "Aggregate GitHub language stats into README and SVG charts")]
#[command(long_about = "Queries the GitHub GraphQL API for language byte counts across a \
    user's non-archived, non-forked repositories, then writes a markdown table into \
    README.md and a light/dark pair of SVG bar charts into assets/.\n\n\
    Required environment:\n  \
    GITHUB_TOKEN - API credential\n  \
    GITHUB_REPOSITORY_OWNER (or GITHUB_ACTOR) - login to query\n\n\
    Exit codes:\n  \
    0 - Success\n  \
    1 - API or filesystem failure\n  \
    2 - Configuration error")]
pub struct Cli {
    /// Path to a lang-stats.toml configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
