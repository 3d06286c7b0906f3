use std::fs;
use std::path::Path;

use clap::Parser;

use lang_stats::cli::Cli;
use lang_stats::config::{Config, Credentials};
use lang_stats::github::{self, GithubTransport};
use lang_stats::output::{LanguageChart, LanguageTable, Theme};
use lang_stats::readme::update_readme;
use lang_stats::stats::aggregate;
use lang_stats::{EXIT_API_ERROR, EXIT_CONFIG_ERROR, EXIT_SUCCESS};

const LIGHT_SVG_FILE: &str = "languages-light.svg";
const DARK_SVG_FILE: &str = "languages-dark.svg";

fn main() {
    let cli = Cli::parse();

    let exit_code = match run_impl(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_config() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_API_ERROR
            }
        }
    };

    std::process::exit(exit_code);
}

fn run_impl(cli: &Cli) -> lang_stats::Result<()> {
    // 1. Load configuration and credentials (before any network activity)
    let config = load_config(cli.config.as_deref())?;
    let credentials = Credentials::from_env()?;

    // 2. Fetch the complete repository set, one blocking request per page
    let transport = GithubTransport::new(&credentials.token)?;
    let repositories = github::fetch_repositories(&credentials.login, &transport)?;

    // 3. Aggregate language edges into per-language totals
    let totals = aggregate(&repositories, &config.filters());

    // 4. Write both SVG variants
    fs::create_dir_all(&config.assets_dir)?;
    let chart = LanguageChart::new(config.max_rows);
    fs::write(
        config.assets_dir.join(LIGHT_SVG_FILE),
        chart.render(&totals, Theme::LIGHT),
    )?;
    fs::write(
        config.assets_dir.join(DARK_SVG_FILE),
        chart.render(&totals, Theme::DARK),
    )?;

    // 5. Patch the README marker region with the rendered table
    let table = LanguageTable::new(config.max_rows).render(&totals);
    update_readme(&config.readme, &table)?;

    if !cli.quiet {
        println!(
            "Updated {} and {} with {} language(s) across {} repositories",
            config.readme.display(),
            config.assets_dir.display(),
            totals.len(),
            repositories.len()
        );
    }

    Ok(())
}

fn load_config(config_path: Option<&Path>) -> lang_stats::Result<Config> {
    config_path.map_or_else(Config::discover, Config::load_from_path)
}
