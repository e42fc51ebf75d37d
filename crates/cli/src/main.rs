//! `blend` — fetch and page through the phonics content from a terminal.
//!
//! A thin consumer of the library crates: loads configuration, builds the
//! fetcher, runs one query and prints the result. The flashcard-style
//! presentation lives elsewhere; this exists for checking what the sheets
//! currently say.

use std::path::PathBuf;
use std::sync::Arc;

use blend_cache::DataCache;
use blend_config::Config;
use blend_fetch::{FetchOutcome, Fetcher, HttpSource};
use blend_sheet::select;
use clap::{Parser, Subcommand};
use miette::Result;

#[derive(Debug, Parser)]
#[command(name = "blend", about = "Phonics flashcard content, straight from the sheets", version)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fetch everything and dump it as JSON
    Fetch {
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Print the GPCs for a set selection
    Gpc {
        /// Set number to practice
        #[arg(long)]
        set: u32,
        /// Include every set up to and including the chosen one
        #[arg(long)]
        cumulative: bool,
    },
    /// Print the decodable practice words for a set selection
    Words {
        /// Set number to practice
        #[arg(long)]
        set: u32,
        /// Include every set up to and including the chosen one
        #[arg(long)]
        cumulative: bool,
    },
    /// Print the high-frequency words for a set selection
    Hfw {
        /// Set number to practice
        #[arg(long)]
        set: u32,
        /// Include every set up to and including the chosen one
        #[arg(long)]
        cumulative: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter(tracing_subscriber::EnvFilter::from_default_env()).init();
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).map_err(report)?;
    let fetcher = fetcher(&config).map_err(report)?;
    let outcome = fetcher.get().await.map_err(report)?;
    tracing::debug!(from_cache = outcome.from_cache, "phonics data ready");

    run(cli.command, &outcome)
}

fn fetcher(config: &Config) -> blend_fetch::error::Result<Fetcher> {
    let timeout = config.request_timeout();
    let sets = Arc::new(HttpSource::new("sets", config.sets_url.as_str(), timeout)?);
    let words = Arc::new(HttpSource::new("words", config.words_url.as_str(), timeout)?);
    Ok(Fetcher::new(sets, words, DataCache::new(config.cache_ttl())))
}

fn run(command: Command, outcome: &FetchOutcome) -> Result<()> {
    let data = &outcome.data;
    match command {
        Command::Fetch { pretty } => {
            let json = if pretty {
                serde_json::to_string_pretty(data)
            } else {
                serde_json::to_string(data)
            }
            .map_err(report)?;
            println!("{json}");
        },
        Command::Gpc { set, cumulative } => {
            let sets = if cumulative {
                select::cumulative_sets(&data.phonics_sets, set)
            } else {
                select::set_by_number(&data.phonics_sets, set).into_iter().collect()
            };
            if sets.is_empty() {
                return Err(not_found(set));
            }
            for phonics_set in sets {
                println!("{}: {}", phonics_set.set_id, phonics_set.gpc_list.join(" "));
            }
        },
        Command::Words { set, cumulative } => {
            if cumulative {
                let words = select::cumulative_words(&data.practice_words, set);
                if words.is_empty() {
                    return Err(not_found(set));
                }
                for word in words {
                    println!("{word}");
                }
            } else {
                let words = select::words_by_set_number(&data.practice_words, set).ok_or_else(|| not_found(set))?;
                for word in &words.words {
                    println!("{word}");
                }
            }
        },
        Command::Hfw { set, cumulative } => {
            let sets = if cumulative {
                select::cumulative_sets(&data.phonics_sets, set)
            } else {
                select::set_by_number(&data.phonics_sets, set).into_iter().collect()
            };
            if sets.is_empty() {
                return Err(not_found(set));
            }
            for phonics_set in sets {
                for word in &phonics_set.hfw_list {
                    println!("{word}");
                }
            }
        },
    }
    Ok(())
}

fn report(error: impl std::fmt::Display) -> miette::Report {
    miette::miette!("{error}")
}

fn not_found(set: u32) -> miette::Report {
    miette::miette!("no such set: {set}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn cumulative_flag_defaults_off() {
        let cli = Cli::parse_from(["blend", "gpc", "--set", "3"]);
        assert!(matches!(cli.command, Command::Gpc { set: 3, cumulative: false }));
    }

    #[test]
    fn config_path_is_global() {
        let cli = Cli::parse_from(["blend", "fetch", "--config", "/tmp/blend.toml"]);
        assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/blend.toml")));
    }
}
