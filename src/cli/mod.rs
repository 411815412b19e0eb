//! Command-line driver: a minimal text front end over the store.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{execute, format_category_line, format_fact_view};

#[derive(Parser, Debug)]
#[command(name = "animal-facts", version, about = "Browse animal facts from the command line")]
pub struct Cli {
    #[arg(long, global = true, help = "Path to config.toml (default: platform config dir)")]
    pub config: Option<PathBuf>,
    #[arg(long, global = true, help = "Override the feed base URL")]
    pub base_url: Option<String>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List categories.
    List {
        #[arg(long, help = "Ignore the freshness window and fetch now")]
        refresh: bool,
    },
    /// Show a fact from a category.
    Facts {
        /// Category title (case-insensitive).
        title: String,
        #[arg(long, allow_negative_numbers = true, help = "Fact index (clamped to the valid range)")]
        index: Option<i64>,
        #[arg(long, help = "Watch an ad to unlock a premium category")]
        watch_ad: bool,
    },
    /// Print the share text for a fact.
    Share {
        title: String,
        #[arg(long, allow_negative_numbers = true)]
        index: Option<i64>,
        #[arg(long)]
        watch_ad: bool,
    },
    /// Remove cached categories and forget the last refresh.
    ClearCache,
}
