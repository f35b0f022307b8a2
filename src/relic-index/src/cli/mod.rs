//! CLI argument definitions for relic-index

use clap::{Parser, Subcommand};
use relic_engine::{BatchStrategy, Refinement};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "relic-index")]
#[command(about = "Build and inspect relic drop/price indexes", long_about = None)]
pub struct Cli {
    /// Config file (defaults to <config dir>/relic-index/config.toml)
    #[arg(long, global = true, env = "RELIC_INDEX_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape drop tables, prices and the export manifest into an index file
    #[command(visible_alias = "b")]
    Build {
        /// Output path (overrides the configured one)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write relic_data.json and set_data.json reports for an index
    #[command(visible_alias = "r")]
    Report {
        /// Index file or URL
        #[arg(short, long)]
        index: String,

        /// Directory to write the reports into
        #[arg(short = 'd', long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Download a published index and store it locally
    #[command(visible_alias = "f")]
    Fetch {
        /// Index URL
        #[arg(short, long)]
        url: String,

        /// Where to write the index
        #[arg(short, long, default_value = "index.json.gz")]
        output: PathBuf,
    },

    /// Expected return of one relic
    #[command(visible_alias = "v")]
    Value {
        /// Index file or URL
        #[arg(short, long)]
        index: String,

        /// Relic name, e.g. "Axi A1"
        relic: String,

        /// Refinement (intact, exceptional, flawless, radiant or i/e/f/r)
        #[arg(short, long, default_value_t = Refinement::Radiant)]
        refinement: Refinement,

        /// Run style (solo, 1b1, 2b2, 3b3, 4b4, 8b8)
        #[arg(short, long, default_value_t = BatchStrategy::FourByFour)]
        strategy: BatchStrategy,
    },

    /// Show the active configuration
    #[command(visible_alias = "c")]
    Configure {
        /// Write the defaults to the config file if it doesn't exist
        #[arg(long)]
        init: bool,
    },
}
