use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

mod commands;
mod core;
mod error;
mod models;

use crate::core::load_config;
use commands::{generate_words, list_categories, GenerateOptions};
use models::ReseedPolicy;

/// wordgen - random word generator for imagined languages
#[derive(Parser)]
#[command(name = "wordgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Reference file with category/fragment line pairs
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// Seed string for deterministic draws
    #[arg(short, long, global = true)]
    seed: Option<String>,

    /// Enable debug output
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List categories from the reference file
    Categories {
        /// Also list each category's fragments
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate words from a list of category indices
    Generate {
        /// Category indices, in concatenation order (indices may repeat)
        #[arg(required = true, allow_negative_numbers = true)]
        indices: Vec<i64>,

        /// Number of words to generate
        #[arg(short = 'n', long = "count")]
        count: Option<i64>,

        /// When to reseed the random number generator
        #[arg(long, value_enum)]
        reseed: Option<ReseedPolicy>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging
    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .init();

    let current_dir = std::env::current_dir().unwrap();

    let result = match load_config(&current_dir) {
        Ok(config) => match cli.command {
            Commands::Categories { verbose } => {
                let config = config.with_overrides(cli.file, None, None);
                list_categories(&config.reference.file, verbose)
            }

            Commands::Generate {
                indices,
                count,
                reseed,
            } => {
                let config = config.with_overrides(cli.file, count, reseed);
                let options = GenerateOptions {
                    indices,
                    count: config.generation.count,
                    seed: cli.seed,
                    reseed: config.generation.reseed,
                };
                generate_words(&config.reference.file, options)
            }
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
