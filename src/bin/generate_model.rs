//! Offline model builder binary
//!
//! Reads the TMDB movies and credits exports, builds the bag-of-words
//! similarity model and writes the artifacts the service loads at startup.
//!
//! ```bash
//! cargo run --bin generate_model -- \
//!     --movies data/tmdb_5000_movies.csv \
//!     --credits data/tmdb_5000_credits.csv \
//!     --out-dir artifacts
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use moviematch::builder;
use moviematch::builder::vectorize::DEFAULT_MAX_FEATURES;

#[derive(Parser, Debug)]
#[command(about = "Build the similarity model artifacts from TMDB CSV exports")]
struct Cli {
    /// Path to the movies CSV export
    #[arg(long, default_value = "data/tmdb_5000_movies.csv")]
    movies: PathBuf,

    /// Path to the credits CSV export
    #[arg(long, default_value = "data/tmdb_5000_credits.csv")]
    credits: PathBuf,

    /// Directory the artifacts are written to
    #[arg(long, default_value = "artifacts")]
    out_dir: PathBuf,

    /// Vocabulary size cap for the bag-of-words model
    #[arg(long, default_value_t = DEFAULT_MAX_FEATURES)]
    max_features: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    builder::run(&cli.movies, &cli.credits, &cli.out_dir, cli.max_features)
}
