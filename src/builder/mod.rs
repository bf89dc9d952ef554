//! Offline model build: tabular datasets in, similarity artifacts out.

pub mod dataset;
pub mod similarity;
pub mod stopwords;
pub mod vectorize;

use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::artifacts;
use crate::models::MovieCatalog;
use vectorize::Vectorizer;

/// Runs the full model build and writes both artifacts to `out_dir`
///
/// Any failure aborts the build; partially written artifacts are not valid.
pub fn run(
    movies_path: &Path,
    credits_path: &Path,
    out_dir: &Path,
    max_features: usize,
) -> Result<()> {
    let movies = dataset::load_movies(movies_path, credits_path)?;

    let tags: Vec<&str> = movies.iter().map(|m| m.tags.as_str()).collect();
    let mut vectorizer = Vectorizer::new(max_features);
    let vectors = vectorizer.fit_transform(&tags)?;
    info!(
        movies = movies.len(),
        vocabulary = vectorizer.vocabulary_size(),
        "Vectorized tag text"
    );

    let matrix = similarity::pairwise_cosine(&vectors);
    info!(
        dimension = matrix.dimension,
        "Computed pairwise similarity matrix"
    );

    let catalog = MovieCatalog::new(movies);
    artifacts::save(&catalog, &matrix, out_dir)?;

    Ok(())
}
