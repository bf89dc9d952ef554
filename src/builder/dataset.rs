use std::collections::HashSet;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use tracing::{info, warn};

use crate::models::Movie;

/// Row shape of the movies CSV. Columns not listed here are ignored.
#[derive(Debug, Deserialize)]
struct MovieRecord {
    id: u64,
    title: String,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    genres: Option<String>,
    #[serde(default)]
    keywords: Option<String>,
}

/// Row shape of the credits CSV. Only the join key is consumed.
#[derive(Debug, Deserialize)]
struct CreditsRecord {
    movie_id: u64,
}

/// Loads both datasets and inner-joins them on the movie identifier
///
/// A movie row survives only when its id also appears in the credits file.
/// Kept rows preserve the movies-file order. The three text columns merge
/// into one `tags` string per movie; missing values merge as empty text.
pub fn load_movies(movies_path: &Path, credits_path: &Path) -> Result<Vec<Movie>> {
    let credit_ids = load_credit_ids(credits_path)?;

    let mut reader = csv::Reader::from_path(movies_path)
        .with_context(|| format!("failed to open movies file {}", movies_path.display()))?;

    let mut movies = Vec::new();
    let mut dropped = 0usize;
    for result in reader.deserialize() {
        let record: MovieRecord = result.context("failed to parse movies row")?;
        if !credit_ids.contains(&record.id) {
            dropped += 1;
            continue;
        }
        let tags = merge_tags(&record);
        movies.push(Movie::new(record.id, record.title, tags));
    }

    if movies.is_empty() {
        bail!("no movies survived the credits join");
    }

    info!(
        movies = movies.len(),
        dropped_without_credits = dropped,
        "Joined movie and credits datasets"
    );
    warn_duplicate_titles(&movies);

    Ok(movies)
}

fn load_credit_ids(path: &Path) -> Result<HashSet<u64>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("failed to open credits file {}", path.display()))?;

    let mut ids = HashSet::new();
    for result in reader.deserialize() {
        let record: CreditsRecord = result.context("failed to parse credits row")?;
        ids.insert(record.movie_id);
    }
    Ok(ids)
}

/// Overview, genres and keywords in fixed order, space separated
fn merge_tags(record: &MovieRecord) -> String {
    format!(
        "{} {} {}",
        record.overview.as_deref().unwrap_or(""),
        record.genres.as_deref().unwrap_or(""),
        record.keywords.as_deref().unwrap_or("")
    )
}

fn warn_duplicate_titles(movies: &[Movie]) {
    let mut seen = HashSet::new();
    let mut duplicates: Vec<&str> = Vec::new();
    for movie in movies {
        if !seen.insert(movie.title.as_str()) && !duplicates.contains(&movie.title.as_str()) {
            duplicates.push(movie.title.as_str());
        }
    }
    if !duplicates.is_empty() {
        warn!(
            count = duplicates.len(),
            titles = ?duplicates,
            "Duplicate titles in catalog; lookups resolve to the first row"
        );
    }
}
