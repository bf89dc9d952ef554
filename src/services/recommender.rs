//! Recommendation engine
//!
//! Ranks the precomputed similarity row for a requested title and pairs each
//! recommended movie with a poster URL. Poster lookups run concurrently but
//! results are joined in rank order, so the response order never depends on
//! network timing.

use std::cmp::Ordering;
use std::sync::Arc;

use crate::error::{AppError, AppResult};
use crate::models::{MovieCatalog, Recommendation, SimilarityMatrix};
use crate::services::posters::PosterResolver;

/// Number of recommendations returned per request
pub const RECOMMENDATION_COUNT: usize = 5;

/// Shared, immutable recommendation engine
pub struct Recommender {
    catalog: Arc<MovieCatalog>,
    similarity: Arc<SimilarityMatrix>,
    posters: Arc<dyn PosterResolver>,
}

impl Recommender {
    pub fn new(
        catalog: Arc<MovieCatalog>,
        similarity: Arc<SimilarityMatrix>,
        posters: Arc<dyn PosterResolver>,
    ) -> Self {
        Self {
            catalog,
            similarity,
            posters,
        }
    }

    /// Returns up to [`RECOMMENDATION_COUNT`] movies most similar to `title`
    ///
    /// Titles must match the catalog exactly. The queried movie itself is
    /// never part of the result, even when other rows tie its self-similarity.
    pub async fn recommend(&self, title: &str) -> AppResult<Vec<Recommendation>> {
        if title.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Movie title cannot be empty".to_string(),
            ));
        }

        let query_row = self
            .catalog
            .row_of(title)
            .ok_or_else(|| AppError::NotFound(format!("movie not found: {}", title)))?;

        let scores = self.similarity.row(query_row).ok_or_else(|| {
            AppError::Internal(format!("similarity matrix has no row {}", query_row))
        })?;

        let ranked = top_rows(scores, query_row, RECOMMENDATION_COUNT);

        let mut tasks = Vec::with_capacity(ranked.len());
        for (row, score) in ranked {
            let movie = self
                .catalog
                .get(row)
                .cloned()
                .ok_or_else(|| AppError::Internal(format!("movie table has no row {}", row)))?;
            let posters = Arc::clone(&self.posters);
            let movie_id = movie.id;
            let task = tokio::spawn(async move { posters.poster_url(movie_id).await });
            tasks.push((movie, score, task));
        }

        let mut recommendations = Vec::with_capacity(tasks.len());
        for (movie, score, task) in tasks {
            let poster = match task.await {
                Ok(url) => url,
                Err(e) => {
                    tracing::warn!(movie_id = movie.id, error = %e, "Poster task failed");
                    format!("/api/placeholder/{}", movie.id)
                }
            };
            tracing::debug!(title = %movie.title, score, "Ranked recommendation");
            recommendations.push(Recommendation {
                title: movie.title,
                poster,
            });
        }

        tracing::info!(
            query = %title,
            results = recommendations.len(),
            "Recommendations computed"
        );

        Ok(recommendations)
    }
}

/// Top `count` rows by similarity, excluding the query row itself
///
/// Ties keep ascending row order thanks to the stable sort.
fn top_rows(scores: &[f32], query_row: usize, count: usize) -> Vec<(usize, f32)> {
    let mut ranked: Vec<(usize, f32)> = scores
        .iter()
        .enumerate()
        .filter(|(row, _)| *row != query_row)
        .map(|(row, score)| (row, *score))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    ranked.truncate(count);
    ranked
}
