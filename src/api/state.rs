use std::sync::Arc;

use crate::models::{MovieCatalog, SimilarityMatrix};
use crate::services::posters::PosterResolver;
use crate::services::Recommender;

/// Shared application state
///
/// Built once at startup from the model artifacts and never mutated
/// afterwards, so handlers read it without locks.
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<MovieCatalog>,
    pub recommender: Arc<Recommender>,
    pub placeholder_base_url: Arc<String>,
}

impl AppState {
    /// Creates application state around a loaded model
    pub fn new(
        catalog: MovieCatalog,
        similarity: SimilarityMatrix,
        posters: Arc<dyn PosterResolver>,
        placeholder_base_url: String,
    ) -> Self {
        let catalog = Arc::new(catalog);
        let recommender = Arc::new(Recommender::new(
            Arc::clone(&catalog),
            Arc::new(similarity),
            posters,
        ));

        Self {
            catalog,
            recommender,
            placeholder_base_url: Arc::new(placeholder_base_url),
        }
    }
}
