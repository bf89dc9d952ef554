use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One catalog entry produced by the model build
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    /// TMDB identifier for the movie
    pub id: u64,
    /// Title as it appears in the source dataset
    pub title: String,
    /// Merged overview, genres and keywords text the model was built from
    pub tags: String,
}

impl Movie {
    /// Creates a new movie
    pub fn new(id: u64, title: String, tags: String) -> Self {
        Self { id, title, tags }
    }
}

/// A recommended movie with its resolved poster URL
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendation {
    pub title: String,
    pub poster: String,
}

/// Immutable movie catalog with a title lookup index
///
/// Row order matches the similarity matrix built alongside it. Duplicate
/// titles keep every row; the index resolves to the first occurrence.
#[derive(Debug, Clone)]
pub struct MovieCatalog {
    movies: Vec<Movie>,
    title_index: HashMap<String, usize>,
}

impl MovieCatalog {
    /// Builds a catalog from movies in model row order
    pub fn new(movies: Vec<Movie>) -> Self {
        let mut title_index = HashMap::with_capacity(movies.len());
        for (row, movie) in movies.iter().enumerate() {
            title_index.entry(movie.title.clone()).or_insert(row);
        }
        Self {
            movies,
            title_index,
        }
    }

    /// Number of movies in the catalog
    pub fn len(&self) -> usize {
        self.movies.len()
    }

    /// Returns true when the catalog holds no movies
    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Row index for an exact title match, if present
    pub fn row_of(&self, title: &str) -> Option<usize> {
        self.title_index.get(title).copied()
    }

    /// Movie at a given row
    pub fn get(&self, row: usize) -> Option<&Movie> {
        self.movies.get(row)
    }

    /// All movies in row order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// All titles in row order
    pub fn titles(&self) -> Vec<String> {
        self.movies.iter().map(|m| m.title.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> MovieCatalog {
        MovieCatalog::new(vec![
            Movie::new(10, "Arrival".to_string(), "alien language".to_string()),
            Movie::new(20, "Sunshine".to_string(), "space sun".to_string()),
            Movie::new(30, "Arrival".to_string(), "remake alien".to_string()),
        ])
    }

    #[test]
    fn test_new_movie() {
        let movie = Movie::new(603, "The Matrix".to_string(), "simulation hacker".to_string());
        assert_eq!(movie.id, 603);
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.tags, "simulation hacker");
    }

    #[test]
    fn test_row_lookup() {
        let catalog = sample_catalog();
        assert_eq!(catalog.row_of("Sunshine"), Some(1));
        assert_eq!(catalog.row_of("Moon"), None);
    }

    #[test]
    fn test_duplicate_title_resolves_to_first_row() {
        let catalog = sample_catalog();
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.row_of("Arrival"), Some(0));
    }

    #[test]
    fn test_titles_keep_row_order() {
        let catalog = sample_catalog();
        assert_eq!(catalog.titles(), vec!["Arrival", "Sunshine", "Arrival"]);
    }
}
