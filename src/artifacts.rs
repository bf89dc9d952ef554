//! Durable model artifacts shared by the builder and the service.
//!
//! Two bincode files written side by side: the movie table and the
//! similarity matrix. Each carries a small header so the service can refuse
//! artifacts from a different format version or from two different builds.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{Movie, MovieCatalog, SimilarityMatrix};

/// Artifact format version; bump when the layout changes
pub const FORMAT_VERSION: u32 = 1;

/// Movie table artifact file name
pub const MOVIE_LIST_FILE: &str = "movie_list.bin";
/// Similarity matrix artifact file name
pub const SIMILARITY_FILE: &str = "similarity.bin";

/// Header written ahead of each artifact payload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ArtifactHeader {
    pub version: u32,
    pub built_at: DateTime<Utc>,
    pub movie_count: usize,
}

/// Writes both artifacts to `dir`, creating the directory when missing
pub fn save(catalog: &MovieCatalog, matrix: &SimilarityMatrix, dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create artifacts directory {}", dir.display()))?;

    let header = ArtifactHeader {
        version: FORMAT_VERSION,
        built_at: Utc::now(),
        movie_count: catalog.len(),
    };

    write_artifact(&dir.join(MOVIE_LIST_FILE), &header, catalog.movies())?;
    write_artifact(&dir.join(SIMILARITY_FILE), &header, matrix)?;

    info!(
        movies = catalog.len(),
        dir = %dir.display(),
        "Wrote model artifacts"
    );
    Ok(())
}

/// Loads both artifacts from `dir` and verifies they describe the same build
pub fn load(dir: &Path) -> Result<(MovieCatalog, SimilarityMatrix)> {
    let (movie_header, movies): (ArtifactHeader, Vec<Movie>) =
        read_artifact(&dir.join(MOVIE_LIST_FILE))?;
    let (matrix_header, matrix): (ArtifactHeader, SimilarityMatrix) =
        read_artifact(&dir.join(SIMILARITY_FILE))?;

    if movie_header.movie_count != movies.len() {
        bail!(
            "movie artifact is inconsistent: header says {} movies, payload has {}",
            movie_header.movie_count,
            movies.len()
        );
    }
    if matrix_header.movie_count != movie_header.movie_count {
        bail!(
            "artifacts disagree on movie count ({} vs {}); rebuild the model",
            movie_header.movie_count,
            matrix_header.movie_count
        );
    }
    if !matrix.is_square() || matrix.dimension != movies.len() {
        bail!(
            "similarity matrix does not match the movie table ({} movies, dimension {})",
            movies.len(),
            matrix.dimension
        );
    }

    info!(
        movies = movies.len(),
        built_at = %movie_header.built_at,
        "Loaded model artifacts"
    );

    Ok((MovieCatalog::new(movies), matrix))
}

fn write_artifact<T: Serialize + ?Sized>(
    path: &Path,
    header: &ArtifactHeader,
    payload: &T,
) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, header)
        .with_context(|| format!("failed to write artifact header to {}", path.display()))?;
    bincode::serialize_into(&mut writer, payload)
        .with_context(|| format!("failed to write artifact payload to {}", path.display()))?;
    writer
        .flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

fn read_artifact<T: serde::de::DeserializeOwned>(path: &Path) -> Result<(ArtifactHeader, T)> {
    let file = File::open(path).with_context(|| {
        format!(
            "failed to open artifact {} (run generate_model first)",
            path.display()
        )
    })?;
    let mut reader = BufReader::new(file);

    let header: ArtifactHeader = bincode::deserialize_from(&mut reader)
        .with_context(|| format!("failed to read artifact header from {}", path.display()))?;
    if header.version != FORMAT_VERSION {
        bail!(
            "artifact {} has format version {}, expected {}; rebuild the model",
            path.display(),
            header.version,
            FORMAT_VERSION
        );
    }

    let payload: T = bincode::deserialize_from(&mut reader)
        .with_context(|| format!("failed to read artifact payload from {}", path.display()))?;
    Ok((header, payload))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_model() -> (MovieCatalog, SimilarityMatrix) {
        let catalog = MovieCatalog::new(vec![
            Movie::new(1, "Alpha".to_string(), "space alien".to_string()),
            Movie::new(2, "Beta".to_string(), "ocean whale".to_string()),
        ]);
        let matrix = SimilarityMatrix {
            dimension: 2,
            values: vec![1.0, 0.25, 0.25, 1.0],
        };
        (catalog, matrix)
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = TempDir::new().expect("tempdir");
        let (catalog, matrix) = sample_model();

        save(&catalog, &matrix, dir.path()).expect("save should succeed");
        let (loaded_catalog, loaded_matrix) = load(dir.path()).expect("load should succeed");

        assert_eq!(loaded_catalog.movies(), catalog.movies());
        assert_eq!(loaded_matrix, matrix);
        assert_eq!(loaded_catalog.row_of("Beta"), Some(1));
    }

    #[test]
    fn test_load_missing_artifacts_fails() {
        let dir = TempDir::new().expect("tempdir");
        let err = load(dir.path()).expect_err("load should fail");
        assert!(err.to_string().contains("generate_model"));
    }

    #[test]
    fn test_load_rejects_unknown_format_version() {
        let dir = TempDir::new().expect("tempdir");
        let (catalog, matrix) = sample_model();
        save(&catalog, &matrix, dir.path()).expect("save should succeed");

        // Rewrite the movie artifact with a bumped header version.
        let header = ArtifactHeader {
            version: FORMAT_VERSION + 1,
            built_at: Utc::now(),
            movie_count: catalog.len(),
        };
        write_artifact(
            &dir.path().join(MOVIE_LIST_FILE),
            &header,
            catalog.movies(),
        )
        .expect("rewrite should succeed");

        let err = load(dir.path()).expect_err("load should fail");
        assert!(err.to_string().contains("format version"));
    }

    #[test]
    fn test_load_rejects_mismatched_movie_counts() {
        let dir = TempDir::new().expect("tempdir");
        let (catalog, matrix) = sample_model();
        save(&catalog, &matrix, dir.path()).expect("save should succeed");

        // Rewrite the matrix artifact as if it came from a larger build.
        let header = ArtifactHeader {
            version: FORMAT_VERSION,
            built_at: Utc::now(),
            movie_count: catalog.len() + 1,
        };
        let oversized = SimilarityMatrix {
            dimension: 3,
            values: vec![1.0; 9],
        };
        write_artifact(&dir.path().join(SIMILARITY_FILE), &header, &oversized)
            .expect("rewrite should succeed");

        let err = load(dir.path()).expect_err("load should fail");
        assert!(err.to_string().contains("disagree on movie count"));
    }

    #[test]
    fn test_load_rejects_non_square_matrix() {
        let dir = TempDir::new().expect("tempdir");
        let (catalog, _) = sample_model();
        let header = ArtifactHeader {
            version: FORMAT_VERSION,
            built_at: Utc::now(),
            movie_count: catalog.len(),
        };
        let ragged = SimilarityMatrix {
            dimension: 2,
            values: vec![1.0, 0.5, 0.5],
        };
        write_artifact(
            &dir.path().join(MOVIE_LIST_FILE),
            &header,
            catalog.movies(),
        )
        .expect("write should succeed");
        write_artifact(&dir.path().join(SIMILARITY_FILE), &header, &ragged)
            .expect("write should succeed");

        let err = load(dir.path()).expect_err("load should fail");
        assert!(err.to_string().contains("does not match the movie table"));
    }
}
