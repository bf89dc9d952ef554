//! TMDB poster lookup
//!
//! Resolves poster image URLs from The Movie Database. Every failure maps to
//! a category-specific placeholder URL, so callers never handle errors.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client as HttpClient;
use serde::Deserialize;

use crate::config::Config;
use crate::services::posters::{PosterFallback, PosterResolver};

/// Subset of the TMDB movie details payload we read
#[derive(Debug, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
}

#[derive(Clone)]
pub struct TmdbPosterResolver {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
    image_base_url: String,
    placeholder_base_url: String,
}

impl TmdbPosterResolver {
    /// Creates a resolver whose requests are bounded by the configured timeout
    pub fn new(config: &Config) -> Result<Self> {
        let http_client = HttpClient::builder()
            .timeout(Duration::from_secs(config.poster_timeout_secs))
            .build()
            .context("failed to build TMDB HTTP client")?;

        Ok(Self {
            http_client,
            api_key: config.tmdb_api_key.clone(),
            api_url: config.tmdb_api_url.clone(),
            image_base_url: config.image_base_url.clone(),
            placeholder_base_url: config.placeholder_base_url.clone(),
        })
    }

    fn placeholder(&self, fallback: PosterFallback) -> String {
        format!("{}?text={}", self.placeholder_base_url, fallback.reason())
    }

    /// Maps a transport-level error to its fallback category
    fn classify(error: &reqwest::Error) -> PosterFallback {
        if error.is_timeout() {
            PosterFallback::Timeout
        } else if error.is_connect() {
            PosterFallback::Connection
        } else {
            PosterFallback::Other
        }
    }
}

#[async_trait::async_trait]
impl PosterResolver for TmdbPosterResolver {
    async fn poster_url(&self, movie_id: u64) -> String {
        // IDs are never zero in the TMDB catalog; skip the network round trip.
        if movie_id == 0 {
            return self.placeholder(PosterFallback::InvalidId);
        }

        let url = format!("{}/movie/{}", self.api_url, movie_id);

        let response = match self
            .http_client
            .get(&url)
            .query(&[("api_key", self.api_key.as_str()), ("language", "en-US")])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                let fallback = Self::classify(&e);
                tracing::warn!(movie_id, error = %e, "TMDB request failed");
                return self.placeholder(fallback);
            }
        };

        if !response.status().is_success() {
            let status = response.status();
            tracing::warn!(movie_id, status = %status, "TMDB returned non-success status");
            return self.placeholder(PosterFallback::ApiStatus(status.as_u16()));
        }

        let details: MovieDetails = match response.json().await {
            Ok(details) => details,
            Err(e) => {
                let fallback = Self::classify(&e);
                tracing::warn!(movie_id, error = %e, "Failed to parse TMDB response");
                return self.placeholder(fallback);
            }
        };

        match details.poster_path {
            Some(path) if !path.is_empty() => format!("{}{}", self.image_base_url, path),
            _ => {
                tracing::debug!(movie_id, "TMDB lists no poster for movie");
                self.placeholder(PosterFallback::MissingPoster)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_resolver() -> TmdbPosterResolver {
        TmdbPosterResolver {
            http_client: HttpClient::new(),
            api_key: "test_key".to_string(),
            api_url: "http://tmdb.test".to_string(),
            image_base_url: "https://images.test/w500".to_string(),
            placeholder_base_url: "https://placeholder.test/500x750".to_string(),
        }
    }

    #[test]
    fn test_placeholder_url_carries_reason_text() {
        let resolver = create_test_resolver();
        assert_eq!(
            resolver.placeholder(PosterFallback::Timeout),
            "https://placeholder.test/500x750?text=Timeout"
        );
        assert_eq!(
            resolver.placeholder(PosterFallback::ApiStatus(401)),
            "https://placeholder.test/500x750?text=API+Error+401"
        );
    }

    #[test]
    fn test_movie_details_deserialization_with_poster() {
        let json = r#"{
            "id": 19995,
            "title": "Avatar",
            "poster_path": "/kyeqWdyUXW608qlYkRqosgbbJyK.jpg"
        }"#;

        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(
            details.poster_path,
            Some("/kyeqWdyUXW608qlYkRqosgbbJyK.jpg".to_string())
        );
    }

    #[test]
    fn test_movie_details_deserialization_null_poster() {
        let json = r#"{"id": 285, "poster_path": null}"#;
        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.poster_path, None);
    }

    #[test]
    fn test_movie_details_deserialization_missing_poster_field() {
        let json = r#"{"id": 285, "title": "At World's End"}"#;
        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.poster_path, None);
    }

    #[tokio::test]
    async fn test_zero_id_short_circuits_to_invalid_placeholder() {
        let resolver = create_test_resolver();
        let url = resolver.poster_url(0).await;
        assert_eq!(url, "https://placeholder.test/500x750?text=Invalid+ID");
    }
}
