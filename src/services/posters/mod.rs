//! Poster lookup abstraction
//!
//! The recommendation flow needs a poster URL for every movie it returns.
//! Poster lookup talks to an external API, so it is behind a trait: handlers
//! depend on the trait and tests substitute a canned implementation.

pub mod tmdb;

pub use tmdb::TmdbPosterResolver;

/// Why a real poster URL could not be produced
///
/// Each category maps to its own placeholder image text so failures stay
/// distinguishable in the rendered UI without inspecting logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterFallback {
    /// The movie has no usable numeric ID
    InvalidId,
    /// The API answered with a non-success HTTP status
    ApiStatus(u16),
    /// The request exceeded the configured deadline
    Timeout,
    /// The API could not be reached at all
    Connection,
    /// The API answered but listed no poster for the movie
    MissingPoster,
    /// Anything else (malformed body, protocol errors)
    Other,
}

impl PosterFallback {
    /// Placeholder image text for this failure category
    pub fn reason(&self) -> String {
        match self {
            PosterFallback::InvalidId => "Invalid+ID".to_string(),
            PosterFallback::ApiStatus(code) => format!("API+Error+{}", code),
            PosterFallback::Timeout => "Timeout".to_string(),
            PosterFallback::Connection => "Connection+Error".to_string(),
            PosterFallback::MissingPoster => "No+Poster".to_string(),
            PosterFallback::Other => "Error".to_string(),
        }
    }
}

/// Trait for poster URL lookup
///
/// Implementations must always return a usable URL: on any failure they fall
/// back to a placeholder image instead of surfacing an error, so one broken
/// poster never sinks a whole recommendation response.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterResolver: Send + Sync {
    /// Resolve a poster image URL for the given movie ID
    async fn poster_url(&self, movie_id: u64) -> String;
}
