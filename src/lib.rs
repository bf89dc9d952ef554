//! MovieMatch: content-based movie recommendations over HTTP.
//!
//! The crate splits into an offline builder and an online service. The
//! builder (`generate_model` binary) joins the TMDB movie and credits
//! exports, vectorizes each movie's tag text and precomputes a pairwise
//! cosine-similarity matrix, persisted under an artifacts directory. The
//! service loads those artifacts once at startup and answers title-list and
//! recommendation queries, resolving poster artwork through TMDB with
//! placeholder fallbacks.

pub mod api;
pub mod artifacts;
pub mod builder;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
