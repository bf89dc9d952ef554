use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, Redirect},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AppResult;
use crate::models::Recommendation;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub movie: String,
}

// Handlers

/// Landing page
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Get all movie titles in model row order
pub async fn get_movies(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.titles())
}

/// Recommend movies most similar to the requested title
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Json<Vec<Recommendation>>> {
    let recommendations = state.recommender.recommend(&request.movie).await?;
    Ok(Json(recommendations))
}

/// Redirect to a generic placeholder poster image
///
/// The path ID keeps client-side poster URLs cache-distinct; the redirect
/// target is the same for every movie.
pub async fn placeholder(State(state): State<AppState>, Path(_id): Path<u64>) -> Redirect {
    Redirect::temporary(&format!("{}?text=MovieMatch", state.placeholder_base_url))
}
