use axum::{extract::State, Json};
use tracing::{error, instrument};

use crate::dto::MutationResponse;
use crate::state::AppState;

use super::dto::{Catalog, Size};
use super::repo;

#[instrument(skip(state))]
pub async fn list_sizes(State(state): State<AppState>) -> Json<Vec<Size>> {
    Json(repo::load_sizes(&state.files).await)
}

#[instrument(skip(state))]
pub async fn list_flavors(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(repo::load_flavors(&state.files).await)
}

#[instrument(skip(state))]
pub async fn get_catalog(State(state): State<AppState>) -> Json<Catalog> {
    Json(Catalog {
        sizes: repo::load_sizes(&state.files).await,
        flavors: repo::load_flavors(&state.files).await,
    })
}

/// The admin screen sends the whole array; this is a replacement, never a
/// merge.
#[instrument(skip(state, sizes))]
pub async fn replace_sizes(
    State(state): State<AppState>,
    Json(sizes): Json<Vec<Size>>,
) -> Json<MutationResponse> {
    match repo::replace_sizes(&state.files, &sizes).await {
        Ok(()) => Json(MutationResponse::ok()),
        Err(err) => {
            error!(error = %err, "replace_sizes failed");
            Json(MutationResponse::failed("Failed to update sizes"))
        }
    }
}

#[instrument(skip(state, flavors))]
pub async fn replace_flavors(
    State(state): State<AppState>,
    Json(flavors): Json<Vec<String>>,
) -> Json<MutationResponse> {
    match repo::replace_flavors(&state.files, &flavors).await {
        Ok(()) => Json(MutationResponse::ok()),
        Err(err) => {
            error!(error = %err, "replace_flavors failed");
            Json(MutationResponse::failed("Failed to update flavors"))
        }
    }
}
