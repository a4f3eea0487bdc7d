pub mod dto;
pub mod handlers;
pub mod repo;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/sizes",
            get(handlers::list_sizes).put(handlers::replace_sizes),
        )
        .route(
            "/flavors",
            get(handlers::list_flavors).put(handlers::replace_flavors),
        )
        .route("/catalog", get(handlers::get_catalog))
}
