pub mod dto;
pub mod handlers;
pub mod repo;
pub mod stream;

use axum::{routing::get, routing::patch, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/orders",
            get(handlers::list_orders).post(handlers::create_order),
        )
        .route("/orders/stream", get(handlers::stream_orders))
        .route(
            "/orders/:id",
            get(handlers::get_order).delete(handlers::delete_order),
        )
        .route("/orders/:id/status", patch(handlers::update_status))
}
