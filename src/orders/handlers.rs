use std::convert::Infallible;

use axum::{
    extract::{Path, Query, State},
    response::{
        sse::{Event, Sse},
        IntoResponse, Response,
    },
    Json,
};
use tokio_stream::wrappers::ReceiverStream;
use tracing::{error, instrument};

use crate::dto::MutationResponse;
use crate::error::AppError;
use crate::state::AppState;

use super::dto::{CreateOrderRequest, Order, StreamQuery, UpdateStatusRequest};
use super::{repo, stream};

#[instrument(skip(state))]
pub async fn list_orders(State(state): State<AppState>) -> Json<Vec<Order>> {
    Json(repo::load(&state.files).await)
}

#[instrument(skip(state, req))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(req): Json<CreateOrderRequest>,
) -> Json<MutationResponse> {
    match repo::create(&state.files, req).await {
        Ok(order) => Json(MutationResponse::created(order.id)),
        Err(err) => {
            error!(error = %err, "create_order failed");
            Json(MutationResponse::failed("Error al crear el pedido"))
        }
    }
}

/// `?stream=true` switches the same route from a one-shot JSON fetch to the
/// polling event stream the tracker page consumes.
#[instrument(skip(state))]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(query): Query<StreamQuery>,
) -> Result<Response, AppError> {
    if query.stream.as_deref() == Some("true") {
        return Ok(Sse::new(stream::order_events(state, id)).into_response());
    }
    match repo::find(&state.files, &id).await? {
        Some(order) => Ok(Json(order).into_response()),
        None => Err(AppError::OrderNotFound),
    }
}

#[instrument(skip(state))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(req): Json<UpdateStatusRequest>,
) -> Json<MutationResponse> {
    match repo::set_status(&state.files, &id, req.status).await {
        Ok(()) => Json(MutationResponse::ok()),
        Err(err) => {
            error!(error = %err, %id, "update_status failed");
            Json(MutationResponse::failed("Error al actualizar el pedido"))
        }
    }
}

#[instrument(skip(state))]
pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<MutationResponse> {
    match repo::delete(&state.files, &id).await {
        Ok(()) => Json(MutationResponse::ok()),
        Err(err) => {
            error!(error = %err, %id, "delete_order failed");
            Json(MutationResponse::failed("Error al eliminar el pedido"))
        }
    }
}

#[instrument(skip(state))]
pub async fn stream_orders(
    State(state): State<AppState>,
) -> Sse<ReceiverStream<Result<Event, Infallible>>> {
    Sse::new(stream::order_list_events(state))
}
