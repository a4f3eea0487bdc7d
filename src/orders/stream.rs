use std::convert::Infallible;

use axum::response::sse::Event;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::{debug, warn};

use crate::state::AppState;

use super::repo;

/// One polling task per connected client: re-read the file on a fixed
/// interval and push whatever is there, changed or not. The task stops when
/// the client goes away (the channel closes) or a read fails.
///
/// The first push comes a full interval after connect; a tick where the id
/// has no match pushes nothing. A failed read emits an `error` event before
/// the stream ends.
pub fn order_events(state: AppState, id: String) -> ReceiverStream<Result<Event, Infallible>> {
    let (tx, rx) = mpsc::channel(16);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(state.config.poll_interval);
        ticker.tick().await;
        loop {
            ticker.tick().await;
            match repo::find(&state.files, &id).await {
                Ok(Some(order)) => {
                    let event = match Event::default().json_data(&order) {
                        Ok(event) => event,
                        Err(err) => {
                            warn!(error = %err, id, "order event serialization failed");
                            continue;
                        }
                    };
                    if tx.send(Ok(event)).await.is_err() {
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    warn!(error = %err, id, "order stream read failed");
                    let _ = tx
                        .send(Ok(Event::default()
                            .event("error")
                            .data("El flujo falló debido a un error.")))
                        .await;
                    break;
                }
            }
        }
        debug!(id, "order stream closed");
    });
    ReceiverStream::new(rx)
}

/// The whole order list, oldest first: once immediately on connect, then on
/// every tick. No change detection or dedup. The read is the lenient one, so
/// a shop with no orders file yet streams `[]` and picks up the first order
/// when it lands; only the client disconnecting ends the stream.
pub fn order_list_events(state: AppState) -> ReceiverStream<Result<Event, Infallible>> {
    let (tx, rx) = mpsc::channel(16);
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(state.config.poll_interval);
        loop {
            ticker.tick().await;
            let orders = repo::sorted_by_created_at(repo::load(&state.files).await);
            let event = match Event::default().json_data(&orders) {
                Ok(event) => event,
                Err(err) => {
                    warn!(error = %err, "order list event serialization failed");
                    continue;
                }
            };
            if tx.send(Ok(event)).await.is_err() {
                break;
            }
        }
        debug!("order list stream closed");
    });
    ReceiverStream::new(rx)
}
