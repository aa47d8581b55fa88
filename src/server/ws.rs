use crate::server::routes::check_ranges;
use crate::session::{run_pass, EvaluateRequest};
use crate::state::{AppState, WsMessage};
use axum::extract::ws::{Message, WebSocket};
use axum::extract::{State, WebSocketUpgrade};
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};
use std::sync::Arc;

/// WebSocket upgrade handler
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<Arc<AppState>>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (mut sender, mut receiver) = socket.split();
    let mut rx = state.ws_tx.subscribe();

    // Initial snapshot so the form renders without a round-trip
    {
        let snapshot = state.snapshot_rx.borrow().clone();
        let msg = WsMessage::Evaluation { snapshot };
        if let Ok(json) = serde_json::to_string(&msg) {
            if sender.send(Message::Text(json.into())).await.is_err() {
                return;
            }
        }
    }

    // Forward broadcast messages to this client
    let send_task = tokio::spawn(async move {
        while let Ok(ws_msg) = rx.recv().await {
            match serde_json::to_string(&ws_msg) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        break;
                    }
                }
                Err(_) => continue,
            }
        }
    });

    // Text frames are live inputs: each one is a full evaluate request
    // and triggers one collect/evaluate pass, same as the HTTP route.
    let recv_state = state.clone();
    let recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(text)) => {
                    let req = match serde_json::from_str::<EvaluateRequest>(&text) {
                        Ok(req) => req,
                        Err(e) => {
                            tracing::debug!("ignoring malformed ws frame: {e}");
                            continue;
                        }
                    };
                    if let Err(msg) = check_ranges(&req, &recv_state.config) {
                        tracing::debug!("ignoring out-of-range ws frame: {msg}");
                        continue;
                    }
                    let report = run_pass(&recv_state.collector, &req);
                    recv_state.publish(report);
                }
                Ok(Message::Close(_)) | Err(_) => break,
                _ => {}
            }
        }
    });

    // Wait for either task to finish (client disconnected)
    tokio::select! {
        _ = send_task => {},
        _ = recv_task => {},
    }
}
