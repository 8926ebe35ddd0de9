use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use thiserror::Error;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use crate::state::{AppState, StreamEvent};

#[derive(Debug, Error)]
enum StreamError {
    #[error("failed to encode event: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("websocket send failed: {0}")]
    Send(#[from] axum::Error),
}

pub async fn events_socket(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| stream_events(socket, state))
}

async fn stream_events(mut socket: WebSocket, state: AppState) {
    // Subscribe first so nothing published after the initial snapshot is lost.
    let mut updates = state.subscribe_updates();
    let snapshot = match state.session().snapshot().await {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(%err, "closing websocket, session unavailable");
            return;
        }
    };
    if let Err(err) = send_event(&mut socket, &StreamEvent::connected(snapshot)).await {
        debug!(%err, "websocket closed before connect event");
        return;
    }

    loop {
        tokio::select! {
            inbound = socket.recv() => {
                match inbound {
                    Some(Ok(Message::Close(_))) | None => return,
                    Some(Ok(_)) => {}
                    Some(Err(_)) => return,
                }
            }
            update = updates.recv() => {
                match update {
                    Ok(update) => {
                        let event = StreamEvent::from(update);
                        if let Err(err) = send_event(&mut socket, &event).await {
                            debug!(%err, "websocket stream ended");
                            return;
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, "websocket subscriber lagged behind session updates");
                        continue;
                    }
                    Err(RecvError::Closed) => return,
                }
            }
        }
    }
}

async fn send_event(socket: &mut WebSocket, event: &StreamEvent) -> Result<(), StreamError> {
    let payload = serde_json::to_string(event)?;
    socket.send(Message::Text(payload)).await?;
    Ok(())
}
