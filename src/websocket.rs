use axum::{
    extract::{ws::Message, State, WebSocketUpgrade},
    response::Response,
};
use axum::extract::ws::WebSocket;
use futures_util::{SinkExt, StreamExt};
use serde_json::{json, Value};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::handlers;
use crate::host::PendingPrompts;
use crate::state::{AppState, ClientContext};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
) -> Response {
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let client_uid = state.generate_client_uid();
    info!("New WebSocket connection: {}", client_uid);

    let (mut sender, mut receiver) = socket.split();
    let (outbound, mut outbound_rx) = mpsc::unbounded_channel::<Value>();

    // Writer: everything addressed to this editor goes through `outbound`
    let writer_uid = client_uid.clone();
    let writer = tokio::spawn(async move {
        while let Some(msg) = outbound_rx.recv().await {
            if let Err(e) = sender.send(Message::Text(msg.to_string())).await {
                error!("Failed to send to {}: {}", writer_uid, e);
                break;
            }
        }
        debug!("Writer for {} finished", writer_uid);
    });

    let context = ClientContext {
        client_uid: client_uid.clone(),
        outbound: outbound.clone(),
        prompts: PendingPrompts::new(),
    };
    state.client_contexts.insert(client_uid.clone(), context);

    let hello = json!({
        "type": "connection-established",
        "client_uid": client_uid,
    });
    if outbound.send(hello).is_err() {
        error!("Failed to queue initial message for {}", client_uid);
    }
    drop(outbound);

    // Handle incoming messages
    while let Some(msg) = receiver.next().await {
        match msg {
            Ok(Message::Text(text)) => {
                if let Err(e) = handlers::handle_message(&state, &client_uid, &text).await {
                    error!("Error handling message: {}", e);
                }
            }
            Ok(Message::Close(_)) => {
                info!("Client {} disconnected", client_uid);
                break;
            }
            Err(e) => {
                error!("WebSocket error: {}", e);
                break;
            }
            _ => {}
        }
    }

    // Cleanup
    state.disconnect_client(&client_uid);
    writer.abort();

    info!("Cleaned up client {}", client_uid);
}
