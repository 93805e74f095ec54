use std::sync::Arc;
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::{json, Value};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};
use uuid::Uuid;

use super::interface::EditorHost;

/// Messages queued for the editor connection
pub type Outbound = mpsc::UnboundedSender<Value>;

/// Quick-pick prompts waiting for the editor to answer, keyed by request id.
#[derive(Clone, Default)]
pub struct PendingPrompts {
    inner: Arc<DashMap<String, oneshot::Sender<Option<String>>>>,
}

impl PendingPrompts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&self) -> (String, oneshot::Receiver<Option<String>>) {
        let request_id = Uuid::new_v4().to_string();
        let (tx, rx) = oneshot::channel();
        self.inner.insert(request_id.clone(), tx);
        (request_id, rx)
    }

    /// Deliver the editor's answer. Returns false for unknown request ids.
    pub fn resolve(&self, request_id: &str, selection: Option<String>) -> bool {
        match self.inner.remove(request_id) {
            Some((_, tx)) => tx.send(selection).is_ok(),
            None => {
                warn!("No pending quick-pick with request_id {}", request_id);
                false
            }
        }
    }

    fn cancel(&self, request_id: &str) {
        self.inner.remove(request_id);
    }

    /// Resolve every open prompt as dismissed
    pub fn dismiss_all(&self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

/// [`EditorHost`] for one websocket-connected editor.
///
/// The selection is captured from the `translate-selection` message that
/// started the command.
pub struct WebSocketHost {
    selection: Option<String>,
    outbound: Outbound,
    prompts: PendingPrompts,
}

impl WebSocketHost {
    pub fn new(selection: Option<String>, outbound: Outbound, prompts: PendingPrompts) -> Self {
        Self {
            selection,
            outbound,
            prompts,
        }
    }
}

#[async_trait]
impl EditorHost for WebSocketHost {
    fn selected_text(&self) -> Option<String> {
        self.selection.clone()
    }

    async fn quick_pick(&self, title: &str, items: &[String]) -> Option<String> {
        let (request_id, rx) = self.prompts.register();
        let msg = json!({
            "type": "quick-pick",
            "request_id": request_id,
            "title": title,
            "items": items,
        });

        if self.outbound.send(msg).is_err() {
            warn!("Connection closed before quick-pick could be shown");
            self.prompts.cancel(&request_id);
            return None;
        }

        debug!("Waiting for quick-pick {}", request_id);
        rx.await.ok().flatten()
    }

    async fn replace_selection(&self, text: &str) -> Result<(), anyhow::Error> {
        self.outbound
            .send(json!({
                "type": "replace-selection",
                "text": text,
            }))
            .map_err(|_| anyhow::anyhow!("editor connection closed"))
    }

    async fn show_error(&self, message: &str) {
        let msg = json!({
            "type": "show-error",
            "message": message,
        });
        if self.outbound.send(msg).is_err() {
            warn!("Could not deliver error notification: {}", message);
        }
    }
}
