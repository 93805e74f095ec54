use std::sync::Arc;
use serde_json::{json, Value};
use tracing::{error, info, warn};

use crate::command::{translate_selection, CommandOutcome};
use crate::host::WebSocketHost;
use crate::languages::LanguageNames;
use crate::state::{AppState, ClientContext};
use crate::translate::TranslationApi;

pub async fn handle_message(
    state: &AppState,
    client_uid: &str,
    text: &str,
) -> anyhow::Result<()> {
    let msg: Value = serde_json::from_str(text)?;
    let msg_type = msg.get("type").and_then(|v| v.as_str());

    let context = state
        .client_contexts
        .get(client_uid)
        .map(|entry| entry.value().clone())
        .ok_or_else(|| anyhow::anyhow!("No context for client {}", client_uid))?;

    match msg_type {
        Some("translate-selection") => {
            handle_translate_selection(state, &context, &msg)?;
        }
        Some("quick-pick-response") => {
            handle_quick_pick_response(&context, &msg)?;
        }
        Some("fetch-languages") => {
            handle_fetch_languages(state, context);
        }
        _ => {
            warn!("Unknown message type: {:?}", msg_type);
        }
    }

    Ok(())
}

fn handle_translate_selection(
    state: &AppState,
    context: &ClientContext,
    msg: &Value,
) -> anyhow::Result<()> {
    if state.has_running_command(&context.client_uid) {
        warn!("Client {} already has a translation in progress", context.client_uid);
        send(context, json!({
            "type": "show-error",
            "message": "A translation is already in progress"
        }))?;
        return Ok(());
    }

    let selection = msg
        .get("text")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    let host = WebSocketHost::new(selection, context.outbound.clone(), context.prompts.clone());
    let translator = Arc::clone(&state.translator);
    let client_uid = context.client_uid.clone();

    info!("Starting translate-selection for {}", client_uid);
    let task = tokio::spawn(async move {
        match translate_selection(&host, translator.as_ref()).await {
            CommandOutcome::Replaced(_) => info!("translate-selection finished for {}", client_uid),
            CommandOutcome::Failed(e) => {
                info!("translate-selection stopped for {}: {}", client_uid, e)
            }
        }
    });
    state
        .command_tasks
        .insert(context.client_uid.clone(), task.abort_handle());

    Ok(())
}

fn handle_quick_pick_response(context: &ClientContext, msg: &Value) -> anyhow::Result<()> {
    let request_id = msg
        .get("request_id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| anyhow::anyhow!("quick-pick-response without request_id"))?;
    let selection = msg
        .get("selection")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string());

    context.prompts.resolve(request_id, selection);
    Ok(())
}

/// Runs off the receive loop so quick-pick answers keep flowing during the fetch
fn handle_fetch_languages(state: &AppState, context: ClientContext) {
    let translator = Arc::clone(&state.translator);
    tokio::spawn(async move {
        if let Err(e) = send_language_list(translator.as_ref(), &context).await {
            error!("Failed to answer fetch-languages for {}: {}", context.client_uid, e);
        }
    });
}

async fn send_language_list(
    translator: &dyn TranslationApi,
    context: &ClientContext,
) -> anyhow::Result<()> {
    match translator.supported_languages().await {
        Ok(codes) => {
            let names = LanguageNames::from_codes(&codes);
            send(context, json!({
                "type": "language-list",
                "languages": names.entries()
            }))?;
        }
        Err(e) => {
            error!("Failed to fetch languages for {}: {}", context.client_uid, e);
            send(context, json!({
                "type": "show-error",
                "message": format!("Failed to fetch supported languages: {}", e)
            }))?;
        }
    }
    Ok(())
}

fn send(context: &ClientContext, msg: Value) -> anyhow::Result<()> {
    context
        .outbound
        .send(msg)
        .map_err(|_| anyhow::anyhow!("Connection to {} is closed", context.client_uid))
}
