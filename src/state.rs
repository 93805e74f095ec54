use std::sync::Arc;
use dashmap::DashMap;
use uuid::Uuid;

use crate::config_manager::Config;
use crate::host::{Outbound, PendingPrompts};
use crate::translate::{TranslationApi, TranslatorFactory};

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub translator: Arc<dyn TranslationApi>,
    pub client_contexts: Arc<DashMap<String, ClientContext>>,
    pub command_tasks: Arc<DashMap<String, tokio::task::AbortHandle>>,
}

/// Per-connection state of an editor client
#[derive(Clone)]
pub struct ClientContext {
    pub client_uid: String,
    pub outbound: Outbound,
    pub prompts: PendingPrompts,
}

impl AppState {
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let translator = TranslatorFactory::create_translator(&config.translator_config)?;
        Ok(Self::with_translator(config, translator))
    }

    pub fn with_translator(config: Config, translator: Arc<dyn TranslationApi>) -> Self {
        Self {
            config,
            translator,
            client_contexts: Arc::new(DashMap::new()),
            command_tasks: Arc::new(DashMap::new()),
        }
    }

    pub fn generate_client_uid(&self) -> String {
        Uuid::new_v4().to_string()
    }

    /// Whether a command is still running for this client
    pub fn has_running_command(&self, client_uid: &str) -> bool {
        self.command_tasks
            .get(client_uid)
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }

    /// Forget a disconnected client.
    ///
    /// Aborts its running command before dismissing open prompts, so a
    /// dismissed prompt cannot resume the command.
    pub fn disconnect_client(&self, client_uid: &str) {
        if let Some((_, handle)) = self.command_tasks.remove(client_uid) {
            handle.abort();
        }
        if let Some((_, context)) = self.client_contexts.remove(client_uid) {
            context.prompts.dismiss_all();
        }
    }
}
