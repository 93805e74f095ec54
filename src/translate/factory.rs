use std::sync::Arc;
use anyhow::Result;
use tracing::info;

use super::client::GoogleRapidApiClient;
use super::interface::TranslationApi;
use crate::config_manager::translator::TranslatorConfig;

/// Factory for creating translation API clients
pub struct TranslatorFactory;

impl TranslatorFactory {
    /// Create a translation client based on configuration
    ///
    /// # Arguments
    /// * `config` - Translator configuration from config manager
    pub fn create_translator(config: &TranslatorConfig) -> Result<Arc<dyn TranslationApi>> {
        info!("Initializing translator: {}", config.provider);

        match config.provider.as_str() {
            "google_rapidapi" | "google_translate" => {
                Ok(Arc::new(GoogleRapidApiClient::new(config)?))
            }
            _ => Err(anyhow::anyhow!("Unsupported translation provider: {}", config.provider)),
        }
    }
}
