use async_trait::async_trait;
use reqwest::{Client, Response};
use std::time::Duration;
use tracing::{debug, error, info};

use super::interface::{TranslateRequest, TranslateResponse, TranslationApi};
use super::wire::{LanguagesEnvelope, TranslateEnvelope, TranslateForm};
use crate::config_manager::translator::TranslatorConfig;
use crate::error::TranslateError;

const API_KEY_HEADER: &str = "X-RapidAPI-Key";
const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Client for the Google Translate v2 API served through RapidAPI
#[derive(Clone)]
pub struct GoogleRapidApiClient {
    client: Client,
    api_key: String,
    api_host: String,
    languages_url: String,
    translate_url: String,
}

impl GoogleRapidApiClient {
    pub fn new(config: &TranslatorConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("selection-translator/", env!("CARGO_PKG_VERSION")))
            .build()?;

        info!(
            "Initialized GoogleRapidApiClient: base_url={}, api_host={}",
            config.base_url, config.api_host
        );

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_host: config.api_host.clone(),
            languages_url: config.languages_url(),
            translate_url: config.translate_url(),
        })
    }

    /// Read the body of a response, turning non-2xx statuses into errors
    async fn read_body(response: Response) -> Result<String, TranslateError> {
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!("Translation API returned {}: {}", status, body);
            return Err(TranslateError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }
}

#[async_trait]
impl TranslationApi for GoogleRapidApiClient {
    async fn supported_languages(&self) -> Result<Vec<String>, TranslateError> {
        debug!("Fetching supported languages from {}", self.languages_url);

        let response = self
            .client
            .get(&self.languages_url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, &self.api_host)
            .send()
            .await?;
        let body = Self::read_body(response).await?;

        let envelope: LanguagesEnvelope =
            serde_json::from_str(&body).map_err(|e| TranslateError::Decode(e.to_string()))?;
        let codes = envelope.into_codes();

        debug!("Translation API supports {} languages", codes.len());
        Ok(codes)
    }

    async fn translate(
        &self,
        request: &TranslateRequest,
    ) -> Result<TranslateResponse, TranslateError> {
        debug!(
            "Sending translate request: {} -> {}, {} chars",
            request.source,
            request.target,
            request.text.chars().count()
        );

        let form = TranslateForm {
            q: &request.text,
            source: &request.source,
            target: &request.target,
        };

        let response = self
            .client
            .post(&self.translate_url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, &self.api_host)
            .form(&form)
            .send()
            .await?;
        let body = Self::read_body(response).await?;

        let envelope: TranslateEnvelope =
            serde_json::from_str(&body).map_err(|e| TranslateError::Decode(e.to_string()))?;

        match envelope.data.translations.into_first() {
            Some(translated_text) if !translated_text.is_empty() => {
                Ok(TranslateResponse { translated_text })
            }
            _ => Err(TranslateError::EmptyTranslation),
        }
    }
}
