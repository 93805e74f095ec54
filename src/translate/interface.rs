use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::TranslateError;

/// A single translation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub source: String,
    pub target: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// Remote translation API.
///
/// Implementations perform one request per call and never retry.
#[async_trait]
pub trait TranslationApi: Send + Sync {
    /// Language codes the API can translate between
    async fn supported_languages(&self) -> Result<Vec<String>, TranslateError>;

    /// Translate `request.text` from `request.source` to `request.target`
    async fn translate(
        &self,
        request: &TranslateRequest,
    ) -> Result<TranslateResponse, TranslateError>;
}
