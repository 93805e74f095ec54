use thiserror::Error;

/// Failures talking to the translation API.
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("request to translation API failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("translation API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected translation API response: {0}")]
    Decode(String),

    #[error("translation API returned no translated text")]
    EmptyTranslation,
}

/// Which language prompt a message refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LanguageRole {
    Source,
    Target,
}

impl std::fmt::Display for LanguageRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LanguageRole::Source => write!(f, "Source"),
            LanguageRole::Target => write!(f, "Target"),
        }
    }
}

/// Reasons the translate-selection command stops without replacing text.
///
/// The `Display` text is what the user sees in the error notification.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("No text selected")]
    NoSelection,

    #[error("Failed to fetch supported languages: {0}")]
    LanguageList(#[source] TranslateError),

    #[error("{0} language not specified")]
    NotSpecified(LanguageRole),

    #[error("Unknown language: {0}")]
    UnknownLanguage(String),

    #[error("Translation failed: {0}")]
    Translation(#[source] TranslateError),

    #[error("Failed to replace selection: {0}")]
    Replace(#[source] anyhow::Error),
}
