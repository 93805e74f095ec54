use serde::{Deserialize, Serialize};

/// Configuration for the remote translation API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslatorConfig {
    #[serde(rename = "provider")]
    #[serde(default = "default_provider")]
    pub provider: String,

    #[serde(rename = "api_key")]
    pub api_key: String,

    #[serde(rename = "api_host")]
    #[serde(default = "default_api_host")]
    pub api_host: String,

    #[serde(rename = "base_url")]
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(rename = "languages_path")]
    #[serde(default = "default_languages_path")]
    pub languages_path: String,

    #[serde(rename = "translate_path")]
    #[serde(default = "default_translate_path")]
    pub translate_path: String,

    #[serde(rename = "timeout_secs")]
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_provider() -> String {
    "google_rapidapi".to_string()
}

fn default_api_host() -> String {
    "google-translate1.p.rapidapi.com".to_string()
}

fn default_base_url() -> String {
    "https://google-translate1.p.rapidapi.com".to_string()
}

fn default_languages_path() -> String {
    "/language/translate/v2/languages".to_string()
}

fn default_translate_path() -> String {
    "/language/translate/v2".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl TranslatorConfig {
    pub fn validate(&self) -> Result<(), String> {
        let key = self.api_key.trim();
        if key.is_empty() {
            return Err(
                "api_key cannot be empty. Set it in translator_config or via ${RAPIDAPI_KEY}."
                    .to_string(),
            );
        }
        if key.starts_with("${") {
            return Err(format!("api_key references an unset environment variable: {}", key));
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    pub fn languages_url(&self) -> String {
        join_url(&self.base_url, &self.languages_path)
    }

    pub fn translate_url(&self) -> String {
        join_url(&self.base_url, &self.translate_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key: String::new(),
            api_host: default_api_host(),
            base_url: default_base_url(),
            languages_path: default_languages_path(),
            translate_path: default_translate_path(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
