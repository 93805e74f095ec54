//! JSON shapes of the Google Translate v2 surface served through RapidAPI.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesEnvelope {
    pub data: LanguagesData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguagesData {
    pub languages: Vec<LanguageItem>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct LanguageItem {
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Form body of the translate call
#[derive(Debug, Serialize)]
pub struct TranslateForm<'a> {
    pub q: &'a str,
    pub source: &'a str,
    pub target: &'a str,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateEnvelope {
    pub data: TranslateData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranslateData {
    pub translations: Translations,
}

/// The API documents a list of translations; some deployments return a
/// single object. Both are accepted.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Translations {
    One(Translation),
    Many(Vec<Translation>),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Translation {
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

impl Translations {
    pub fn into_first(self) -> Option<String> {
        match self {
            Translations::One(t) => Some(t.translated_text),
            Translations::Many(list) => list.into_iter().next().map(|t| t.translated_text),
        }
    }
}

impl LanguagesEnvelope {
    pub fn into_codes(self) -> Vec<String> {
        self.data.languages.into_iter().map(|l| l.language).collect()
    }
}
