use serde::Serialize;
use tracing::{debug, warn};

use super::normalize::code_to_name;

/// One entry of the language list offered to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageEntry {
    pub code: String,
    pub name: String,
}

/// Code to display name mapping for a single command run.
///
/// Names are unique within a map so that [`LanguageNames::name_to_code`] is
/// the left inverse of the code to name direction.
#[derive(Debug, Clone, Default)]
pub struct LanguageNames {
    entries: Vec<LanguageEntry>,
}

impl LanguageNames {
    /// Build the mapping from the codes the translation API reports.
    ///
    /// Codes without a known name are logged and skipped. A name already taken
    /// by an earlier code is shown as `Name (code)`.
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<LanguageEntry> = Vec::new();

        for code in codes {
            let code = code.as_ref().trim();
            if code.is_empty() || entries.iter().any(|e| e.code == code) {
                continue;
            }

            let Some(name) = code_to_name(code) else {
                warn!("No display name for language code {:?}, skipping", code);
                continue;
            };

            let name = if entries.iter().any(|e| e.name == name) {
                format!("{} ({})", name, code)
            } else {
                name.to_string()
            };

            entries.push(LanguageEntry {
                code: code.to_string(),
                name,
            });
        }

        debug!("Resolved {} language names", entries.len());
        Self { entries }
    }

    pub fn code_to_name(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.code == code)
            .map(|e| e.name.as_str())
    }

    pub fn name_to_code(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .map(|e| e.code.as_str())
    }

    /// Display names in the order the codes were received.
    pub fn display_names(&self) -> Vec<String> {
        self.entries.iter().map(|e| e.name.clone()).collect()
    }

    pub fn entries(&self) -> &[LanguageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
