//! The translate-selection command.
//!
//! Fetch the supported languages, ask for a source and a target language,
//! translate the selection and replace it. Every failure is reported to the
//! editor exactly once and leaves the document untouched.

use tracing::{debug, error, info};

use crate::error::{CommandError, LanguageRole};
use crate::host::EditorHost;
use crate::languages::LanguageNames;
use crate::translate::{TranslateRequest, TranslationApi};

pub const SOURCE_PROMPT: &str = "Translate from";
pub const TARGET_PROMPT: &str = "Translate to";

/// How a command run ended
#[derive(Debug)]
pub enum CommandOutcome {
    /// The selection was replaced with this text
    Replaced(String),
    /// The command stopped and the error was shown to the user
    Failed(CommandError),
}

impl CommandOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, CommandOutcome::Replaced(_))
    }
}

/// Run the command against an editor and a translation API.
pub async fn translate_selection(
    host: &dyn EditorHost,
    api: &dyn TranslationApi,
) -> CommandOutcome {
    match run(host, api).await {
        Ok(replacement) => {
            info!("Replaced selection with translation");
            CommandOutcome::Replaced(replacement)
        }
        Err(e) => {
            error!("translate-selection failed: {}", e);
            host.show_error(&e.to_string()).await;
            CommandOutcome::Failed(e)
        }
    }
}

async fn run(host: &dyn EditorHost, api: &dyn TranslationApi) -> Result<String, CommandError> {
    let text = match host.selected_text() {
        Some(text) if !text.is_empty() => text,
        _ => return Err(CommandError::NoSelection),
    };

    let codes = api
        .supported_languages()
        .await
        .map_err(CommandError::LanguageList)?;
    let names = LanguageNames::from_codes(&codes);
    let items = names.display_names();

    let source = pick_language(host, &names, &items, LanguageRole::Source).await?;
    let target = pick_language(host, &names, &items, LanguageRole::Target).await?;
    debug!("Translating {} -> {}", source, target);

    let request = TranslateRequest {
        text,
        source,
        target,
    };
    let response = api
        .translate(&request)
        .await
        .map_err(CommandError::Translation)?;

    let replacement = shape_replacement(&request.text, &response.translated_text);
    host.replace_selection(&replacement)
        .await
        .map_err(CommandError::Replace)?;

    Ok(replacement)
}

async fn pick_language(
    host: &dyn EditorHost,
    names: &LanguageNames,
    items: &[String],
    role: LanguageRole,
) -> Result<String, CommandError> {
    let title = match role {
        LanguageRole::Source => SOURCE_PROMPT,
        LanguageRole::Target => TARGET_PROMPT,
    };

    let name = host
        .quick_pick(title, items)
        .await
        .ok_or(CommandError::NotSpecified(role))?;

    names
        .name_to_code(&name)
        .map(|code| code.to_string())
        .ok_or(CommandError::UnknownLanguage(name))
}

/// Text that replaces the selection.
///
/// The API drops a trailing newline, so it is restored when, and only when,
/// the original selection ended with one.
pub fn shape_replacement(original: &str, translated: &str) -> String {
    if original.ends_with('\n') {
        format!("{}\n", translated)
    } else {
        translated.to_string()
    }
}
