#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use selection_translator::error::TranslateError;
use selection_translator::host::EditorHost;
use selection_translator::translate::{TranslateRequest, TranslateResponse, TranslationApi};

/// Editor that answers prompts from a script and records every effect
pub struct FakeHost {
    pub selection: Option<String>,
    pub answers: Mutex<VecDeque<Option<String>>>,
    pub prompts: Mutex<Vec<(String, Vec<String>)>>,
    pub replaced: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
    pub fail_replace: bool,
}

impl FakeHost {
    pub fn new(selection: Option<&str>, answers: &[Option<&str>]) -> Self {
        Self {
            selection: selection.map(|s| s.to_string()),
            answers: Mutex::new(answers.iter().map(|a| a.map(|s| s.to_string())).collect()),
            prompts: Mutex::new(Vec::new()),
            replaced: Mutex::new(Vec::new()),
            errors: Mutex::new(Vec::new()),
            fail_replace: false,
        }
    }

    pub fn replaced(&self) -> Vec<String> {
        self.replaced.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }

    pub fn prompt_titles(&self) -> Vec<String> {
        self.prompts.lock().unwrap().iter().map(|(t, _)| t.clone()).collect()
    }
}

#[async_trait]
impl EditorHost for FakeHost {
    fn selected_text(&self) -> Option<String> {
        self.selection.clone()
    }

    async fn quick_pick(&self, title: &str, items: &[String]) -> Option<String> {
        self.prompts
            .lock()
            .unwrap()
            .push((title.to_string(), items.to_vec()));
        self.answers.lock().unwrap().pop_front().flatten()
    }

    async fn replace_selection(&self, text: &str) -> Result<(), anyhow::Error> {
        if self.fail_replace {
            return Err(anyhow::anyhow!("document is read-only"));
        }
        self.replaced.lock().unwrap().push(text.to_string());
        Ok(())
    }

    async fn show_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

/// Translation API with canned answers and call counters
pub struct FakeApi {
    pub languages: Option<Vec<String>>,
    pub translation: Option<String>,
    pub language_calls: AtomicUsize,
    pub translate_calls: AtomicUsize,
    pub last_request: Mutex<Option<TranslateRequest>>,
}

impl FakeApi {
    pub fn new(languages: Option<&[&str]>, translation: Option<&str>) -> Self {
        Self {
            languages: languages.map(|l| l.iter().map(|s| s.to_string()).collect()),
            translation: translation.map(|s| s.to_string()),
            language_calls: AtomicUsize::new(0),
            translate_calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn language_calls(&self) -> usize {
        self.language_calls.load(Ordering::SeqCst)
    }

    pub fn translate_calls(&self) -> usize {
        self.translate_calls.load(Ordering::SeqCst)
    }

    pub fn network_calls(&self) -> usize {
        self.language_calls() + self.translate_calls()
    }
}

#[async_trait]
impl TranslationApi for FakeApi {
    async fn supported_languages(&self) -> Result<Vec<String>, TranslateError> {
        self.language_calls.fetch_add(1, Ordering::SeqCst);
        self.languages.clone().ok_or(TranslateError::Status {
            status: 403,
            body: "invalid API key".to_string(),
        })
    }

    async fn translate(
        &self,
        request: &TranslateRequest,
    ) -> Result<TranslateResponse, TranslateError> {
        self.translate_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(request.clone());
        self.translation
            .clone()
            .map(|translated_text| TranslateResponse { translated_text })
            .ok_or(TranslateError::Status {
                status: 503,
                body: "service unavailable".to_string(),
            })
    }
}

pub const LANGUAGES: &[&str] = &["en", "de", "fr", "zh-CN", "zh-TW", "iw", "xx"];
