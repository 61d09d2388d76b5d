use std::fmt;

use isolang::Language;
use serde::Deserialize;

use crate::shared::error::{AppError, AppResult};

/// API key and endpoint for the translation service.
///
/// Read once at startup and never mutated afterwards.
#[derive(Clone)]
pub struct Credentials {
    api_key: String,
    endpoint: String,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

// Keep the key out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

/// Target language code as typed by the user ("en", "uk", "pt-br", ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetLang(String);

impl TargetLang {
    pub fn parse(input: &str) -> AppResult<Self> {
        let code = input.trim();
        if code.is_empty() {
            return Err(AppError::Config("Target language must not be empty!".to_string()));
        }
        Ok(Self(code.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The code as the translation endpoint expects it.
    pub fn wire_code(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for TargetLang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// -- Wire format of the translation endpoint --

#[derive(Debug, Deserialize)]
pub struct Translation {
    #[serde(default)]
    pub detected_source_language: String,
    #[serde(default)]
    pub text: String,
}

/// A missing or `null` list is treated like an empty one.
#[derive(Debug, Deserialize)]
pub struct TranslatedResponse {
    #[serde(default)]
    pub translations: Option<Vec<Translation>>,
}

/// First translation of a response plus the resolved source language.
#[derive(Debug, Clone, PartialEq)]
pub struct TranslationOutcome {
    pub translated: String,
    pub detected: Option<Language>,
}

impl TranslatedResponse {
    /// Take the first translation; an empty list yields an empty string.
    pub fn into_outcome(self) -> TranslationOutcome {
        match self.translations.unwrap_or_default().into_iter().next() {
            Some(first) => TranslationOutcome {
                detected: detect_language(&first.detected_source_language),
                translated: first.text,
            },
            None => TranslationOutcome {
                translated: String::new(),
                detected: None,
            },
        }
    }
}

/// Resolve a code such as "EN" or "EN-GB" into a language.
fn detect_language(code: &str) -> Option<Language> {
    let primary = code.split('-').next()?.to_ascii_lowercase();
    Language::from_639_1(&primary).or_else(|| Language::from_639_3(&primary))
}
