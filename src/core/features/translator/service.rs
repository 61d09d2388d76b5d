use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use tracing::debug;

use super::types::{Credentials, TargetLang, TranslatedResponse, TranslationOutcome};
use crate::shared::error::{AppError, AppResult};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Encode the three request fields in a fixed order.
pub fn build_form_body(api_key: &str, text: &str, target: &TargetLang) -> String {
    let target_code = target.wire_code();
    let fields = [
        ("auth_key", api_key),
        ("text", text),
        ("target_lang", target_code.as_str()),
    ];

    fields
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

pub struct TranslatorService {
    http: Client,
    credentials: Credentials,
}

impl TranslatorService {
    pub fn new(credentials: Credentials) -> AppResult<Self> {
        let http = Client::builder()
            .user_agent(concat!("clip-translate/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, credentials })
    }

    /// Translate `text` and return the first translated string.
    pub async fn translate_text(&self, text: &str, target: &TargetLang) -> AppResult<String> {
        self.translate_detailed(text, target)
            .await
            .map(|outcome| outcome.translated)
    }

    pub async fn translate_detailed(
        &self,
        text: &str,
        target: &TargetLang,
    ) -> AppResult<TranslationOutcome> {
        let body = build_form_body(self.credentials.api_key(), text, target);

        let response = self
            .http
            .post(self.credentials.endpoint())
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .body(body)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("Translation API request failed: {}", e)))?;

        let status = response.status();
        let bytes = response.bytes().await?;

        // Unlike the bare decode-and-return flow, an error status never
        // reaches the clipboard as an empty translation.
        if !status.is_success() {
            return Err(AppError::Network(format!(
                "Translation API error: {} {}",
                status,
                String::from_utf8_lossy(&bytes).trim()
            )));
        }

        let parsed: TranslatedResponse = serde_json::from_slice(&bytes)?;
        let outcome = parsed.into_outcome();

        if let Some(lang) = outcome.detected {
            debug!("[Translator] Detected source language: {}", lang.to_name());
        }

        Ok(outcome)
    }
}
