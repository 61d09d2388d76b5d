//! Translator feature
//!
//! One form-encoded POST per piece of text against a DeepL-style endpoint.

pub mod service;
pub mod types;

use async_trait::async_trait;

use crate::shared::error::AppResult;
pub use service::{build_form_body, TranslatorService};
pub use types::{Credentials, TargetLang, TranslationOutcome};

/// Anything that can turn text into its translation.
///
/// The clipboard monitor only depends on this trait.
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(&self, text: &str, target: &TargetLang) -> AppResult<String>;
}

#[async_trait]
impl Translator for TranslatorService {
    async fn translate(&self, text: &str, target: &TargetLang) -> AppResult<String> {
        self.translate_text(text, target).await
    }
}
