use std::time::Duration;

use tracing::{debug, info, warn};

use super::state::{ClipboardState, LastSeenPolicy};
use super::ClipboardAccess;
use crate::core::features::translator::{TargetLang, Translator};
use crate::shared::error::AppResult;

/// Result of a single poll iteration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollOutcome {
    Empty,
    /// Content was already handled.
    Unchanged,
    Translated { source: String, translated: String },
    /// Translation failed; the same text is retried on the next poll.
    Failed,
}

/// Clipboard monitor that polls for changes and translates them in place
pub struct ClipboardMonitor<C, T> {
    clipboard: C,
    translator: T,
    target: TargetLang,
    state: ClipboardState,
    poll_interval: Duration,
}

impl<C: ClipboardAccess, T: Translator> ClipboardMonitor<C, T> {
    pub fn new(
        clipboard: C,
        translator: T,
        target: TargetLang,
        policy: LastSeenPolicy,
        poll_interval: Duration,
    ) -> Self {
        Self {
            clipboard,
            translator,
            target,
            state: ClipboardState::new(policy),
            poll_interval,
        }
    }

    pub fn state(&self) -> &ClipboardState {
        &self.state
    }

    /// Run one read-compare-translate-write cycle.
    ///
    /// Only a clipboard read failure is returned as an error. Translation
    /// failures are logged and reported as [`PollOutcome::Failed`], and a
    /// failed clipboard write is ignored.
    pub async fn poll_once(&mut self) -> AppResult<PollOutcome> {
        let current = self.clipboard.read_text()?;

        if current.is_empty() {
            return Ok(PollOutcome::Empty);
        }
        if self.state.observe(&current) {
            return Ok(PollOutcome::Unchanged);
        }

        info!(
            "[ClipboardMonitor] Detected clipboard change ({} chars)",
            current.chars().count()
        );

        let translated = match self.translator.translate(&current, &self.target).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("[ClipboardMonitor] Translation failed: {}", e);
                return Ok(PollOutcome::Failed);
            }
        };

        if let Err(e) = self.clipboard.write_text(&translated) {
            debug!("[ClipboardMonitor] Ignoring clipboard write failure: {}", e);
        }
        self.state.mark_handled(&current, &translated);

        info!("[ClipboardMonitor] Clipboard replaced with {} translation", self.target);

        Ok(PollOutcome::Translated {
            source: current,
            translated,
        })
    }

    /// Poll until the clipboard can no longer be read.
    pub async fn run(&mut self) -> AppResult<()> {
        info!(
            "[ClipboardMonitor] Started monitoring (target: {}, interval: {:?})",
            self.target, self.poll_interval
        );

        loop {
            self.poll_once().await?;

            if self.poll_interval.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep(self.poll_interval).await;
            }
        }
    }
}
