//! Clipboard module
//!
//! This module contains:
//! - `state`: What the monitor has already handled
//! - `monitor`: Poll loop that translates new clipboard text in place

pub mod monitor;
pub mod state;

pub use monitor::{ClipboardMonitor, PollOutcome};
pub use state::{ClipboardState, LastSeenPolicy};

use cli_clipboard::{ClipboardContext, ClipboardProvider};

use crate::shared::error::{AppError, AppResult};

/// Read/write access to a text clipboard.
pub trait ClipboardAccess {
    fn read_text(&mut self) -> AppResult<String>;
    fn write_text(&mut self, text: &str) -> AppResult<()>;
}

/// The OS clipboard.
pub struct SystemClipboard {
    ctx: ClipboardContext,
}

impl SystemClipboard {
    pub fn new() -> AppResult<Self> {
        let ctx = ClipboardContext::new()
            .map_err(|e| AppError::Clipboard(format!("Failed to open clipboard: {}", e)))?;
        Ok(Self { ctx })
    }
}

impl ClipboardAccess for SystemClipboard {
    fn read_text(&mut self) -> AppResult<String> {
        self.ctx
            .get_contents()
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }

    fn write_text(&mut self, text: &str) -> AppResult<()> {
        self.ctx
            .set_contents(text.to_string())
            .map_err(|e| AppError::Clipboard(e.to_string()))
    }
}
