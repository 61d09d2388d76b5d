pub mod config;
pub mod core;
pub mod shared;

use tracing::info;

use crate::config::AppConfig;
use crate::core::clipboard::{ClipboardMonitor, SystemClipboard};
use crate::core::features::translator::TranslatorService;
use crate::shared::error::AppResult;

/// Load configuration, ask for the target language and run the monitor.
///
/// Returns `Ok(())` on Ctrl-C and an error for anything fatal: bad
/// configuration or an unreadable clipboard.
pub async fn run() -> AppResult<()> {
    let config = AppConfig::load()?;

    let target = {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();
        crate::config::prompt_target_lang(&mut stdin.lock(), &mut stdout.lock())?
    };

    let translator = TranslatorService::new(config.credentials.clone())?;
    let clipboard = SystemClipboard::new()?;

    let mut monitor = ClipboardMonitor::new(
        clipboard,
        translator,
        target,
        config.last_seen_policy,
        config.poll_interval,
    );

    tokio::select! {
        result = monitor.run() => result,
        _ = tokio::signal::ctrl_c() => {
            info!("✅ Interrupted, shutting down");
            Ok(())
        }
    }
}
