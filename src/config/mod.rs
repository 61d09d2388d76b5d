//! Startup configuration
//!
//! Credentials and loop settings come from the environment (optionally
//! seeded from a `.env` file). The target language is asked for once on
//! stdin.

use std::io::{BufRead, Write};
use std::time::Duration;

use tracing::{debug, warn};

use crate::core::clipboard::LastSeenPolicy;
use crate::core::features::translator::{Credentials, TargetLang};
use crate::shared::error::{AppError, AppResult};

pub const API_KEY_VAR: &str = "API_KEY";
pub const URL_VAR: &str = "URL";
pub const POLL_INTERVAL_VAR: &str = "POLL_INTERVAL_MS";
pub const LAST_SEEN_POLICY_VAR: &str = "LAST_SEEN_POLICY";

pub const DEFAULT_POLL_INTERVAL_MS: u64 = 500;
pub const TARGET_LANG_PROMPT: &str = "Input target language like: en, uk, es: ";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub credentials: Credentials,
    pub poll_interval: Duration,
    pub last_seen_policy: LastSeenPolicy,
}

impl AppConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn load() -> AppResult<Self> {
        load_dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = required(&lookup, API_KEY_VAR)?;
        let endpoint = required(&lookup, URL_VAR)?;
        reqwest::Url::parse(&endpoint)
            .map_err(|e| AppError::Config(format!("{} is not a valid URL: {}", URL_VAR, e)))?;

        let poll_interval = match lookup(POLL_INTERVAL_VAR) {
            Some(raw) => {
                let ms = raw.trim().parse::<u64>().map_err(|e| {
                    AppError::Config(format!("{} must be milliseconds: {}", POLL_INTERVAL_VAR, e))
                })?;
                Duration::from_millis(ms)
            }
            None => Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        };

        let last_seen_policy = match lookup(LAST_SEEN_POLICY_VAR) {
            Some(raw) => raw.parse()?,
            None => LastSeenPolicy::default(),
        };

        Ok(Self {
            credentials: Credentials::new(api_key, endpoint),
            poll_interval,
            last_seen_policy,
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> AppResult<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if !value.trim().is_empty() => Ok(value.trim().to_string()),
        _ => Err(AppError::Config(format!("{} is not set", key))),
    }
}

fn load_dotenv() {
    match dotenvy::dotenv() {
        Ok(path) => debug!("[Config] Loaded {}", path.display()),
        Err(e) if e.not_found() => debug!("[Config] No .env file, using process environment"),
        Err(e) => warn!("[Config] Ignoring unreadable .env: {}", e),
    }
}

/// Ask for the target language and read the first word of the answer.
pub fn prompt_target_lang<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> AppResult<TargetLang> {
    output.write_all(TARGET_LANG_PROMPT.as_bytes())?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;

    TargetLang::parse(line.split_whitespace().next().unwrap_or(""))
}
