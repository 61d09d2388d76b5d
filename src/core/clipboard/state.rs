use std::str::FromStr;

use crate::shared::error::AppError;

/// What the monitor remembers after a successful translate-and-write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LastSeenPolicy {
    /// Remember only the source text. The written translation then looks
    /// like a fresh copy and is translated again on the next poll.
    Source,
    /// Remember the source text and the translation the monitor wrote.
    #[default]
    SourceAndOutput,
}

impl FromStr for LastSeenPolicy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "source" => Ok(LastSeenPolicy::Source),
            "source-and-output" | "source_and_output" => Ok(LastSeenPolicy::SourceAndOutput),
            other => Err(AppError::Config(format!(
                "Unknown LAST_SEEN_POLICY '{}' (expected 'source' or 'source-and-output')",
                other
            ))),
        }
    }
}

/// Clipboard state owned by a single monitor
#[derive(Debug, Default)]
pub struct ClipboardState {
    policy: LastSeenPolicy,
    last_seen: String,
    last_written: Option<String>,
}

impl ClipboardState {
    pub fn new(policy: LastSeenPolicy) -> Self {
        Self {
            policy,
            last_seen: String::new(),
            last_written: None,
        }
    }

    pub fn last_seen(&self) -> &str {
        &self.last_seen
    }

    /// True when `current` was already handled. `current` is never empty.
    ///
    /// Seeing our own translation on the clipboard makes it the new
    /// last-seen value, so re-copying the source later counts as a change.
    pub fn observe(&mut self, current: &str) -> bool {
        if current == self.last_seen {
            return true;
        }
        if self.last_written.as_deref() == Some(current) {
            self.last_seen = current.to_string();
            self.last_written = None;
            return true;
        }
        false
    }

    /// Record a completed cycle. Only called after the translation succeeded.
    pub fn mark_handled(&mut self, source: &str, written: &str) {
        self.last_seen = source.to_string();
        self.last_written = match self.policy {
            LastSeenPolicy::Source => None,
            LastSeenPolicy::SourceAndOutput => Some(written.to_string()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_handles_nothing() {
        let mut state = ClipboardState::new(LastSeenPolicy::default());
        assert!(!state.observe("Hello"));
        assert_eq!(state.last_seen(), "");
    }

    #[test]
    fn test_source_policy_forgets_output() {
        let mut state = ClipboardState::new(LastSeenPolicy::Source);
        state.mark_handled("Hello", "Bonjour");
        assert!(state.observe("Hello"));
        assert!(!state.observe("Bonjour"));
    }

    #[test]
    fn test_default_policy_remembers_output() {
        let mut state = ClipboardState::new(LastSeenPolicy::SourceAndOutput);
        state.mark_handled("Hello", "Bonjour");
        assert!(state.observe("Hello"));
        assert!(state.observe("Bonjour"));
        assert!(!state.observe("Goodbye"));
    }

    #[test]
    fn test_own_output_moves_last_seen() {
        let mut state = ClipboardState::new(LastSeenPolicy::SourceAndOutput);
        state.mark_handled("Hello", "Bonjour");

        assert!(state.observe("Bonjour"));
        assert_eq!(state.last_seen(), "Bonjour");
        assert!(state.observe("Bonjour"));
        assert!(!state.observe("Hello"));
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("source".parse::<LastSeenPolicy>().unwrap(), LastSeenPolicy::Source);
        assert_eq!(
            "Source-And-Output".parse::<LastSeenPolicy>().unwrap(),
            LastSeenPolicy::SourceAndOutput
        );
        assert!("translated".parse::<LastSeenPolicy>().is_err());
    }
}
