//! Reviewer configuration

use serde::{Deserialize, Serialize};

/// How to treat a decision against an already-decided relation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TerminalPolicy {
    /// Fail the request with an error
    #[default]
    Reject,

    /// Accept the request as a no-op and report the standing decision
    Ignore,
}

/// Configuration for review behavior
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReviewConfig {
    /// Policy for decisions against already-decided relations
    #[serde(default)]
    pub on_terminal: TerminalPolicy,
}

impl ReviewConfig {
    /// Configuration that treats repeat decisions as no-ops
    pub fn lenient() -> Self {
        Self {
            on_terminal: TerminalPolicy::Ignore,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rejects_repeat_decisions() {
        let config = ReviewConfig::default();
        assert_eq!(config.on_terminal, TerminalPolicy::Reject);
    }

    #[test]
    fn test_lenient_config() {
        let config = ReviewConfig::lenient();
        assert_eq!(config.on_terminal, TerminalPolicy::Ignore);
    }

}
