//! Error types for Petcheck assertions

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for a pipe run
pub type Result<T> = std::result::Result<T, PipeFailure>;

/// A single comparator that found expected != observed
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("[{name}] {message}")]
pub struct AssertionFailure {
    /// Name the comparator was registered under
    pub name: String,
    pub message: String,
}

impl AssertionFailure {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

/// Every comparator failure collected from one pipe run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipeFailure {
    pub failures: Vec<AssertionFailure>,
}

impl PipeFailure {
    /// Names of the failing comparators, sorted for stable reporting
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.failures.iter().map(|f| f.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Whether the named comparator is among the failures
    pub fn has(&self, name: &str) -> bool {
        self.failures.iter().any(|f| f.name == name)
    }

    pub fn len(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.failures.is_empty()
    }
}

impl fmt::Display for PipeFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} assertion(s) failed", self.failures.len())?;
        for failure in &self.failures {
            write!(f, "\n  {}", failure)?;
        }
        Ok(())
    }
}

impl std::error::Error for PipeFailure {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_failure() {
        let failure = PipeFailure {
            failures: vec![
                AssertionFailure::new("nameEquals", "expected \"a\", got \"b\""),
                AssertionFailure::new("idEquals", "expected 1, got 2"),
            ],
        };

        let text = failure.to_string();
        assert!(text.starts_with("2 assertion(s) failed"));
        assert!(text.contains("[nameEquals] expected \"a\", got \"b\""));
        assert!(text.contains("[idEquals] expected 1, got 2"));
        assert_eq!(failure.names(), vec!["idEquals", "nameEquals"]);
        assert!(failure.has("idEquals"));
        assert!(!failure.has("statusEquals"));
    }
}
