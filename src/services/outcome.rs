//! Action outcomes
//!
//! Backup and delete actions process several folders in one request and
//! report one line per folder. The outcome carries those lines together with
//! an overall severity, replacing ambient "message text plus message color"
//! state with an explicit value the presentation layer renders.

/// Severity of an outcome or a single outcome line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// One per-folder result line
#[derive(Debug, Clone)]
pub struct OutcomeLine {
    pub severity: Severity,
    pub text: String,
}

/// The result of one backup or delete action
#[derive(Debug, Clone, Default)]
pub struct ActionOutcome {
    lines: Vec<OutcomeLine>,
}

impl ActionOutcome {
    /// Create an empty outcome
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a success line
    pub fn push_success(&mut self, text: impl Into<String>) {
        self.lines.push(OutcomeLine {
            severity: Severity::Success,
            text: text.into(),
        });
    }

    /// Append an error line
    pub fn push_error(&mut self, text: impl Into<String>) {
        self.lines.push(OutcomeLine {
            severity: Severity::Error,
            text: text.into(),
        });
    }

    /// Overall severity: error once any line is an error
    pub fn severity(&self) -> Severity {
        if self.lines.iter().any(|l| l.severity == Severity::Error) {
            Severity::Error
        } else {
            Severity::Success
        }
    }

    /// Whether any line reported an error
    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    /// The per-folder result lines, in action order
    pub fn lines(&self) -> &[OutcomeLine] {
        &self.lines
    }

    /// Whether the action produced any lines at all
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_outcome_is_success() {
        let outcome = ActionOutcome::new();
        assert_eq!(outcome.severity(), Severity::Success);
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_error_severity_is_sticky() {
        let mut outcome = ActionOutcome::new();
        outcome.push_success("first folder backed up");
        outcome.push_error("second folder failed");
        outcome.push_success("third folder backed up");

        assert!(outcome.is_error());
        assert_eq!(outcome.lines().len(), 3);
        assert_eq!(outcome.lines()[1].severity, Severity::Error);
    }

    #[test]
    fn test_all_success() {
        let mut outcome = ActionOutcome::new();
        outcome.push_success("one");
        outcome.push_success("two");

        assert_eq!(outcome.severity(), Severity::Success);
        assert!(!outcome.is_error());
    }
}
