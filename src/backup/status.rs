//! Status types for the backup flow.

use serde::{Deserialize, Serialize};

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Success => "success",
            Severity::Error => "error",
        }
    }
}

/// The currently displayed status: one message with its severity.
///
/// Replaced as a whole on every transition, never mutated field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub message: String,
    pub severity: Severity,
}

impl Status {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }
}

/// Result of one backup request, held only long enough to project it
/// into a status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupOutcome {
    /// No stored token; no network call was made.
    MissingCredential,
    /// The server accepted the request, with a confirmation message.
    Success(String),
    /// The request failed, with a displayable reason.
    Failure(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_as_str() {
        assert_eq!(Severity::Info.as_str(), "info");
        assert_eq!(Severity::Success.as_str(), "success");
        assert_eq!(Severity::Error.as_str(), "error");
    }

    #[test]
    fn test_severity_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Severity::Error).unwrap(), "\"error\"");
        let parsed: Severity = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(parsed, Severity::Success);
    }
}
