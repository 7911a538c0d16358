use std::fmt;

use serde::Serialize;

/// How a [`Status`] banner should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Success,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Success => write!(f, "success"),
            Severity::Critical => write!(f, "critical"),
        }
    }
}

/// The single user-facing notice describing the outcome of the last event.
///
/// Holders keep at most one; a new status replaces the old one outright.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Status {
    pub severity: Severity,
    pub message: String,
}

impl Status {
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn critical(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Critical,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.severity == Severity::Critical
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.severity, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_severity() {
        let status = Status::critical("Failed to fetch product details");
        assert_eq!(status.to_string(), "[critical] Failed to fetch product details");
    }

    #[test]
    fn constructors_set_severity() {
        assert_eq!(Status::info("x").severity, Severity::Info);
        assert_eq!(Status::success("x").severity, Severity::Success);
        assert!(Status::critical("x").is_critical());
        assert!(!Status::info("x").is_critical());
    }

    #[test]
    fn severity_serializes_lowercase() {
        let json = serde_json::to_value(Status::success("done")).unwrap();
        assert_eq!(json["severity"], "success");
        assert_eq!(json["message"], "done");
    }
}
