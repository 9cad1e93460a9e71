//! Record type - one decoded line of machine-readable output.

use crate::handler::OutputHandler;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Record kinds emitted by Vagrant that the built-in responses understand.
pub mod kinds {
    /// Key/value metadata about a machine, e.g. `provider,virtualbox`.
    pub const METADATA: &str = "metadata";
    /// Human-readable UI output. Field 0 is the level, field 1 the text.
    pub const UI: &str = "ui";
    /// Fatal error. The fields form the error message.
    pub const ERROR_EXIT: &str = "error-exit";
    /// Machine state reported by `vagrant status`.
    pub const STATE: &str = "state";
    /// Installed version reported by `vagrant version`.
    pub const VERSION_INSTALLED: &str = "version-installed";
    /// Latest available version reported by `vagrant version`.
    pub const VERSION_LATEST: &str = "version-latest";
    /// Action announcements, e.g. `action,up,start`.
    pub const ACTION: &str = "action";
}

/// One decoded record of Vagrant's machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    /// Raw timestamp column. Informational only.
    pub timestamp: String,
    /// Machine the record concerns, empty for global records.
    pub target: String,
    /// Record type, e.g. `metadata` or `error-exit`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Unescaped payload fields.
    pub fields: Vec<String>,
}

impl Record {
    /// Whether the record applies to every machine rather than one target.
    pub fn is_global(&self) -> bool {
        self.target.is_empty()
    }

    /// Parse the timestamp column as Unix seconds.
    ///
    /// Returns `None` if the column is not a valid timestamp.
    pub fn time(&self) -> Option<DateTime<Utc>> {
        let secs: i64 = self.timestamp.trim().parse().ok()?;
        DateTime::from_timestamp(secs, 0)
    }

    /// Hand this record to `handler`.
    pub fn dispatch_to<H: OutputHandler + ?Sized>(&self, handler: &mut H) {
        handler.handle_output(&self.target, &self.kind, &self.fields);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: &str, target: &str) -> Record {
        Record {
            timestamp: timestamp.to_string(),
            target: target.to_string(),
            kind: kinds::UI.to_string(),
            fields: vec![],
        }
    }

    #[test]
    fn test_time_parses_unix_seconds() {
        let time = record("1534347044", "default").time().expect("valid timestamp");
        assert_eq!(time.timestamp(), 1534347044);
    }

    #[test]
    fn test_time_invalid() {
        assert!(record("", "default").time().is_none());
        assert!(record("yesterday", "default").time().is_none());
    }

    #[test]
    fn test_is_global() {
        assert!(record("1", "").is_global());
        assert!(!record("1", "default").is_global());
    }

    #[test]
    fn test_serializes_kind_as_type() {
        let json = serde_json::to_string(&record("1", "default")).unwrap();
        assert!(json.contains("\"type\":\"ui\""));
    }
}
