//! Typed responses built from machine-readable records.
//!
//! Every response records the first `error-exit` it sees in its `error`
//! field. Callers should check that field as well as the exit status of the
//! command (see [`crate::Command::ensure_success`]).

use serde::Serialize;
use std::collections::BTreeMap;
use vagabond_protocol::{kinds, OutputHandler};

/// Separator used to join the fields of an `error-exit` record.
pub const ERROR_FIELD_SEPARATOR: &str = ", ";

/// Phrase vagrant prints when it assigns a name to a new VM.
const VM_NAME_ANNOUNCEMENT: &str = "Setting the name of the VM:";

/// Response shared by every command: just the terminal error, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// Message of the first `error-exit` record.
    pub error: Option<String>,
}

impl ErrorResponse {
    /// Record an `error-exit`. Returns `true` if the record was consumed.
    ///
    /// Only the first error is kept.
    pub fn handle_error(&mut self, kind: &str, fields: &[String]) -> bool {
        record_error(&mut self.error, kind, fields)
    }
}

/// Store an `error-exit` message in `error` unless one is already set.
fn record_error(error: &mut Option<String>, kind: &str, fields: &[String]) -> bool {
    if kind != kinds::ERROR_EXIT {
        return false;
    }
    if error.is_none() {
        *error = Some(fields.join(ERROR_FIELD_SEPARATOR));
    }
    true
}

impl OutputHandler for ErrorResponse {
    fn handle_output(&mut self, _target: &str, kind: &str, fields: &[String]) {
        self.handle_error(kind, fields);
    }

    fn terminal_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Information about one VM brought up by `vagrant up`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VmInfo {
    /// Name vagrant gave the VM (ex: `mydir_default_1534347044260_6006`).
    pub name: String,
    /// Provider backing the VM (ex: `virtualbox`).
    pub provider: String,
}

/// Output of `vagrant up`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpResponse {
    /// VMs defined by the Vagrantfile, keyed by vagrant machine name (ex: `default`).
    pub vm_info: BTreeMap<String, VmInfo>,
    /// Message of the first `error-exit` record.
    pub error: Option<String>,
}

impl OutputHandler for UpResponse {
    fn handle_output(&mut self, target: &str, kind: &str, fields: &[String]) {
        if record_error(&mut self.error, kind, fields) {
            return;
        }

        // Only interested in:
        // * target: X, kind: metadata, fields: [provider, Y]
        // * target: X, kind: ui, fields: [_, "X: Setting the name of the VM: Y"]
        let ([key, value], false) = (fields, target.is_empty()) else {
            return;
        };
        let info = self.vm_info.entry(target.to_string()).or_default();
        if kind == kinds::METADATA && key == "provider" {
            info.provider = value.clone();
        } else if kind == kinds::UI && value.contains(VM_NAME_ANNOUNCEMENT) {
            if let Some(idx) = value.rfind(':') {
                info.name = value[idx + 1..].trim().to_string();
            }
        }
    }

    fn terminal_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Output of `vagrant status`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StatusResponse {
    /// State of each machine (ex: `default` -> `running`).
    pub status: BTreeMap<String, String>,
    /// Message of the first `error-exit` record.
    pub error: Option<String>,
}

impl OutputHandler for StatusResponse {
    fn handle_output(&mut self, target: &str, kind: &str, fields: &[String]) {
        if record_error(&mut self.error, kind, fields) {
            return;
        }
        if let (kinds::STATE, Some(state), false) = (kind, fields.first(), target.is_empty()) {
            self.status.insert(target.to_string(), state.clone());
        }
    }

    fn terminal_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

/// Output of `vagrant version`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VersionResponse {
    /// Version of vagrant that is installed.
    pub installed_version: String,
    /// Latest released version of vagrant.
    pub latest_version: String,
    /// Message of the first `error-exit` record.
    pub error: Option<String>,
}

impl OutputHandler for VersionResponse {
    fn handle_output(&mut self, _target: &str, kind: &str, fields: &[String]) {
        match (kind, fields.first()) {
            (kinds::VERSION_INSTALLED, Some(version)) => self.installed_version = version.clone(),
            (kinds::VERSION_LATEST, Some(version)) => self.latest_version = version.clone(),
            _ => {
                record_error(&mut self.error, kind, fields);
            }
        }
    }

    fn terminal_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
