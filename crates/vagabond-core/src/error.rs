//! Error types for vagabond-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for vagabond-core operations.
pub type Result<T> = std::result::Result<T, VagrantError>;

/// Errors that can occur while configuring or running a Vagrant command.
#[derive(Debug, Error)]
pub enum VagrantError {
    /// `init` was called on a command that was already initialized
    #[error("command already initialized")]
    AlreadyInitialized,

    /// Command is not in the state the operation requires
    #[error("invalid command state: expected {expected}, got {actual}")]
    InvalidState { expected: String, actual: String },

    /// The Vagrant executable could not be spawned
    #[error("failed to spawn {}: {source}", program.display())]
    Spawn {
        /// Executable that failed to start
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The spawned process had no stdout pipe
    #[error("child process has no stdout pipe")]
    MissingStdout,

    /// The output reader task failed before draining the stream
    #[error("output reader failed: {0}")]
    Reader(String),

    /// Vagrant reported an `error-exit`
    #[error("vagrant error: {0}")]
    ExitError(String),

    /// Vagrant exited abnormally without reporting an error
    #[error("vagrant exited unsuccessfully (code: {code:?})")]
    ExitStatus {
        /// Exit code, `None` if the process was killed by a signal
        code: Option<i32>,
    },

    /// Client configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
