//! Vagrant subcommands.
//!
//! Each variant holds a [`Command`] parameterized by its response type and
//! implements [`VagrantCommand`], which provides the shared
//! `start`/`run`/`wait` behaviour. Options are plain public fields; set them
//! before calling `start` or `run`.
//!
//! ```no_run
//! use vagabond_core::{VagrantClient, VagrantCommand};
//!
//! # async fn example() -> vagabond_core::Result<()> {
//! let client = VagrantClient::new("/path/to/project")?;
//! let mut up = client.up();
//! up.provider = Some("virtualbox".into());
//! up.run().await?;
//!
//! if let Some(resp) = up.response() {
//!     for (machine, info) in &resp.vm_info {
//!         println!("{machine}: {} ({})", info.name, info.provider);
//!     }
//! }
//! up.command().ensure_success()?;
//! # Ok(())
//! # }
//! ```

mod destroy;
mod halt;
mod provision;
mod reload;
mod resume;
mod status;
mod suspend;
mod up;
mod version;

pub use destroy::DestroyCommand;
pub use halt::HaltCommand;
pub use provision::ProvisionCommand;
pub use reload::ReloadCommand;
pub use resume::ResumeCommand;
pub use status::StatusCommand;
pub use suspend::SuspendCommand;
pub use up::UpCommand;
pub use version::VersionCommand;

use crate::command::Command;
use crate::error::Result;
use async_trait::async_trait;
use std::process::ExitStatus;
use vagabond_protocol::OutputHandler;

/// Shared lifecycle of every vagrant subcommand.
#[async_trait]
pub trait VagrantCommand: Send {
    /// Response built from the command's output.
    type Response: OutputHandler + Default;

    /// Subcommand name passed to vagrant, e.g. `up`.
    const SUBCOMMAND: &'static str;

    /// The underlying command.
    fn command(&self) -> &Command<Self::Response>;

    /// The underlying command, mutably. Use it to set
    /// [`Command::additional_args`] and [`Command::env`].
    fn command_mut(&mut self) -> &mut Command<Self::Response>;

    /// Arguments derived from the variant's options.
    fn build_arguments(&self) -> Vec<String> {
        Vec::new()
    }

    /// Initialize the underlying command with a fresh response.
    fn init(&mut self) -> Result<()> {
        let args = self.build_arguments();
        self.command_mut()
            .init(Some(Self::Response::default()), Self::SUBCOMMAND, args)
    }

    /// Start the command. You must call [`Self::wait`] to complete execution.
    fn start(&mut self) -> Result<()> {
        self.init()?;
        self.command_mut().start()
    }

    /// Run the command to completion.
    async fn run(&mut self) -> Result<ExitStatus> {
        self.init()?;
        self.command_mut().run().await
    }

    /// Wait for a started command to complete.
    async fn wait(&mut self) -> Result<ExitStatus> {
        self.command_mut().wait().await
    }

    /// The response, available once the command has completed.
    fn response(&self) -> Option<&Self::Response> {
        self.command().handler()
    }
}

/// `--provision-with a,b` if any provisioners are named.
fn provision_with(provisioners: &[String]) -> Vec<String> {
    if provisioners.is_empty() {
        return Vec::new();
    }
    vec!["--provision-with".to_string(), provisioners.join(",")]
}

/// `--provision` / `--no-provision` when provisioning is explicitly set.
fn provision_flag(provisioning: Option<bool>) -> Option<String> {
    provisioning.map(|enabled| {
        if enabled {
            "--provision".to_string()
        } else {
            "--no-provision".to_string()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provision_with() {
        assert!(provision_with(&[]).is_empty());
        assert_eq!(
            provision_with(&["shell".to_string(), "ansible".to_string()]),
            vec!["--provision-with", "shell,ansible"]
        );
    }

    #[test]
    fn test_provision_flag() {
        assert_eq!(provision_flag(None), None);
        assert_eq!(provision_flag(Some(true)).as_deref(), Some("--provision"));
        assert_eq!(provision_flag(Some(false)).as_deref(), Some("--no-provision"));
    }
}
