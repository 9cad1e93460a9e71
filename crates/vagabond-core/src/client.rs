//! Entry point for creating vagrant commands.

use crate::command::Command;
use crate::commands::{
    DestroyCommand, HaltCommand, ProvisionCommand, ReloadCommand, ResumeCommand, StatusCommand,
    SuspendCommand, UpCommand, VersionCommand,
};
use crate::config::ClientConfig;
use crate::error::Result;
use std::path::PathBuf;
use vagabond_protocol::OutputHandler;

/// Creates commands that run against one Vagrantfile directory.
///
/// The client itself holds no process state; every factory method returns
/// an independent command.
#[derive(Debug, Clone)]
pub struct VagrantClient {
    config: ClientConfig,
}

impl VagrantClient {
    /// Create a client for the Vagrantfile in `vagrantfile_dir`, using the
    /// `vagrant` executable found on `PATH`.
    ///
    /// # Errors
    /// Returns [`crate::VagrantError::Config`] if the directory does not
    /// contain a Vagrantfile.
    pub fn new(vagrantfile_dir: impl Into<PathBuf>) -> Result<Self> {
        Self::with_config(ClientConfig {
            vagrantfile_dir: vagrantfile_dir.into(),
            ..ClientConfig::default()
        })
    }

    /// Create a client from an explicit configuration.
    ///
    /// # Errors
    /// Returns [`crate::VagrantError::Config`] if the configuration is invalid.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        tracing::debug!(
            vagrant = %config.vagrant_path.display(),
            dir = %config.vagrantfile_dir.display(),
            "Vagrant client created"
        );
        Ok(Self { config })
    }

    /// The client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// A bare command for subcommands without a dedicated type. Call
    /// [`Command::init`] with your own handler.
    pub fn command<H: OutputHandler>(&self) -> Command<H> {
        Command::new(&self.config)
    }

    /// `vagrant up`
    pub fn up(&self) -> UpCommand {
        UpCommand::new(&self.config)
    }

    /// `vagrant status`
    pub fn status(&self) -> StatusCommand {
        StatusCommand::new(&self.config)
    }

    /// `vagrant version`
    pub fn version(&self) -> VersionCommand {
        VersionCommand::new(&self.config)
    }

    /// `vagrant halt`
    pub fn halt(&self) -> HaltCommand {
        HaltCommand::new(&self.config)
    }

    /// `vagrant destroy`
    pub fn destroy(&self) -> DestroyCommand {
        DestroyCommand::new(&self.config)
    }

    /// `vagrant provision`
    pub fn provision(&self) -> ProvisionCommand {
        ProvisionCommand::new(&self.config)
    }

    /// `vagrant reload`
    pub fn reload(&self) -> ReloadCommand {
        ReloadCommand::new(&self.config)
    }

    /// `vagrant suspend`
    pub fn suspend(&self) -> SuspendCommand {
        SuspendCommand::new(&self.config)
    }

    /// `vagrant resume`
    pub fn resume(&self) -> ResumeCommand {
        ResumeCommand::new(&self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::CommandState;
    use crate::commands::VagrantCommand;
    use crate::config::VAGRANTFILE;
    use crate::VagrantError;

    #[test]
    fn test_new_requires_vagrantfile() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            VagrantClient::new(dir.path()),
            Err(VagrantError::Config(_))
        ));

        std::fs::write(dir.path().join(VAGRANTFILE), "").unwrap();
        let client = VagrantClient::new(dir.path()).unwrap();
        assert_eq!(client.config().vagrantfile_dir, dir.path());
        assert_eq!(client.config().vagrant_path, PathBuf::from("vagrant"));
    }

    #[test]
    fn test_commands_share_config() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(VAGRANTFILE), "").unwrap();
        let config = ClientConfig::builder()
            .vagrant_path("/opt/vagrant/bin/vagrant")
            .vagrantfile_dir(dir.path())
            .build()
            .unwrap();
        let client = VagrantClient::with_config(config).unwrap();

        let up = client.up();
        let status = client.status();
        assert_eq!(up.command().executable(), status.command().executable());
        assert_eq!(up.command().working_dir(), dir.path());
        assert_ne!(up.command().id(), status.command().id());
        assert_eq!(up.command().state(), CommandState::NotInitialized);
    }
}
