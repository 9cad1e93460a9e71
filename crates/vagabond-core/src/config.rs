//! Client configuration types.

use crate::error::VagrantError;
use std::path::PathBuf;

/// Name of the file Vagrant looks for in the project directory.
pub const VAGRANTFILE: &str = "Vagrantfile";

/// Default executable, resolved through `PATH`.
pub const DEFAULT_VAGRANT_PATH: &str = "vagrant";

/// Configuration shared by every command a client creates.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Path to the vagrant executable (default: `vagrant`).
    pub vagrant_path: PathBuf,
    /// Directory containing the Vagrantfile. Commands run here.
    pub vagrantfile_dir: PathBuf,
    /// Extra `KEY=value` environment entries applied to every command.
    pub env: Vec<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            vagrant_path: PathBuf::from(DEFAULT_VAGRANT_PATH),
            vagrantfile_dir: PathBuf::from("."),
            env: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new config builder.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Validate the configuration.
    ///
    /// The Vagrantfile directory must exist and contain a `Vagrantfile`, and
    /// every environment entry must have the form `KEY=value`.
    pub fn validate(&self) -> Result<(), VagrantError> {
        if self.vagrant_path.as_os_str().is_empty() {
            return Err(VagrantError::Config("vagrant_path is required".into()));
        }
        if !self.vagrantfile_dir.is_dir() {
            return Err(VagrantError::Config(format!(
                "vagrantfile_dir is not a directory: {}",
                self.vagrantfile_dir.display()
            )));
        }
        let vagrantfile = self.vagrantfile_dir.join(VAGRANTFILE);
        if !vagrantfile.is_file() {
            return Err(VagrantError::Config(format!(
                "no Vagrantfile found at {}",
                vagrantfile.display()
            )));
        }
        if let Some(entry) = self.env.iter().find(|e| split_env_entry(e).is_none()) {
            return Err(VagrantError::Config(format!(
                "environment entry must be KEY=value: {entry:?}"
            )));
        }
        Ok(())
    }
}

/// Split a `KEY=value` entry. Entries without `=` or with an empty key are rejected.
pub(crate) fn split_env_entry(entry: &str) -> Option<(&str, &str)> {
    entry.split_once('=').filter(|(key, _)| !key.is_empty())
}

/// Builder for ClientConfig.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the path to the vagrant executable.
    pub fn vagrant_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.vagrant_path = path.into();
        self
    }

    /// Set the directory containing the Vagrantfile.
    pub fn vagrantfile_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.vagrantfile_dir = path.into();
        self
    }

    /// Add a `KEY=value` environment entry.
    pub fn env(mut self, entry: impl Into<String>) -> Self {
        self.config.env.push(entry.into());
        self
    }

    /// Build the configuration, validating all fields.
    pub fn build(self) -> Result<ClientConfig, VagrantError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
