//! `vagrant up`.

use super::{provision_with, VagrantCommand};
use crate::command::Command;
use crate::config::ClientConfig;
use crate::response::UpResponse;

/// Options and output of `vagrant up`.
#[derive(Debug)]
pub struct UpCommand {
    command: Command<UpResponse>,

    /// Enable or disable provisioning (default: enabled).
    pub provisioning: bool,

    /// Provisioners to run, by type or name (default: empty, meaning all of
    /// them are enabled or disabled depending on `provisioning`).
    pub provisioners: Vec<String>,

    /// Destroy the machine if bringing it up fails (default: true).
    pub destroy_on_error: bool,

    /// Bring machines up in parallel if the provider supports it (default: false).
    pub parallel: bool,

    /// Provider to use (default: vagrant's default provider).
    pub provider: Option<String>,

    /// Install the provider if it isn't installed, if possible (default: true).
    pub install_provider: bool,
}

impl UpCommand {
    pub(crate) fn new(config: &ClientConfig) -> Self {
        Self {
            command: Command::new(config),
            provisioning: true,
            provisioners: Vec::new(),
            destroy_on_error: true,
            parallel: false,
            provider: None,
            install_provider: true,
        }
    }
}

impl VagrantCommand for UpCommand {
    type Response = UpResponse;
    const SUBCOMMAND: &'static str = "up";

    fn command(&self) -> &Command<UpResponse> {
        &self.command
    }

    fn command_mut(&mut self) -> &mut Command<UpResponse> {
        &mut self.command
    }

    fn build_arguments(&self) -> Vec<String> {
        let mut args = Vec::new();
        if !self.provisioning {
            args.push("--no-provision".to_string());
        }
        args.extend(provision_with(&self.provisioners));
        if !self.destroy_on_error {
            args.push("--no-destroy-on-error".to_string());
        }
        if self.parallel {
            args.push("--parallel".to_string());
        }
        if let Some(provider) = self.provider.as_deref().filter(|p| !p.is_empty()) {
            args.push("--provider".to_string());
            args.push(provider.to_string());
        }
        if !self.install_provider {
            args.push("--no-install-provider".to_string());
        }
        args
    }
}
