//! `vagrant provision`.

use super::{provision_with, VagrantCommand};
use crate::command::Command;
use crate::config::ClientConfig;
use crate::response::ErrorResponse;

/// Options and output of `vagrant provision`.
#[derive(Debug)]
pub struct ProvisionCommand {
    command: Command<ErrorResponse>,

    /// Provisioners to run, by type or name (default: empty, meaning all).
    pub provisioners: Vec<String>,
}

impl ProvisionCommand {
    pub(crate) fn new(config: &ClientConfig) -> Self {
        Self {
            command: Command::new(config),
            provisioners: Vec::new(),
        }
    }
}

impl VagrantCommand for ProvisionCommand {
    type Response = ErrorResponse;
    const SUBCOMMAND: &'static str = "provision";

    fn command(&self) -> &Command<ErrorResponse> {
        &self.command
    }

    fn command_mut(&mut self) -> &mut Command<ErrorResponse> {
        &mut self.command
    }

    fn build_arguments(&self) -> Vec<String> {
        provision_with(&self.provisioners)
    }
}
