//! `vagrant reload`.

use super::{provision_flag, provision_with, VagrantCommand};
use crate::command::Command;
use crate::config::ClientConfig;
use crate::response::ErrorResponse;

/// Options and output of `vagrant reload`.
#[derive(Debug)]
pub struct ReloadCommand {
    command: Command<ErrorResponse>,

    /// Force provisioning on or off (default: unset, vagrant decides).
    pub provisioning: Option<bool>,

    /// Provisioners to run, by type or name (default: empty, meaning all).
    pub provisioners: Vec<String>,
}

impl ReloadCommand {
    pub(crate) fn new(config: &ClientConfig) -> Self {
        Self {
            command: Command::new(config),
            provisioning: None,
            provisioners: Vec::new(),
        }
    }
}

impl VagrantCommand for ReloadCommand {
    type Response = ErrorResponse;
    const SUBCOMMAND: &'static str = "reload";

    fn command(&self) -> &Command<ErrorResponse> {
        &self.command
    }

    fn command_mut(&mut self) -> &mut Command<ErrorResponse> {
        &mut self.command
    }

    fn build_arguments(&self) -> Vec<String> {
        provision_flag(self.provisioning)
            .into_iter()
            .chain(provision_with(&self.provisioners))
            .collect()
    }
}
