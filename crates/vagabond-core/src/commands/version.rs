//! `vagrant version`.

use super::VagrantCommand;
use crate::command::Command;
use crate::config::ClientConfig;
use crate::response::VersionResponse;

/// Output of `vagrant version`.
#[derive(Debug)]
pub struct VersionCommand {
    command: Command<VersionResponse>,
}

impl VersionCommand {
    pub(crate) fn new(config: &ClientConfig) -> Self {
        Self {
            command: Command::new(config),
        }
    }
}

impl VagrantCommand for VersionCommand {
    type Response = VersionResponse;
    const SUBCOMMAND: &'static str = "version";

    fn command(&self) -> &Command<VersionResponse> {
        &self.command
    }

    fn command_mut(&mut self) -> &mut Command<VersionResponse> {
        &mut self.command
    }
}
