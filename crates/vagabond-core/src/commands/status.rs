//! `vagrant status`.

use super::VagrantCommand;
use crate::command::Command;
use crate::config::ClientConfig;
use crate::response::StatusResponse;

/// Output of `vagrant status`.
#[derive(Debug)]
pub struct StatusCommand {
    command: Command<StatusResponse>,
}

impl StatusCommand {
    pub(crate) fn new(config: &ClientConfig) -> Self {
        Self {
            command: Command::new(config),
        }
    }
}

impl VagrantCommand for StatusCommand {
    type Response = StatusResponse;
    const SUBCOMMAND: &'static str = "status";

    fn command(&self) -> &Command<StatusResponse> {
        &self.command
    }

    fn command_mut(&mut self) -> &mut Command<StatusResponse> {
        &mut self.command
    }
}
