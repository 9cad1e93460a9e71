//! `vagrant suspend`.

use super::VagrantCommand;
use crate::command::Command;
use crate::config::ClientConfig;
use crate::response::ErrorResponse;

/// Output of `vagrant suspend`.
#[derive(Debug)]
pub struct SuspendCommand {
    command: Command<ErrorResponse>,
}

impl SuspendCommand {
    pub(crate) fn new(config: &ClientConfig) -> Self {
        Self {
            command: Command::new(config),
        }
    }
}

impl VagrantCommand for SuspendCommand {
    type Response = ErrorResponse;
    const SUBCOMMAND: &'static str = "suspend";

    fn command(&self) -> &Command<ErrorResponse> {
        &self.command
    }

    fn command_mut(&mut self) -> &mut Command<ErrorResponse> {
        &mut self.command
    }
}
