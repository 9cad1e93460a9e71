//! `vagrant halt`.

use super::VagrantCommand;
use crate::command::Command;
use crate::config::ClientConfig;
use crate::response::ErrorResponse;

/// Options and output of `vagrant halt`.
#[derive(Debug)]
pub struct HaltCommand {
    command: Command<ErrorResponse>,

    /// Force shutdown, equivalent to pulling the power (default: false).
    pub force: bool,
}

impl HaltCommand {
    pub(crate) fn new(config: &ClientConfig) -> Self {
        Self {
            command: Command::new(config),
            force: false,
        }
    }
}

impl VagrantCommand for HaltCommand {
    type Response = ErrorResponse;
    const SUBCOMMAND: &'static str = "halt";

    fn command(&self) -> &Command<ErrorResponse> {
        &self.command
    }

    fn command_mut(&mut self) -> &mut Command<ErrorResponse> {
        &mut self.command
    }

    fn build_arguments(&self) -> Vec<String> {
        if self.force {
            vec!["--force".to_string()]
        } else {
            Vec::new()
        }
    }
}
