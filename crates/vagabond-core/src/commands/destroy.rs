//! `vagrant destroy`.

use super::VagrantCommand;
use crate::command::Command;
use crate::config::ClientConfig;
use crate::response::ErrorResponse;

/// Options and output of `vagrant destroy`.
#[derive(Debug)]
pub struct DestroyCommand {
    command: Command<ErrorResponse>,

    /// Destroy without confirmation (default: true). Vagrant cannot prompt
    /// when stdin is not a terminal, so turning this off makes destroy fail.
    pub force: bool,

    /// Destroy machines in parallel if the provider supports it (default: false).
    pub parallel: bool,
}

impl DestroyCommand {
    pub(crate) fn new(config: &ClientConfig) -> Self {
        Self {
            command: Command::new(config),
            force: true,
            parallel: false,
        }
    }
}

impl VagrantCommand for DestroyCommand {
    type Response = ErrorResponse;
    const SUBCOMMAND: &'static str = "destroy";

    fn command(&self) -> &Command<ErrorResponse> {
        &self.command
    }

    fn command_mut(&mut self) -> &mut Command<ErrorResponse> {
        &mut self.command
    }

    fn build_arguments(&self) -> Vec<String> {
        let mut args = Vec::new();
        if self.force {
            args.push("--force".to_string());
        }
        if self.parallel {
            args.push("--parallel".to_string());
        }
        args
    }
}
