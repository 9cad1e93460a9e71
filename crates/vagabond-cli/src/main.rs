//! vagabond command-line entry point.
//!
//! Runs one vagrant subcommand in machine-readable mode and prints the
//! parsed response as JSON on stdout. Logs go to stderr.
//!
//! The process exits with vagrant's exit code, or 1 if vagrant was killed
//! by a signal.

mod cli;
mod config;

use clap::Parser;
use cli::{Cli, CliCommand};
use config::{CliConfig, DEFAULT_LOG_DIRECTIVE};
use serde::Serialize;
use std::process::ExitCode;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use vagabond_core::{VagrantClient, VagrantCommand};

/// JSON document printed after a command completes.
#[derive(Debug, Serialize)]
struct Outcome<'a, R> {
    command: &'static str,
    exit_code: Option<i32>,
    success: bool,
    response: Option<&'a R>,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = CliConfig::from_env().with_overrides(&cli);

    // Logs go to stderr (stdout carries the JSON outcome)
    let filter = match &config.log_filter {
        Some(directives) => EnvFilter::try_new(directives)?,
        None => EnvFilter::from_default_env().add_directive(DEFAULT_LOG_DIRECTIVE.parse()?),
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!(?config, "Configuration loaded");

    let client = VagrantClient::with_config(config.client_config(cli.env.clone()))?;
    let extra_args = cli.args.clone();

    let code = match &cli.command {
        CliCommand::Up(args) => {
            let mut cmd = client.up();
            args.apply(&mut cmd);
            execute(cmd, extra_args).await?
        }
        CliCommand::Status => execute(client.status(), extra_args).await?,
        CliCommand::Version => execute(client.version(), extra_args).await?,
        CliCommand::Halt(args) => {
            let mut cmd = client.halt();
            args.apply(&mut cmd);
            execute(cmd, extra_args).await?
        }
        CliCommand::Destroy(args) => {
            let mut cmd = client.destroy();
            args.apply(&mut cmd);
            execute(cmd, extra_args).await?
        }
        CliCommand::Provision(args) => {
            let mut cmd = client.provision();
            args.apply(&mut cmd);
            execute(cmd, extra_args).await?
        }
        CliCommand::Reload(args) => {
            let mut cmd = client.reload();
            args.apply_reload(&mut cmd);
            execute(cmd, extra_args).await?
        }
        CliCommand::Suspend => execute(client.suspend(), extra_args).await?,
        CliCommand::Resume(args) => {
            let mut cmd = client.resume();
            args.apply_resume(&mut cmd);
            execute(cmd, extra_args).await?
        }
    };

    Ok(ExitCode::from(code))
}

/// Run `cmd` to completion, print its outcome and return the exit code.
///
/// Ctrl-C kills vagrant; the response collected so far is lost in that case.
async fn execute<C>(mut cmd: C, extra_args: Vec<String>) -> anyhow::Result<u8>
where
    C: VagrantCommand,
    C::Response: Serialize,
{
    cmd.command_mut().additional_args = extra_args;
    cmd.start()?;

    let waited = tokio::select! {
        status = cmd.wait() => Some(status),
        _ = signal::ctrl_c() => None,
    };
    let status = match waited {
        Some(status) => status?,
        None => {
            tracing::info!("Received interrupt, killing vagrant");
            cmd.command_mut().kill()?;
            cmd.wait().await?
        }
    };

    if let Err(e) = cmd.command().ensure_success() {
        tracing::error!(subcommand = C::SUBCOMMAND, error = %e, "Vagrant command failed");
    }

    let outcome = Outcome {
        command: C::SUBCOMMAND,
        exit_code: status.code(),
        success: status.success(),
        response: cmd.response(),
    };
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(match status.code() {
        Some(code) => u8::try_from(code).unwrap_or(1),
        None => 1,
    })
}
