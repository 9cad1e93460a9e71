//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use vagabond_core::{
    DestroyCommand, HaltCommand, ProvisionCommand, ReloadCommand, ResumeCommand, UpCommand,
};

/// Run vagrant commands and print their parsed output as JSON.
#[derive(Parser, Debug)]
#[command(name = "vagabond", version, disable_help_subcommand = true)]
pub(crate) struct Cli {
    /// Path to the vagrant executable (overrides `VAGABOND_VAGRANT`).
    #[arg(long, value_name = "PATH")]
    pub(crate) vagrant: Option<PathBuf>,
    /// Directory containing the Vagrantfile (overrides `VAGABOND_VAGRANTFILE_DIR`).
    #[arg(long, short = 'C', value_name = "DIR")]
    pub(crate) dir: Option<PathBuf>,
    /// Extra environment entry for vagrant, may be repeated.
    #[arg(long = "env", value_name = "KEY=VALUE")]
    pub(crate) env: Vec<String>,
    /// Extra argument appended to the vagrant command line, may be repeated.
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    pub(crate) args: Vec<String>,
    /// The vagrant subcommand to run.
    #[command(subcommand)]
    pub(crate) command: CliCommand,
}

/// Supported vagrant subcommands.
#[derive(Subcommand, Debug, Clone)]
pub(crate) enum CliCommand {
    /// Create and provision machines.
    Up(UpArgs),
    /// Report the state of each machine.
    Status,
    /// Report installed and latest vagrant versions.
    Version,
    /// Shut machines down.
    Halt(HaltArgs),
    /// Destroy machines.
    Destroy(DestroyArgs),
    /// Run provisioners against running machines.
    Provision(ProvisionArgs),
    /// Restart machines, loading a new Vagrantfile.
    Reload(RestartArgs),
    /// Suspend machines.
    Suspend,
    /// Resume suspended machines.
    Resume(RestartArgs),
}

/// Options for `up`.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct UpArgs {
    /// Skip provisioning.
    #[arg(long)]
    pub(crate) no_provision: bool,
    /// Only run these provisioners (comma separated).
    #[arg(long, value_delimiter = ',', value_name = "NAME")]
    pub(crate) provision_with: Vec<String>,
    /// Keep machines that fail to come up.
    #[arg(long)]
    pub(crate) no_destroy_on_error: bool,
    /// Bring machines up in parallel.
    #[arg(long)]
    pub(crate) parallel: bool,
    /// Provider to use.
    #[arg(long)]
    pub(crate) provider: Option<String>,
    /// Do not install the provider if it is missing.
    #[arg(long)]
    pub(crate) no_install_provider: bool,
}

impl UpArgs {
    pub(crate) fn apply(&self, cmd: &mut UpCommand) {
        cmd.provisioning = !self.no_provision;
        cmd.provisioners = self.provision_with.clone();
        cmd.destroy_on_error = !self.no_destroy_on_error;
        cmd.parallel = self.parallel;
        cmd.provider = self.provider.clone();
        cmd.install_provider = !self.no_install_provider;
    }
}

/// Options for `halt`.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct HaltArgs {
    /// Force shutdown.
    #[arg(long, short)]
    pub(crate) force: bool,
}

impl HaltArgs {
    pub(crate) fn apply(&self, cmd: &mut HaltCommand) {
        cmd.force = self.force;
    }
}

/// Options for `destroy`.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct DestroyArgs {
    /// Ask for confirmation instead of passing `--force`.
    #[arg(long)]
    pub(crate) no_force: bool,
    /// Destroy machines in parallel.
    #[arg(long)]
    pub(crate) parallel: bool,
}

impl DestroyArgs {
    pub(crate) fn apply(&self, cmd: &mut DestroyCommand) {
        cmd.force = !self.no_force;
        cmd.parallel = self.parallel;
    }
}

/// Options for `provision`.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct ProvisionArgs {
    /// Only run these provisioners (comma separated).
    #[arg(long, value_delimiter = ',', value_name = "NAME")]
    pub(crate) provision_with: Vec<String>,
}

impl ProvisionArgs {
    pub(crate) fn apply(&self, cmd: &mut ProvisionCommand) {
        cmd.provisioners = self.provision_with.clone();
    }
}

/// Options for `reload` and `resume`.
#[derive(Args, Debug, Clone, Default)]
pub(crate) struct RestartArgs {
    /// Force provisioning.
    #[arg(long, conflicts_with = "no_provision")]
    pub(crate) provision: bool,
    /// Skip provisioning.
    #[arg(long)]
    pub(crate) no_provision: bool,
    /// Only run these provisioners (comma separated).
    #[arg(long, value_delimiter = ',', value_name = "NAME")]
    pub(crate) provision_with: Vec<String>,
}

impl RestartArgs {
    fn provisioning(&self) -> Option<bool> {
        match (self.provision, self.no_provision) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub(crate) fn apply_reload(&self, cmd: &mut ReloadCommand) {
        cmd.provisioning = self.provisioning();
        cmd.provisioners = self.provision_with.clone();
    }

    pub(crate) fn apply_resume(&self, cmd: &mut ResumeCommand) {
        cmd.provisioning = self.provisioning();
        cmd.provisioners = self.provision_with.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vagabond_core::{VagrantClient, VagrantCommand, VAGRANTFILE};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("vagabond").chain(args.iter().copied()))
            .expect("arguments should parse")
    }

    fn client() -> (tempfile::TempDir, VagrantClient) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(VAGRANTFILE), "").unwrap();
        let client = VagrantClient::new(dir.path()).unwrap();
        (dir, client)
    }

    #[test]
    fn test_global_options() {
        let cli = parse(&[
            "--vagrant",
            "/opt/vagrant/bin/vagrant",
            "-C",
            "/srv/project",
            "--env",
            "VAGRANT_LOG=debug",
            "--env",
            "A=b",
            "--arg",
            "--debug",
            "status",
        ]);

        assert_eq!(cli.vagrant, Some(PathBuf::from("/opt/vagrant/bin/vagrant")));
        assert_eq!(cli.dir, Some(PathBuf::from("/srv/project")));
        assert_eq!(cli.env, vec!["VAGRANT_LOG=debug", "A=b"]);
        assert_eq!(cli.args, vec!["--debug"]);
        assert!(matches!(cli.command, CliCommand::Status));
    }

    #[test]
    fn test_up_options() {
        let cli = parse(&[
            "up",
            "--no-provision",
            "--provision-with",
            "shell,chef",
            "--provider",
            "docker",
        ]);
        let CliCommand::Up(args) = cli.command else {
            panic!("expected up");
        };

        let (_dir, client) = client();
        let mut up = client.up();
        args.apply(&mut up);
        assert_eq!(
            up.build_arguments(),
            vec![
                "--no-provision",
                "--provision-with",
                "shell,chef",
                "--provider",
                "docker"
            ]
        );
    }

    #[test]
    fn test_destroy_forces_by_default() {
        let CliCommand::Destroy(args) = parse(&["destroy"]).command else {
            panic!("expected destroy");
        };
        let (_dir, client) = client();
        let mut destroy = client.destroy();
        args.apply(&mut destroy);
        assert_eq!(destroy.build_arguments(), vec!["--force"]);
    }

    #[test]
    fn test_reload_provisioning() {
        let CliCommand::Reload(args) = parse(&["reload", "--no-provision"]).command else {
            panic!("expected reload");
        };
        assert_eq!(args.provisioning(), Some(false));
        assert_eq!(RestartArgs::default().provisioning(), None);

        let result = Cli::try_parse_from(["vagabond", "resume", "--provision", "--no-provision"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["vagabond"]).is_err());
    }
}
