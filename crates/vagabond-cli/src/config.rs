//! Configuration for the command-line front end.
//!
//! Configuration is loaded from environment variables with sensible defaults,
//! then overridden by command-line flags.

use crate::cli::Cli;
use std::path::PathBuf;
use vagabond_core::{ClientConfig, DEFAULT_VAGRANT_PATH};

/// Filter used when neither `VAGABOND_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_LOG_DIRECTIVE: &str = "vagabond=info";

/// Configuration for the vagabond binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Path to the vagrant executable.
    pub vagrant_path: PathBuf,

    /// Directory containing the Vagrantfile.
    pub vagrantfile_dir: PathBuf,

    /// Explicit tracing filter, replacing the default directive.
    pub log_filter: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            vagrant_path: PathBuf::from(DEFAULT_VAGRANT_PATH),
            vagrantfile_dir: PathBuf::from("."),
            log_filter: None,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Default |
    /// |----------|---------|
    /// | `VAGABOND_VAGRANT` | `vagrant` (resolved through `PATH`) |
    /// | `VAGABOND_VAGRANTFILE_DIR` | current directory |
    /// | `VAGABOND_LOG` | `RUST_LOG`, else `vagabond=info` |
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let default = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            vagrant_path: non_empty("VAGABOND_VAGRANT")
                .map(PathBuf::from)
                .unwrap_or(default.vagrant_path),
            vagrantfile_dir: non_empty("VAGABOND_VAGRANTFILE_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.vagrantfile_dir),
            log_filter: non_empty("VAGABOND_LOG"),
        }
    }

    /// Apply command-line flags on top of the environment.
    pub(crate) fn with_overrides(mut self, cli: &Cli) -> Self {
        if let Some(path) = &cli.vagrant {
            self.vagrant_path = path.clone();
        }
        if let Some(dir) = &cli.dir {
            self.vagrantfile_dir = dir.clone();
        }
        self
    }

    /// Client configuration carrying `env` to every command.
    pub fn client_config(&self, env: Vec<String>) -> ClientConfig {
        ClientConfig {
            vagrant_path: self.vagrant_path.clone(),
            vagrantfile_dir: self.vagrantfile_dir.clone(),
            env,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::from_vars(|_| None);
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.vagrant_path, PathBuf::from("vagrant"));
        assert_eq!(config.vagrantfile_dir, PathBuf::from("."));
        assert!(config.log_filter.is_none());
    }

    #[test]
    fn test_from_vars() {
        let env = vars(&[
            ("VAGABOND_VAGRANT", "/opt/vagrant/bin/vagrant"),
            ("VAGABOND_VAGRANTFILE_DIR", "/srv/project"),
            ("VAGABOND_LOG", "vagabond_core=trace"),
        ]);
        let config = CliConfig::from_vars(|k| env.get(k).cloned());

        assert_eq!(config.vagrant_path, PathBuf::from("/opt/vagrant/bin/vagrant"));
        assert_eq!(config.vagrantfile_dir, PathBuf::from("/srv/project"));
        assert_eq!(config.log_filter.as_deref(), Some("vagabond_core=trace"));
    }

    #[test]
    fn test_empty_values_ignored() {
        let env = vars(&[("VAGABOND_VAGRANT", ""), ("VAGABOND_LOG", "  ")]);
        let config = CliConfig::from_vars(|k| env.get(k).cloned());
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_flags_override_env() {
        let env = vars(&[
            ("VAGABOND_VAGRANT", "/env/vagrant"),
            ("VAGABOND_VAGRANTFILE_DIR", "/env/project"),
        ]);
        let cli = Cli::try_parse_from(["vagabond", "-C", "/flag/project", "status"]).unwrap();
        let config = CliConfig::from_vars(|k| env.get(k).cloned()).with_overrides(&cli);

        assert_eq!(config.vagrant_path, PathBuf::from("/env/vagrant"));
        assert_eq!(config.vagrantfile_dir, PathBuf::from("/flag/project"));

        let client = config.client_config(vec!["A=b".into()]);
        assert_eq!(client.vagrantfile_dir, PathBuf::from("/flag/project"));
        assert_eq!(client.env, vec!["A=b"]);
    }
}
