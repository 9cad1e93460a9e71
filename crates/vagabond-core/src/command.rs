//! Command lifecycle - spawning vagrant and draining its machine-readable output.
//!
//! A [`Command`] moves through
//! `NotInitialized -> Initialized -> Started -> Completed`:
//!
//! 1. [`Command::init`] freezes the invocation (program, arguments,
//!    environment, working directory) and stores the output handler.
//! 2. [`Command::start`] spawns the process and exactly one task that reads
//!    its stdout line by line, decodes each line and hands it to the handler.
//! 3. [`Command::wait`] joins that task, which gives the handler back, and
//!    then reaps the process.
//!
//! The handler is owned by the reader task while the command runs, so a
//! response can only be read once `wait` has returned.

use crate::config::{split_env_entry, ClientConfig};
use crate::error::{Result, VagrantError};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::{Child, ChildStdout};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use uuid::Uuid;
use vagabond_protocol::{decode_line, OutputHandler};

/// Flag that switches vagrant to its line-oriented output format.
pub const MACHINE_READABLE_FLAG: &str = "--machine-readable";

/// Default cap on one line of output. Longer lines are skipped.
pub const MAX_LINE_BYTES: usize = 1024 * 1024;

/// Lifecycle state of a [`Command`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandState {
    /// Created, invocation not built yet
    NotInitialized,
    /// Invocation built, process not spawned
    Initialized,
    /// Process spawned, output being drained
    Started,
    /// Output drained and process reaped
    Completed,
    /// Spawning failed; the command cannot be used again
    Failed,
}

impl fmt::Display for CommandState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandState::NotInitialized => write!(f, "not initialized"),
            CommandState::Initialized => write!(f, "initialized"),
            CommandState::Started => write!(f, "started"),
            CommandState::Completed => write!(f, "completed"),
            CommandState::Failed => write!(f, "failed"),
        }
    }
}

/// Fully built invocation of the vagrant executable.
///
/// The inherited part of `env` is a lossy snapshot kept for lookup. The
/// process itself inherits the real environment unchanged, and only the
/// client and caller entries are applied on top, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Executable to run.
    pub program: PathBuf,
    /// Arguments, not including the program itself.
    pub args: Vec<String>,
    /// `KEY=value` entries: inherited environment first, overrides last.
    pub env: Vec<String>,
    /// Directory the process runs in.
    pub working_dir: PathBuf,
    /// Number of leading `env` entries taken from the process environment.
    inherited: usize,
}

impl Invocation {
    /// The complete argument vector, starting with the program.
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.to_string_lossy().into_owned())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// Look up an environment variable. The last entry for `key` wins.
    pub fn env_var(&self, key: &str) -> Option<&str> {
        self.env
            .iter()
            .rev()
            .filter_map(|entry| split_env_entry(entry))
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v)
    }

    /// Entries applied on top of the inherited environment.
    pub fn overrides(&self) -> &[String] {
        self.env.get(self.inherited..).unwrap_or_default()
    }

    fn to_command(&self) -> tokio::process::Command {
        let mut cmd = tokio::process::Command::new(&self.program);
        cmd.args(&self.args)
            .current_dir(&self.working_dir)
            .envs(self.overrides().iter().filter_map(|entry| split_env_entry(entry)))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);
        cmd
    }
}

/// What the reader task hands back when it finishes.
struct DrainReport<H> {
    handler: Option<H>,
    records: u64,
    skipped: u64,
}

/// One invocation of the vagrant executable.
///
/// `H` is the [`OutputHandler`] that receives every decoded record. Command
/// variants (see [`crate::commands`]) wrap a `Command` together with the
/// response type they expose.
pub struct Command<H> {
    id: Uuid,
    executable: PathBuf,
    working_dir: PathBuf,
    client_env: Vec<String>,
    /// Arguments appended after the subcommand's own arguments.
    pub additional_args: Vec<String>,
    /// `KEY=value` entries applied after the inherited and client environment.
    pub env: Vec<String>,
    /// Lines longer than this many bytes are skipped (default: [`MAX_LINE_BYTES`]).
    pub max_line_bytes: usize,
    state: CommandState,
    invocation: Option<Invocation>,
    handler: Option<H>,
    child: Option<Child>,
    pid: Option<u32>,
    reader: Option<JoinHandle<DrainReport<H>>>,
    close_tx: Option<oneshot::Sender<()>>,
    reader_failure: Option<String>,
    exit_status: Option<ExitStatus>,
    records_decoded: u64,
    lines_skipped: u64,
}

impl<H: OutputHandler> Command<H> {
    /// Create a command that runs in the client's Vagrantfile directory.
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            executable: config.vagrant_path.clone(),
            working_dir: config.vagrantfile_dir.clone(),
            client_env: config.env.clone(),
            additional_args: Vec::new(),
            env: Vec::new(),
            max_line_bytes: MAX_LINE_BYTES,
            state: CommandState::NotInitialized,
            invocation: None,
            handler: None,
            child: None,
            pid: None,
            reader: None,
            close_tx: None,
            reader_failure: None,
            exit_status: None,
            records_decoded: 0,
            lines_skipped: 0,
        }
    }

    /// Build the invocation `<vagrant> <subcommand> --machine-readable <args>
    /// <additional_args>` and store `handler`.
    ///
    /// A `None` handler means records are decoded and then discarded.
    ///
    /// # Errors
    /// Returns [`VagrantError::AlreadyInitialized`] if called more than once;
    /// the first invocation is left untouched.
    pub fn init<I, S>(&mut self, handler: Option<H>, subcommand: &str, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if self.state != CommandState::NotInitialized {
            return Err(VagrantError::AlreadyInitialized);
        }

        let args: Vec<String> = [subcommand.to_string(), MACHINE_READABLE_FLAG.to_string()]
            .into_iter()
            .chain(args.into_iter().map(Into::into))
            .chain(self.additional_args.iter().cloned())
            .collect();

        let mut env: Vec<String> = std::env::vars_os()
            .map(|(k, v)| format!("{}={}", k.to_string_lossy(), v.to_string_lossy()))
            .collect();
        let inherited = env.len();
        env.extend(self.client_env.iter().cloned());
        env.extend(self.env.iter().cloned());

        tracing::debug!(
            command_id = %self.id,
            subcommand,
            args = ?args,
            working_dir = %self.working_dir.display(),
            "Command initialized"
        );

        self.invocation = Some(Invocation {
            program: self.executable.clone(),
            args,
            env,
            working_dir: self.working_dir.clone(),
            inherited,
        });
        self.handler = handler;
        self.state = CommandState::Initialized;
        Ok(())
    }

    /// Spawn the process and the task that drains its stdout.
    ///
    /// Returns as soon as the process is spawned. Must be called from within
    /// a Tokio runtime.
    ///
    /// # Errors
    /// Returns an error if the command is not initialized, or
    /// [`VagrantError::Spawn`] if the executable cannot be started, in which
    /// case the command moves to [`CommandState::Failed`].
    pub fn start(&mut self) -> Result<()> {
        self.ensure_state(CommandState::Initialized)?;
        let Some(invocation) = self.invocation.as_ref() else {
            return Err(self.invalid_state(CommandState::Initialized));
        };

        let mut child = match invocation.to_command().spawn() {
            Ok(child) => child,
            Err(source) => {
                tracing::warn!(
                    command_id = %self.id,
                    program = %invocation.program.display(),
                    error = %source,
                    "Failed to spawn vagrant"
                );
                self.state = CommandState::Failed;
                return Err(VagrantError::Spawn {
                    program: invocation.program.clone(),
                    source,
                });
            }
        };

        let Some(stdout) = child.stdout.take() else {
            // Dropping the child kills it.
            self.state = CommandState::Failed;
            return Err(VagrantError::MissingStdout);
        };

        let pid = child.id();
        let (close_tx, close_rx) = oneshot::channel();
        let handler = self.handler.take();
        self.reader = Some(tokio::spawn(drain_output(
            self.id,
            stdout,
            handler,
            self.max_line_bytes,
            close_rx,
        )));
        self.close_tx = Some(close_tx);
        self.child = Some(child);
        self.pid = pid;
        self.state = CommandState::Started;

        tracing::info!(
            command_id = %self.id,
            program = %invocation.program.display(),
            subcommand = invocation.args.first().map(String::as_str).unwrap_or_default(),
            pid,
            "Vagrant started"
        );
        Ok(())
    }

    /// Wait until stdout is fully drained and the process has exited.
    ///
    /// Afterwards the handler is available again through [`Self::handler`]
    /// and the exit status through [`Self::exit_status`]. A non-zero exit is
    /// not an error here; see [`Self::ensure_success`].
    ///
    /// Cancel safe: if the returned future is dropped, calling `wait` again
    /// resumes where it left off. A handler or reader failure collected by a
    /// dropped call is kept.
    ///
    /// # Errors
    /// Returns an error if the command is not started, if the process cannot
    /// be waited on, or [`VagrantError::Reader`] if the handler panicked. In
    /// the last case the process has still been reaped.
    pub async fn wait(&mut self) -> Result<ExitStatus> {
        self.ensure_state(CommandState::Started)?;

        if let Some(reader) = self.reader.as_mut() {
            let joined = reader.await;
            self.reader = None;
            match joined {
                Ok(report) => {
                    self.handler = report.handler;
                    self.records_decoded = report.records;
                    self.lines_skipped = report.skipped;
                }
                Err(e) => {
                    tracing::error!(command_id = %self.id, error = %e, "Output reader task failed");
                    self.reader_failure = Some(e.to_string());
                }
            }
        }
        self.close_tx = None;

        let Some(child) = self.child.as_mut() else {
            return Err(self.invalid_state(CommandState::Started));
        };
        let status = match child.wait().await {
            Ok(status) => status,
            Err(e) => {
                self.state = CommandState::Failed;
                return Err(e.into());
            }
        };
        self.child = None;

        self.exit_status = Some(status);
        self.state = CommandState::Completed;

        if status.success() {
            tracing::info!(
                command_id = %self.id,
                records = self.records_decoded,
                skipped = self.lines_skipped,
                "Vagrant completed"
            );
        } else {
            tracing::warn!(
                command_id = %self.id,
                exit_code = ?status.code(),
                records = self.records_decoded,
                skipped = self.lines_skipped,
                "Vagrant exited unsuccessfully"
            );
        }

        match self.reader_failure.take() {
            Some(message) => Err(VagrantError::Reader(message)),
            None => Ok(status),
        }
    }

    /// Start the command and wait for it to complete.
    pub async fn run(&mut self) -> Result<ExitStatus> {
        self.start()?;
        self.wait().await
    }

    /// Close the output stream early and abandon the process.
    ///
    /// The reader task drops the stdout pipe and returns without dispatching
    /// any further records, and the process is killed. [`Self::wait`] must
    /// still be called; it returns promptly with the records dispatched so
    /// far. Returns `false` if there was no running reader to signal.
    pub fn close_output(&mut self) -> bool {
        let Some(tx) = self.close_tx.take() else {
            return false;
        };
        tracing::debug!(command_id = %self.id, "Closing command output");
        let signalled = tx.send(()).is_ok();

        if let Some(child) = self.child.as_mut() {
            if let Err(e) = child.start_kill() {
                tracing::debug!(command_id = %self.id, error = %e, "Process already exited");
            }
        }
        signalled
    }

    /// Forcefully kill the process.
    ///
    /// [`Self::wait`] must still be called to reap it.
    pub fn kill(&mut self) -> Result<()> {
        self.ensure_state(CommandState::Started)?;
        if let Some(child) = self.child.as_mut() {
            tracing::warn!(command_id = %self.id, pid = ?self.pid, "Killing vagrant");
            child.start_kill()?;
        }
        Ok(())
    }

    /// Check the overall outcome of a completed command.
    ///
    /// # Errors
    /// - [`VagrantError::ExitError`] if vagrant reported an `error-exit`
    /// - [`VagrantError::ExitStatus`] if the process exited abnormally
    /// - [`VagrantError::InvalidState`] if the command has not completed
    pub fn ensure_success(&self) -> Result<()> {
        self.ensure_state(CommandState::Completed)?;
        if let Some(message) = self.handler.as_ref().and_then(|h| h.terminal_error()) {
            return Err(VagrantError::ExitError(message.to_string()));
        }
        match self.exit_status {
            Some(status) if status.success() => Ok(()),
            status => Err(VagrantError::ExitStatus {
                code: status.and_then(|s| s.code()),
            }),
        }
    }

    /// Unique identifier used to correlate log lines.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get the current state.
    pub fn state(&self) -> CommandState {
        self.state
    }

    /// Executable this command runs.
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Directory this command runs in.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// The built invocation, once initialized.
    pub fn invocation(&self) -> Option<&Invocation> {
        self.invocation.as_ref()
    }

    /// The output handler.
    ///
    /// `None` while the command is running, since the reader task owns the
    /// handler until [`Self::wait`] returns.
    pub fn handler(&self) -> Option<&H> {
        self.handler.as_ref()
    }

    /// Consume the command and return its handler.
    pub fn into_handler(self) -> Option<H> {
        self.handler
    }

    /// Process ID, once started.
    pub fn pid(&self) -> Option<u32> {
        self.pid
    }

    /// Exit status, once completed.
    pub fn exit_status(&self) -> Option<ExitStatus> {
        self.exit_status
    }

    /// Exit code, `None` if not completed or killed by a signal.
    pub fn exit_code(&self) -> Option<i32> {
        self.exit_status.and_then(|s| s.code())
    }

    /// Whether the process completed with a zero exit code.
    pub fn success(&self) -> bool {
        self.exit_status.is_some_and(|s| s.success())
    }

    /// Number of records decoded from the output stream.
    pub fn records_decoded(&self) -> u64 {
        self.records_decoded
    }

    /// Number of output lines that could not be decoded.
    pub fn lines_skipped(&self) -> u64 {
        self.lines_skipped
    }

    fn ensure_state(&self, expected: CommandState) -> Result<()> {
        if self.state != expected {
            return Err(self.invalid_state(expected));
        }
        Ok(())
    }

    fn invalid_state(&self, expected: CommandState) -> VagrantError {
        VagrantError::InvalidState {
            expected: expected.to_string(),
            actual: self.state.to_string(),
        }
    }
}

impl<H> fmt::Debug for Command<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("id", &self.id)
            .field("state", &self.state)
            .field("invocation", &self.invocation)
            .field("pid", &self.pid)
            .field("exit_status", &self.exit_status)
            .finish_non_exhaustive()
    }
}

/// Read `stdout` to the end (or until `close_rx` fires), decoding each line
/// and dispatching it to `handler` in stream order.
///
/// Lines longer than `max_line_bytes` are counted as skipped and their
/// remainder discarded. The pipe is owned by this task and dropped on every
/// exit path.
async fn drain_output<H: OutputHandler>(
    command_id: Uuid,
    stdout: ChildStdout,
    mut handler: Option<H>,
    max_line_bytes: usize,
    mut close_rx: oneshot::Receiver<()>,
) -> DrainReport<H> {
    let mut reader = BufReader::new(stdout);
    let mut buf = Vec::new();
    let mut records = 0u64;
    let mut skipped = 0u64;
    let mut discarding = false;
    let limit = u64::try_from(max_line_bytes.saturating_add(1)).unwrap_or(u64::MAX);

    loop {
        buf.clear();
        let mut line_reader = (&mut reader).take(limit);
        let read = tokio::select! {
            _ = &mut close_rx => {
                tracing::debug!(%command_id, "Output closed before end of stream");
                break;
            }
            read = line_reader.read_until(b'\n', &mut buf) => read,
        };

        match read {
            Ok(0) => {
                tracing::trace!(%command_id, "End of output stream");
                break;
            }
            Ok(_) => {
                let complete = buf.ends_with(b"\n");
                if discarding {
                    // Rest of an oversized line.
                    discarding = !complete;
                    continue;
                }
                if !complete && buf.len() > max_line_bytes {
                    tracing::debug!(%command_id, max_line_bytes, "Skipping oversized line");
                    skipped += 1;
                    discarding = true;
                    continue;
                }

                let line = String::from_utf8_lossy(&buf);
                match decode_line(&line) {
                    Ok(record) => {
                        tracing::trace!(
                            %command_id,
                            target = %record.target,
                            kind = %record.kind,
                            fields = ?record.fields,
                            "Record"
                        );
                        records += 1;
                        if let Some(handler) = handler.as_mut() {
                            record.dispatch_to(handler);
                        }
                    }
                    Err(e) => {
                        tracing::debug!(
                            %command_id,
                            error = %e,
                            line = %line.trim_end(),
                            "Skipping undecodable line"
                        );
                        skipped += 1;
                    }
                }
            }
            Err(e) => {
                tracing::warn!(%command_id, error = %e, "Failed to read command output");
                break;
            }
        }
    }

    DrainReport {
        handler,
        records,
        skipped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder(Vec<String>);

    impl OutputHandler for Recorder {
        fn handle_output(&mut self, target: &str, kind: &str, fields: &[String]) {
            self.0.push(format!("{target}|{kind}|{}", fields.join("|")));
        }
    }

    fn config() -> ClientConfig {
        ClientConfig {
            vagrant_path: PathBuf::from("/usr/bin/vagrant"),
            vagrantfile_dir: PathBuf::from("/srv/project"),
            env: vec!["VAGRANT_CWD=/srv/project".to_string()],
        }
    }

    #[test]
    fn test_new_command_state() {
        let cmd: Command<Recorder> = Command::new(&config());
        assert_eq!(cmd.state(), CommandState::NotInitialized);
        assert!(cmd.invocation().is_none());
        assert_eq!(cmd.executable(), Path::new("/usr/bin/vagrant"));
        assert_eq!(cmd.working_dir(), Path::new("/srv/project"));
    }

    #[test]
    fn test_init_builds_argv() {
        let mut cmd = Command::new(&config());
        cmd.init(Some(Recorder::default()), "test", ["arg1", "arg2"])
            .unwrap();

        let invocation = cmd.invocation().expect("initialized");
        assert_eq!(
            invocation.argv(),
            vec![
                "/usr/bin/vagrant",
                "test",
                "--machine-readable",
                "arg1",
                "arg2"
            ]
        );
        assert_eq!(invocation.program, PathBuf::from("/usr/bin/vagrant"));
        assert_eq!(invocation.working_dir, PathBuf::from("/srv/project"));
        assert_eq!(cmd.state(), CommandState::Initialized);
    }

    #[test]
    fn test_init_additional_args_last() {
        let mut cmd: Command<Recorder> = Command::new(&config());
        cmd.additional_args = vec!["--myarg".to_string()];
        cmd.init(None, "up", ["--provider", "docker"]).unwrap();

        let args = &cmd.invocation().unwrap().args;
        assert_eq!(
            args,
            &vec!["up", "--machine-readable", "--provider", "docker", "--myarg"]
        );
    }

    #[test]
    fn test_init_env_overrides_last() {
        let mut cmd: Command<Recorder> = Command::new(&config());
        cmd.env = vec!["ENV1=value1".to_string()];
        cmd.init(None, "test", Vec::<String>::new()).unwrap();

        let invocation = cmd.invocation().unwrap();
        assert_eq!(invocation.env.last().map(String::as_str), Some("ENV1=value1"));
        assert_eq!(invocation.env_var("ENV1"), Some("value1"));
        assert_eq!(invocation.env_var("VAGRANT_CWD"), Some("/srv/project"));

        // Caller overrides come after the client's entries.
        let client_pos = invocation
            .env
            .iter()
            .position(|e| e == "VAGRANT_CWD=/srv/project")
            .unwrap();
        assert!(client_pos < invocation.env.len() - 1);
    }

    #[test]
    fn test_env_lookup_last_wins() {
        let invocation = Invocation {
            program: PathBuf::from("vagrant"),
            args: vec![],
            env: vec![
                "PATH=/usr/bin".to_string(),
                "VAGRANT_LOG=info".to_string(),
                "VAGRANT_LOG=debug".to_string(),
            ],
            working_dir: PathBuf::from("."),
            inherited: 1,
        };
        assert_eq!(invocation.env_var("VAGRANT_LOG"), Some("debug"));
        assert_eq!(invocation.env_var("PATH"), Some("/usr/bin"));
        assert_eq!(invocation.env_var("HOME"), None);
        // Both entries are kept positionally.
        assert_eq!(invocation.env.len(), 3);
        assert_eq!(
            invocation.overrides().to_vec(),
            vec!["VAGRANT_LOG=info", "VAGRANT_LOG=debug"]
        );
    }

    #[test]
    fn test_only_overrides_applied_to_process() {
        let mut cmd: Command<Recorder> = Command::new(&config());
        cmd.env = vec![
            "ENV1=value1".to_string(),
            "VAGRANT_CWD=/override".to_string(),
        ];
        cmd.init(None, "test", Vec::<String>::new()).unwrap();

        let invocation = cmd.invocation().unwrap();
        assert_eq!(
            invocation.overrides().to_vec(),
            vec![
                "VAGRANT_CWD=/srv/project",
                "ENV1=value1",
                "VAGRANT_CWD=/override"
            ]
        );

        // The inherited environment is passed through untouched, not re-applied.
        let process = invocation.to_command();
        let applied: Vec<(String, Option<String>)> = process
            .as_std()
            .get_envs()
            .map(|(k, v)| {
                (
                    k.to_string_lossy().into_owned(),
                    v.map(|v| v.to_string_lossy().into_owned()),
                )
            })
            .collect();
        assert_eq!(
            applied,
            vec![
                ("ENV1".to_string(), Some("value1".to_string())),
                ("VAGRANT_CWD".to_string(), Some("/override".to_string())),
            ]
        );
    }

    #[test]
    fn test_init_twice_leaves_first() {
        let mut cmd = Command::new(&config());
        cmd.init(Some(Recorder::default()), "status", ["first"]).unwrap();
        let before = cmd.invocation().cloned();

        cmd.additional_args = vec!["--later".to_string()];
        cmd.env = vec!["LATER=1".to_string()];
        let err = cmd
            .init(Some(Recorder::default()), "up", ["second"])
            .unwrap_err();

        assert!(matches!(err, VagrantError::AlreadyInitialized));
        assert_eq!(cmd.invocation().cloned(), before);
        assert_eq!(cmd.state(), CommandState::Initialized);
    }

    #[test]
    fn test_start_requires_init() {
        let mut cmd: Command<Recorder> = Command::new(&config());
        let err = cmd.start().unwrap_err();
        assert!(matches!(err, VagrantError::InvalidState { .. }));
        assert_eq!(cmd.state(), CommandState::NotInitialized);
    }

    #[tokio::test]
    async fn test_wait_requires_start() {
        let mut cmd: Command<Recorder> = Command::new(&config());
        cmd.init(None, "status", Vec::<String>::new()).unwrap();
        assert!(matches!(
            cmd.wait().await,
            Err(VagrantError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_ensure_success_requires_completion() {
        let cmd: Command<Recorder> = Command::new(&config());
        assert!(matches!(
            cmd.ensure_success(),
            Err(VagrantError::InvalidState { .. })
        ));
    }

    #[test]
    fn test_close_output_without_reader() {
        let mut cmd: Command<Recorder> = Command::new(&config());
        assert!(!cmd.close_output());
    }

    #[test]
    fn test_command_state_display() {
        assert_eq!(CommandState::NotInitialized.to_string(), "not initialized");
        assert_eq!(CommandState::Started.to_string(), "started");
        assert_eq!(CommandState::Failed.to_string(), "failed");
    }
}
