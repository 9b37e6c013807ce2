use crate::command_line::CommandLine;
use crate::common::{base_directory, resolve_self_path, MaybeHasSelfPath, SelfPathResolver};
use crate::error::RelaunchError::{SelfPathUnresolved, SpawnFailure, WaitFailure};
use crate::error::RelaunchResult;
use crate::notice::{default_notifier, Notice, Notifier};
use crate::types::{ExitCode, LaunchLayout, LAUNCH_FAILURE_EXIT_CODE};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Child, Command, ExitStatus};
use tracing::{debug, error, info};

#[cfg(target_os = "windows")]
const BUILTIN_TARGET_NAME: &str = "xinghe_app.exe";
#[cfg(not(target_os = "windows"))]
const BUILTIN_TARGET_NAME: &str = "xinghe_app";

/// File name of the target inside the bin directory. Set `RELAUNCH_TARGET_NAME` at build time to change it.
pub const DEFAULT_TARGET_NAME: &str = match option_env!("RELAUNCH_TARGET_NAME") {
    Some(name) => name,
    None => BUILTIN_TARGET_NAME,
};

/// Name of the directory next to the launcher that holds the target
pub const DEFAULT_BIN_DIR_NAME: &str = "bin";

/// Start the target from the bin directory next to this executable, wait for it and hand back its exit code
pub struct Relauncher {
    target_name: OsString,
    bin_dir_name: OsString,
    self_path: Option<PathBuf>,
    self_path_resolver: SelfPathResolver,
    command_line: CommandLine,
    spawn_failure_notice: Notice,
    self_path_notice: Notice,
    notifier: Box<dyn Notifier>,
}

impl Relauncher {
    /// Create a relauncher for the default layout which forwards no arguments
    pub fn new() -> Self {
        Relauncher {
            target_name: DEFAULT_TARGET_NAME.into(),
            bin_dir_name: DEFAULT_BIN_DIR_NAME.into(),
            self_path: None,
            self_path_resolver: std::env::current_exe,
            command_line: CommandLine::default(),
            spawn_failure_notice: Notice::spawn_failure(),
            self_path_notice: Notice::self_path_unresolved(),
            notifier: default_notifier(),
        }
    }

    /// Create a relauncher for the default layout which forwards this process's own arguments
    pub fn from_env() -> Self {
        Relauncher::new().command_line(CommandLine::from_env())
    }

    /// Set the file name of the target inside the bin directory
    pub fn target_name(mut self, name: impl Into<OsString>) -> Self {
        self.target_name = name.into();
        self
    }

    /// Set the name of the directory next to the launcher that holds the target
    pub fn bin_dir_name(mut self, name: impl Into<OsString>) -> Self {
        self.bin_dir_name = name.into();
        self
    }

    /// Use this path as the launcher's location instead of asking the OS
    pub fn self_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.self_path = Some(path.into());
        self
    }

    /// Ask this function for the launcher's location when no self path is set
    pub fn self_path_resolver(mut self, resolver: SelfPathResolver) -> Self {
        self.self_path_resolver = resolver;
        self
    }

    /// Set the command line forwarded to the target
    pub fn command_line(mut self, command_line: CommandLine) -> Self {
        self.command_line = command_line;
        self
    }

    /// Forward these arguments to the target
    pub fn args<I, S>(self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.command_line(CommandLine::Args(args.into_iter().map(Into::into).collect()))
    }

    /// Set the notice shown when the target can't be started
    pub fn spawn_failure_notice(mut self, notice: Notice) -> Self {
        self.spawn_failure_notice = notice;
        self
    }

    /// Set the notice shown when the launcher can't work out where it is
    pub fn self_path_notice(mut self, notice: Notice) -> Self {
        self.self_path_notice = notice;
        self
    }

    /// Report failures through this notifier rather than the platform default
    pub fn notifier(mut self, notifier: impl Notifier + 'static) -> Self {
        self.notifier = Box::new(notifier);
        self
    }

    /// Work out where the target and its working directory are
    pub fn layout(&self) -> RelaunchResult<LaunchLayout> {
        let self_path = resolve_self_path(self)?;
        let base_dir = base_directory(&self_path);
        let working_dir = base_dir.join(&self.bin_dir_name);
        let target_path = working_dir.join(&self.target_name);

        Ok(LaunchLayout {
            self_path,
            base_dir,
            target_path,
            working_dir,
        })
    }

    /// Start the target without waiting for it
    pub fn spawn(&self) -> RelaunchResult<Child> {
        self.start().map(|(_, child)| child)
    }

    /// Start the target and wait for it to exit, returning its exit code
    ///
    /// There is no timeout, a target that never exits blocks this call forever.
    pub fn run(&self) -> RelaunchResult<ExitCode> {
        let (layout, mut child) = self.start()?;

        let status = child.wait().map_err(|source| WaitFailure {
            path: layout.target_path.clone(),
            source,
        })?;

        let code = exit_code(status);
        info!(code, target = %layout.target_path.display(), "target exited");

        Ok(code)
    }

    /// Run the target and turn any failure into a notice for the user and the launch failure exit code
    pub fn relay(&self) -> ExitCode {
        match self.run() {
            Ok(code) => code,
            Err(e) => {
                error!(error = ?e, "unable to relay target");

                let notice = match &e {
                    SelfPathUnresolved(_) => &self.self_path_notice,
                    SpawnFailure { .. } | WaitFailure { .. } => &self.spawn_failure_notice,
                };
                self.notifier.notify(notice);

                LAUNCH_FAILURE_EXIT_CODE
            }
        }
    }

    fn start(&self) -> RelaunchResult<(LaunchLayout, Child)> {
        let layout = self.layout()?;
        debug!(?layout, "resolved launch layout");

        let mut command = Command::new(&layout.target_path);
        command.current_dir(&layout.working_dir);
        self.command_line.apply(&mut command);

        let child = command.spawn().map_err(|source| SpawnFailure {
            path: layout.target_path.clone(),
            source,
        })?;
        debug!(pid = child.id(), "started target");

        Ok((layout, child))
    }
}

fn exit_code(status: ExitStatus) -> ExitCode {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;

        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    LAUNCH_FAILURE_EXIT_CODE
}

impl MaybeHasSelfPath for Relauncher {
    fn get_self_path(&self) -> Option<&Path> {
        self.self_path.as_deref()
    }

    fn get_self_path_resolver(&self) -> SelfPathResolver {
        self.self_path_resolver
    }
}

impl Default for Relauncher {
    fn default() -> Self {
        Relauncher::new()
    }
}
