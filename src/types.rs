use std::path::PathBuf;

/// An exit code as handed to `std::process::exit`
pub type ExitCode = i32;

/// Exit code used when the launcher itself could not start the target
pub const LAUNCH_FAILURE_EXIT_CODE: ExitCode = 1;

/// Where the launcher is and where it expects the target to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchLayout {
    /// The path of the running launcher
    pub self_path: PathBuf,
    /// The directory holding the launcher, empty if the self path has no separator
    pub base_dir: PathBuf,
    /// The executable to start
    pub target_path: PathBuf,
    /// The directory the target is started in
    pub working_dir: PathBuf,
}
