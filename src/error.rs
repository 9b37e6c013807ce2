use std::path::PathBuf;
use thiserror::Error;

/// Result type used throughout the crate
pub type RelaunchResult<T> = Result<T, RelaunchError>;

/// Ways the launcher can fail to relay the target
#[derive(Error, Debug)]
pub enum RelaunchError {
    /// The path of the running launcher could not be determined
    #[error("unable to resolve the launcher's own path")]
    SelfPathUnresolved(#[source] std::io::Error),

    /// The target could not be started, for any reason
    #[error("failed to start {path:?}")]
    SpawnFailure {
        /// The target that was being started
        path: PathBuf,
        /// The OS error
        #[source]
        source: std::io::Error,
    },

    /// The target started but its exit could not be observed
    #[error("failed waiting for {path:?} to exit")]
    WaitFailure {
        /// The target being waited on
        path: PathBuf,
        /// The OS error
        #[source]
        source: std::io::Error,
    },
}
