#![deny(missing_docs)]
#![doc = include_str!("../README.md")]

mod command_line;
mod common;
mod error;
mod notice;
mod relauncher;
mod types;

pub use crate::command_line::{skip_program_name, CommandLine};
pub use crate::common::SelfPathResolver;
pub use crate::error::{RelaunchError, RelaunchResult};
#[cfg(all(target_os = "windows", feature = "dialog"))]
pub use crate::notice::MessageBoxNotifier;
pub use crate::notice::{default_notifier, Notice, Notifier, StderrNotifier};
pub use crate::relauncher::{Relauncher, DEFAULT_BIN_DIR_NAME, DEFAULT_TARGET_NAME};
pub use crate::types::*;
