use std::ffi::OsString;
use std::process::Command;

/// The arguments forwarded to the target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandLine {
    /// The unparsed tail of the launcher's own command line, passed on byte-for-byte
    #[cfg(target_os = "windows")]
    Raw(OsString),
    /// Individual arguments, excluding the program name
    Args(Vec<OsString>),
}

impl CommandLine {
    /// The arguments this process was started with, minus the program name
    #[cfg(target_os = "windows")]
    pub fn from_env() -> Self {
        use std::os::windows::ffi::OsStringExt;
        use windows::Win32::System::Environment::GetCommandLineW;

        // SAFETY: GetCommandLineW returns a pointer to a NUL terminated string owned by the process which
        // lives as long as the process does. It is only read here.
        let tail = unsafe {
            let cmd_line = GetCommandLineW();
            if cmd_line.is_null() {
                return CommandLine::Args(Vec::new());
            }
            OsString::from_wide(skip_program_name(cmd_line.as_wide()))
        };

        CommandLine::Raw(tail)
    }

    /// The arguments this process was started with, minus the program name
    #[cfg(not(target_os = "windows"))]
    pub fn from_env() -> Self {
        CommandLine::Args(std::env::args_os().skip(1).collect())
    }

    /// Check whether there is anything to forward
    pub fn is_empty(&self) -> bool {
        match self {
            #[cfg(target_os = "windows")]
            CommandLine::Raw(raw) => raw.is_empty(),
            CommandLine::Args(args) => args.is_empty(),
        }
    }

    pub(crate) fn apply(&self, command: &mut Command) {
        match self {
            #[cfg(target_os = "windows")]
            CommandLine::Raw(raw) => {
                use std::os::windows::process::CommandExt;

                if !raw.is_empty() {
                    command.raw_arg(raw);
                }
            }
            CommandLine::Args(args) => {
                command.args(args);
            }
        }
    }
}

impl Default for CommandLine {
    fn default() -> Self {
        CommandLine::Args(Vec::new())
    }
}

const QUOTE: u16 = b'"' as u16;
const SPACE: u16 = b' ' as u16;
const TAB: u16 = b'\t' as u16;

/// Drop the program name from a Windows command line, along with the whitespace after it.
///
/// The program name follows the C runtime's rule rather than the full argument rules: a leading quote runs to
/// the next quote and backslashes are not escapes, otherwise it ends at the first space or tab.
pub fn skip_program_name(cmd_line: &[u16]) -> &[u16] {
    let end = match cmd_line.first() {
        Some(&QUOTE) => match cmd_line[1..].iter().position(|&c| c == QUOTE) {
            Some(close) => close + 2,
            None => cmd_line.len(),
        },
        _ => cmd_line
            .iter()
            .position(|&c| c == SPACE || c == TAB)
            .unwrap_or(cmd_line.len()),
    };

    let rest = &cmd_line[end..];
    let start = rest
        .iter()
        .position(|&c| c != SPACE && c != TAB)
        .unwrap_or(rest.len());

    &rest[start..]
}
