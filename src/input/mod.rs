//! Input acquisition
//!
//! Raw text comes either from piped standard input or from the captured stdout of a
//! child process.

#[cfg(unix)]
use std::fs::File;
use std::io::{self, Read};
use std::process::Command;

use thiserror::Error;
use tracing::debug;

/// Errors that can occur while acquiring input
#[derive(Error, Debug)]
pub enum InputError {
    #[error("read error: {0}")]
    Read(#[source] io::Error),

    #[error("command failed: {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The child ran but exited unsuccessfully; `stderr` is passed through verbatim
    #[error("command exited with status {code}")]
    CommandFailed { code: i32, stderr: Vec<u8> },
}

/// True when standard input is a pipe or a regular file.
///
/// Terminals and `/dev/null` are character devices and count as no input.
#[cfg(unix)]
pub fn stdin_is_piped() -> bool {
    use std::os::fd::AsFd;

    match io::stdin().as_fd().try_clone_to_owned() {
        Ok(fd) => is_piped_source(&File::from(fd)),
        Err(e) => {
            debug!(error = %e, "cannot inspect stdin");
            false
        }
    }
}

#[cfg(not(unix))]
pub fn stdin_is_piped() -> bool {
    use std::io::IsTerminal;

    !io::stdin().is_terminal()
}

#[cfg(unix)]
fn is_piped_source(file: &File) -> bool {
    use std::os::unix::fs::FileTypeExt;

    file.metadata().map(|meta| !meta.file_type().is_char_device()).unwrap_or(false)
}

/// Read all of standard input
pub fn read_stdin() -> Result<Vec<u8>, InputError> {
    read_all(io::stdin().lock())
}

pub fn read_all<R: Read>(mut reader: R) -> Result<Vec<u8>, InputError> {
    let mut input = Vec::new();
    reader.read_to_end(&mut input).map_err(InputError::Read)?;
    debug!(bytes = input.len(), "read input");
    Ok(input)
}

/// A command whose stdout is captured as parser input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandRunner {
    program: String,
    args: Vec<String>,
}

impl CommandRunner {
    /// Build a runner from `program arg...`; `None` when the list is empty
    pub fn from_command(command: &[String]) -> Option<Self> {
        let (program, args) = command.split_first()?;
        Some(Self { program: program.clone(), args: args.to_vec() })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run the command and return its stdout.
    ///
    /// The child's stdin is closed. Its stderr is only kept when it fails.
    pub fn run(&self) -> Result<Vec<u8>, InputError> {
        debug!(program = %self.program, args = ?self.args, "running command");

        let output = Command::new(&self.program).args(&self.args).output().map_err(|source| {
            InputError::Spawn { program: self.program.clone(), source }
        })?;

        if output.status.success() {
            Ok(output.stdout)
        } else {
            // Killed by a signal: no exit code to forward
            let code = output.status.code().unwrap_or(1);
            Err(InputError::CommandFailed { code, stderr: output.stderr })
        }
    }
}
