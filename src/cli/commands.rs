use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use chrono_tz::Tz;
use clap::Parser;
use tracing::debug;

use crate::config::{ParserConfig, parse_timezone};
use crate::encoder::{OutputFormat, write_json};
use crate::input::{CommandRunner, InputError, read_stdin, stdin_is_piped};
use crate::logging::init_logging;
use crate::parsers::ParserKind;

const USAGE: &str = "\
jcrs - JSON converter for command-line tools (jc compatible)

Usage:
    cmd | jcrs --git-log
    jcrs git log --oneline

Available parsers:
    --git-log";

#[derive(Parser, Debug)]
#[command(name = "jcrs")]
#[command(version)]
#[command(about = "Convert command output to JSON (jc compatible)", long_about = None)]
pub struct Cli {
    /// Parse git log output
    #[arg(long)]
    pub git_log: bool,

    /// Output formatted JSON
    #[arg(long)]
    pub pretty: bool,

    /// Timezone whose offset is used for the local `epoch` field
    #[arg(
        long,
        env = "JCRS_REFERENCE_TZ",
        default_value = "America/Los_Angeles",
        value_parser = parse_timezone
    )]
    pub reference_tz: Tz,

    /// Show debug diagnostics on stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Command to run and parse instead of reading standard input
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    execute(&cli)
}

/// Acquire input, parse it and print the JSON document.
///
/// Failures with a defined exit status are reported on stderr and returned as that
/// status; only output write failures surface as errors.
pub fn execute(cli: &Cli) -> Result<ExitCode> {
    let input = match CommandRunner::from_command(&cli.command) {
        Some(runner) => match runner.run() {
            Ok(stdout) => stdout,
            Err(InputError::CommandFailed { code, stderr }) => {
                io::stderr().write_all(&stderr).context("Failed to forward command stderr")?;
                return Ok(exit_code(code));
            }
            Err(e) => {
                eprintln!("{}", e);
                return Ok(ExitCode::FAILURE);
            }
        },
        None if stdin_is_piped() => match read_stdin() {
            Ok(input) if input.is_empty() => return Ok(ExitCode::SUCCESS),
            Ok(input) => input,
            Err(e) => {
                eprintln!("{}", e);
                return Ok(ExitCode::FAILURE);
            }
        },
        None => {
            eprintln!("{}", USAGE);
            return Ok(ExitCode::FAILURE);
        }
    };

    let Some(kind) = ParserKind::select(cli.git_log, &cli.command) else {
        eprintln!("error: no parser selected");
        return Ok(ExitCode::FAILURE);
    };

    let config = ParserConfig::with_reference_tz(cli.reference_tz);
    let output = match kind.parse(&input, config) {
        Ok(output) => output,
        Err(e) => {
            eprintln!("parse error: {}", e);
            return Ok(ExitCode::FAILURE);
        }
    };
    debug!(parser = ?kind, records = output.len(), "encoding output");

    write_json(io::stdout().lock(), &output, OutputFormat::from_pretty(cli.pretty))
        .context("Failed to write JSON output")?;

    Ok(ExitCode::SUCCESS)
}

/// Map a child's exit status onto ours
fn exit_code(code: i32) -> ExitCode {
    u8::try_from(code).map(ExitCode::from).unwrap_or(ExitCode::FAILURE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_flags_before_command() {
        let cli = Cli::try_parse_from(["jcrs", "--pretty", "git", "log", "--oneline", "-n", "3"])
            .unwrap();
        assert!(cli.pretty);
        assert!(!cli.git_log);
        assert_eq!(cli.command, vec!["git", "log", "--oneline", "-n", "3"]);
    }

    #[test]
    fn test_cli_flags_after_command_belong_to_command() {
        let cli = Cli::try_parse_from(["jcrs", "cat", "--pretty"]).unwrap();
        assert!(!cli.pretty);
        assert_eq!(cli.command, vec!["cat", "--pretty"]);
    }

    #[test]
    fn test_cli_reference_tz() {
        let cli = Cli::try_parse_from(["jcrs", "--reference-tz", "Europe/Zurich"]).unwrap();
        assert_eq!(cli.reference_tz, Tz::Europe__Zurich);
    }

    #[test]
    fn test_cli_rejects_unknown_timezone() {
        assert!(Cli::try_parse_from(["jcrs", "--reference-tz", "Nowhere/Land"]).is_err());
    }
}
