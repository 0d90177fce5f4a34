use crate::error::Result;
use std::path::Path;
use std::process::{Command, Output};

/// Execute a command and return its captured output
pub fn execute_command(cmd: &str, args: &[&str]) -> Result<Output> {
    let output = Command::new(cmd).args(args).output()?;

    Ok(output)
}

/// Execute a command with a file path as its final argument
pub fn execute_command_on(cmd: &str, args: &[String], path: &Path) -> Result<Output> {
    let output = Command::new(cmd).args(args).arg(path).output()?;

    Ok(output)
}

/// Check if a command is available in PATH
pub fn is_command_available(cmd: &str) -> bool {
    execute_command(cmd, &["--version"]).is_ok()
}
