//! External YAML linter collaborator.
//!
//! Every file is passed through an external YAML linter (`yamllint` by
//! default) before it is parsed. A linter that rejects the file, or cannot be
//! run at all, fails that file; it never aborts the run.

use std::io::ErrorKind;
use std::path::Path;

use log::{debug, trace};

use crate::common::command_utils::execute_command_on;
use crate::error::ValidatorError;

pub const DEFAULT_COMMAND: &str = "yamllint";

/// Result of linting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinterOutcome {
    Passed,
    /// The linter ran and reported problems.
    Failed { diagnostics: String },
    /// The linter could not be run.
    Unavailable { reason: String },
}

impl LinterOutcome {
    pub fn passed(&self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// A YAML linter run on each file before validation.
pub trait ExternalLinter: Send + Sync {
    fn name(&self) -> &str;

    fn lint(&self, path: &Path) -> LinterOutcome;
}

/// Runs `yamllint` (or a configured replacement) as a subprocess.
#[derive(Debug, Clone)]
pub struct Yamllint {
    command: String,
    args: Vec<String>,
}

impl Default for Yamllint {
    fn default() -> Self {
        Self::new(DEFAULT_COMMAND, Vec::new())
    }
}

impl Yamllint {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

impl ExternalLinter for Yamllint {
    fn name(&self) -> &str {
        &self.command
    }

    fn lint(&self, path: &Path) -> LinterOutcome {
        debug!("Running {} on {}", self.command, path.display());

        let output = match execute_command_on(&self.command, &self.args, path) {
            Ok(output) => output,
            Err(ValidatorError::Io(err)) if err.kind() == ErrorKind::NotFound => {
                return LinterOutcome::Unavailable {
                    reason: format!("Error running {}: command not found", self.command),
                };
            }
            Err(err) => {
                return LinterOutcome::Unavailable {
                    reason: format!("Error running {}: {}", self.command, err),
                };
            }
        };

        if output.status.success() {
            trace!("{} passed {}", self.command, path.display());
            return LinterOutcome::Passed;
        }

        let mut diagnostics = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr);
        if !stderr.trim().is_empty() {
            if !diagnostics.is_empty() && !diagnostics.ends_with('\n') {
                diagnostics.push('\n');
            }
            diagnostics.push_str(&stderr);
        }
        LinterOutcome::Failed { diagnostics }
    }
}

/// A linter that accepts everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipLinter;

impl ExternalLinter for SkipLinter {
    fn name(&self) -> &str {
        "none"
    }

    fn lint(&self, _path: &Path) -> LinterOutcome {
        LinterOutcome::Passed
    }
}
