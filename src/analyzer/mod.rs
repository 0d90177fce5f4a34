//! Validation analyzers.
//!
//! - `traefik` - Traefik configuration validator and auto-corrector
//! - `yamllint` - External YAML linter run before validation

pub mod traefik;
pub mod yamllint;

pub use traefik::{LintResult, TraefikLintConfig, correct, validate};
pub use yamllint::{ExternalLinter, LinterOutcome, SkipLinter, Yamllint};
