//! # traefik-validate
//!
//! Validates Traefik file-provider configuration (YAML) for structural
//! correctness before it is deployed, and optionally auto-corrects missing
//! `routers` / `services` containers.
//!
//! ## Features
//!
//! - **Validation**: entry points, protocol sections, routers and their service references
//! - **Auto-correction**: inserts empty containers, never fabricates rules or services
//! - **YAML linting**: runs `yamllint` on every file before validation
//! - **CI output**: GitLab CI sections, GitHub Actions annotations, stylish and JSON
//!
//! ## Example
//!
//! ```rust,no_run
//! use traefik_validate::{correct, validate};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let document: serde_yaml::Value = serde_yaml::from_str(
//!     "entryPoints: {web: {address: ':80'}}\nhttp: {routers: {r1: {rule: 'Host(`a.com`)', service: s1}}}\n",
//! )?;
//! for error in validate(&document) {
//!     println!("{}", error);
//! }
//! let corrected = correct(&document);
//! println!("{}", serde_yaml::to_string(&corrected)?);
//! # Ok(())
//! # }
//! ```

pub mod analyzer;
pub mod cli;
pub mod common;
pub mod config;
pub mod error;
pub mod handlers;

// Re-export commonly used types and functions
pub use analyzer::traefik::{LintResult, TraefikLintConfig, correct, validate};
pub use error::{Result, ValidatorError};
pub use handlers::*;

/// The current version of the CLI tool
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
