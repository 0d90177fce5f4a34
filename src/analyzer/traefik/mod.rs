//! Traefik file-provider configuration validator.
//!
//! Checks dynamic/static Traefik YAML for structural correctness before it is
//! deployed, and optionally inserts missing `routers` / `services` containers.
//!
//! # Features
//!
//! - Fixed-order validation of `entryPoints`, `http`, `tcp` and `udp`
//! - Cross-section isolation of router → service references
//! - Line/column positions for every failure
//! - Conservative auto-correction (empty containers only)
//! - GitLab CI, stylish, GitHub Actions and JSON output
//!
//! # Example
//!
//! ```rust,ignore
//! use traefik_validate::analyzer::traefik::{lint, TraefikLintConfig};
//!
//! let yaml = r#"
//! entryPoints:
//!   web:
//!     address: ":80"
//! http:
//!   routers:
//!     app:
//!       rule: Host(`app.local`)
//!       service: app
//! "#;
//!
//! let result = lint(yaml, &TraefikLintConfig::default());
//! for failure in result.failures {
//!     println!("{}:{} {} - {}", failure.line, failure.column, failure.code, failure.message);
//! }
//! ```
//!
//! # Rules
//!
//! | Code   | Name                     | Fixable | Description                                         |
//! |--------|--------------------------|---------|-----------------------------------------------------|
//! | TRF001 | traefik-config-present   | No      | Document has `http`/`tcp`/`udp` or valid entryPoints |
//! | TRF002 | require-entrypoints      | No      | `entryPoints` must be a non-empty mapping           |
//! | TRF003 | section-is-mapping       | No      | Protocol sections must be mappings                  |
//! | TRF004 | routers-is-mapping       | No      | `routers` must be a mapping                         |
//! | TRF005 | router-is-mapping        | No      | Each router must be a mapping                       |
//! | TRF006 | router-rule-required     | No      | HTTP/TCP routers need a non-blank string rule       |
//! | TRF007 | udp-router-rule-type     | No      | A UDP router rule, if present, must be a string     |
//! | TRF008 | router-service-name-type | No      | A router service must be a string                   |
//! | TRF009 | router-service-defined   | No      | Router services must exist in the same section      |
//! | TRF010 | services-required        | No      | Referenced services need a non-empty `services`     |
//! | TRF011 | routers-required         | Yes     | `services` without `routers` is an orphan           |

pub mod config;
pub mod fix;
pub mod formatter;
pub mod lint;
pub mod parser;
pub mod rules;
pub mod types;

// Re-export main types and functions
pub use config::{TraefikLintConfig, TraefikLintConfigBuilder};
pub use fix::{Correction, FixOutcome, correct, correct_in_place, fix_content, fix_file};
pub use formatter::{OutputFormat, format_result, format_results};
pub use lint::{
    FileStatus, LintResult, apply_config, check_document, lint, lint_file, lint_with_path,
    validate,
};
pub use types::{CheckFailure, ConfigLevel, Protocol, RuleCategory, RuleCode, Severity};
