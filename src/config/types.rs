use serde::{Deserialize, Serialize};

use crate::analyzer::traefik::{OutputFormat, TraefikLintConfig, TraefikLintConfigBuilder};
use crate::analyzer::yamllint::DEFAULT_COMMAND;
use crate::error::ConfigError;

/// Main configuration structure (`.traefik-validate.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub lint: LintConfig,
    pub validation: ValidationConfig,
    pub output: OutputConfig,
}

/// External YAML linter configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    pub enabled: bool,
    pub command: String,
    pub args: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            command: DEFAULT_COMMAND.to_string(),
            args: Vec::new(),
        }
    }
}

/// Rule and file selection
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationConfig {
    /// Rule codes or names switched off
    pub ignore: Vec<String>,
    /// Rule codes or names downgraded to warnings
    pub warn: Vec<String>,
    /// Path patterns skipped entirely
    pub exclude: Vec<String>,
    pub strict: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: String,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default().as_str().to_string(),
            color: true,
        }
    }
}

impl OutputConfig {
    pub fn output_format(&self) -> Result<OutputFormat, ConfigError> {
        OutputFormat::parse(&self.format).ok_or_else(|| ConfigError::InvalidValue {
            key: "output.format".to_string(),
            value: self.format.clone(),
        })
    }
}

impl ValidationConfig {
    /// Rule-level configuration for the validator.
    pub fn to_lint_config(&self) -> TraefikLintConfig {
        TraefikLintConfigBuilder::new()
            .ignore_rules(&self.ignore)
            .warn_rules(&self.warn)
            .exclude(self.exclude.clone())
            .strict(self.strict)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::traefik::{RuleCode, Severity};

    #[test]
    fn test_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
        assert!(config.lint.enabled);
        assert_eq!(config.lint.command, "yamllint");
        assert_eq!(config.output.output_format().unwrap(), OutputFormat::GitLab);
    }

    #[test]
    fn test_full_file() {
        let config: Config = toml::from_str(
            r#"
[lint]
enabled = false
command = "yamllint"
args = ["-s", "-d", "relaxed"]

[validation]
ignore = ["TRF011"]
warn = ["router-service-defined"]
exclude = ["vendor/*"]
strict = true

[output]
format = "json"
color = false
"#,
        )
        .unwrap();

        assert!(!config.lint.enabled);
        assert_eq!(config.lint.args, vec!["-s", "-d", "relaxed"]);
        assert_eq!(config.output.output_format().unwrap(), OutputFormat::Json);

        let lint = config.validation.to_lint_config();
        assert!(lint.strict);
        assert!(lint.is_rule_ignored(&RuleCode::new("TRF011")));
        assert_eq!(
            lint.effective_severity(&RuleCode::new("TRF009"), Severity::Error),
            Severity::Warning
        );
        assert!(lint.is_excluded("vendor/traefik.yml"));
    }

    #[test]
    fn test_unknown_keys_rejected() {
        assert!(toml::from_str::<Config>("[validation]\nignores = []\n").is_err());
    }

    #[test]
    fn test_invalid_format() {
        let output = OutputConfig {
            format: "junit".to_string(),
            color: true,
        };
        assert!(matches!(
            output.output_format(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
