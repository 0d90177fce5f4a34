use crate::{
    analyzer::traefik::{
        FileStatus, LintResult, OutputFormat, TraefikLintConfig, fix_file, format_results,
        lint_with_path, rules::all_rules,
    },
    analyzer::yamllint::{ExternalLinter, LinterOutcome, SkipLinter, Yamllint},
    common::command_utils::is_command_available,
    config::{load_config, types::Config},
    error::{Result, ValidatorError},
};
use colored::*;
use log::{debug, info, warn};
use rayon::prelude::*;
use std::path::{Path, PathBuf};

/// Options for a validation run, usually taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct ValidateOptions {
    pub directory: PathBuf,
    pub auto_correct: bool,
    pub dry_run: bool,
    pub skip_lint: bool,
    /// Overrides `[output] format`.
    pub format: Option<OutputFormat>,
    /// Enables strict mode on top of `[validation] strict`.
    pub strict: bool,
    pub no_color: bool,
    pub config: Option<PathBuf>,
}

/// Per-file results of a run, in discovery order.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub results: Vec<LintResult>,
    pub format: OutputFormat,
    pub strict: bool,
}

impl ValidationReport {
    /// Whether every file passed.
    pub fn passed(&self) -> bool {
        self.results.iter().all(|r| r.passed(self.strict))
    }

    pub fn render(&self) -> String {
        format_results(&self.results, self.format, self.strict)
    }

    pub fn count(&self, status: FileStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }
}

/// Recursively collect `.yml` / `.yaml` files under `directory`, sorted.
pub fn discover_yaml_files(directory: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(directory)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            let ext = p.extension().and_then(|e| e.to_str());
            matches!(ext, Some("yml") | Some("yaml"))
        })
        .collect();

    files.sort();
    debug!("Found {} YAML file(s) in {}", files.len(), directory.display());
    files
}

/// Lint, parse, validate and (optionally) correct one file.
pub fn process_file(
    path: &Path,
    linter: &dyn ExternalLinter,
    config: &TraefikLintConfig,
    auto_correct: bool,
    dry_run: bool,
) -> LintResult {
    let path_str = path.display().to_string();

    if config.is_excluded(&path_str) {
        debug!("{}: excluded", path_str);
        return LintResult::new(path_str).with_status(FileStatus::Skipped);
    }

    match linter.lint(path) {
        LinterOutcome::Passed => {}
        LinterOutcome::Failed { diagnostics } => {
            let mut result = LintResult::new(path_str).with_status(FileStatus::LintFailed);
            result.lint_output = Some(diagnostics);
            return result;
        }
        LinterOutcome::Unavailable { reason } => {
            let mut result = LintResult::new(path_str).with_status(FileStatus::LintFailed);
            result.parse_errors.push(reason);
            return result;
        }
    }

    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let mut result = LintResult::new(path_str).with_status(FileStatus::ReadFailed);
            result.parse_errors.push(format!("Failed to read file: {}", e));
            return result;
        }
    };

    let mut result = lint_with_path(&content, &path_str, config);
    debug!("{}: {}", path_str, result.status);
    if result.status != FileStatus::Invalid || !auto_correct {
        return result;
    }

    match fix_file(path, dry_run) {
        Ok(None) => {
            info!("{}: no automatic corrections available", path_str);
            result.remaining_failures = result.failures.clone();
            result.status = FileStatus::Corrected;
        }
        Ok(Some(outcome)) => {
            result.remaining_failures = lint_with_path(&outcome.content, &path_str, config).failures;
            result.corrections = outcome.corrections.iter().map(ToString::to_string).collect();
            if dry_run {
                result.corrected_content = Some(outcome.content);
            }
            result.status = FileStatus::Corrected;
        }
        Err(e) => {
            result
                .parse_errors
                .push(format!("Failed to write corrected configuration: {}", e));
            result.status = FileStatus::CorrectionFailed;
        }
    }

    result
}

fn build_linter(options: &ValidateOptions, config: &Config) -> Box<dyn ExternalLinter> {
    if options.skip_lint || !config.lint.enabled {
        debug!("External YAML linting disabled");
        return Box::new(SkipLinter);
    }

    if !is_command_available(&config.lint.command) {
        warn!(
            "'{}' was not found; every file will fail linting (use --skip-lint to disable)",
            config.lint.command
        );
    }
    Box::new(Yamllint::new(
        config.lint.command.clone(),
        config.lint.args.clone(),
    ))
}

/// Validate every YAML file under the configured directory.
pub fn run_validation(options: &ValidateOptions) -> Result<ValidationReport> {
    let directory = &options.directory;
    if !directory.is_dir() {
        return Err(ValidatorError::InvalidPath(directory.clone()));
    }

    let config = load_config(options.config.as_deref(), Some(directory))?;
    let format = match options.format {
        Some(format) => format,
        None => config.output.output_format()?,
    };
    let mut lint_config = config.validation.to_lint_config();
    lint_config.strict |= options.strict;

    if options.no_color || !config.output.color || !format.supports_color() {
        colored::control::set_override(false);
    }

    let linter = build_linter(options, &config);
    let files = discover_yaml_files(directory);

    info!(
        "Validating {} file(s) with linter '{}'",
        files.len(),
        linter.name()
    );

    let results: Vec<LintResult> = files
        .par_iter()
        .map(|path| {
            process_file(
                path,
                linter.as_ref(),
                &lint_config,
                options.auto_correct,
                options.dry_run,
            )
        })
        .collect();

    Ok(ValidationReport {
        results,
        format,
        strict: lint_config.strict,
    })
}

/// Run validation and print the report. Returns whether every file passed.
pub fn handle_validate(options: ValidateOptions) -> Result<bool> {
    let report = run_validation(&options)?;

    if report.results.is_empty() {
        println!("No YAML files found in {}", options.directory.display());
        return Ok(true);
    }

    print!("{}", report.render());

    info!(
        "{} file(s): {} valid, {} corrected, {} invalid",
        report.results.len(),
        report.count(FileStatus::Valid),
        report.count(FileStatus::Corrected),
        report.count(FileStatus::Invalid)
    );

    Ok(report.passed())
}

/// Render the rule catalogue.
pub fn handle_list_rules() -> String {
    let mut output = String::new();
    for rule in all_rules() {
        output.push_str(&format!(
            "{}  {:<26} {:<7} {}{}\n",
            rule.code.bold(),
            rule.name,
            rule.severity.as_str(),
            rule.description,
            if rule.fixable { " (fixable)" } else { "" }
        ));
    }
    output
}
