//! JSON output formatter.

use serde_json::json;

use crate::analyzer::traefik::lint::LintResult;
use crate::analyzer::traefik::types::{CheckFailure, Severity};

fn message(f: &CheckFailure) -> serde_json::Value {
    json!({
        "ruleId": f.code.as_str(),
        "ruleName": f.rule_name,
        "severity": match f.severity {
            Severity::Error => 2,
            Severity::Warning => 1,
        },
        "severityName": f.severity.as_str(),
        "category": f.category.as_str(),
        "message": f.message,
        "line": f.line,
        "column": f.column,
        "fixable": f.fixable,
        "data": f.data
    })
}

/// Format results as JSON.
pub fn format(results: &[LintResult], strict: bool) -> String {
    let output: Vec<serde_json::Value> = results
        .iter()
        .map(|result| {
            json!({
                "filePath": result.file_path,
                "status": result.status.as_str(),
                "passed": result.passed(strict),
                "messages": result.failures.iter().map(message).collect::<Vec<_>>(),
                "remainingMessages": result.remaining_failures.iter().map(message).collect::<Vec<_>>(),
                "corrections": result.corrections,
                "errorCount": result.error_count,
                "warningCount": result.warning_count,
                "fixableCount": result.fixable_count,
                "parseErrors": result.parse_errors,
                "lintOutput": result.lint_output,
                "correctedContent": result.corrected_content
            })
        })
        .collect();

    serde_json::to_string_pretty(&output).unwrap_or_else(|_| "[]".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::traefik::lint::FileStatus;
    use crate::analyzer::traefik::types::RuleCategory;

    #[test]
    fn test_json_format() {
        let mut result = LintResult::new("dynamic.yml").with_status(FileStatus::Invalid);
        result.failures.push(
            CheckFailure::new(
                "TRF009",
                "router-service-defined",
                Severity::Error,
                RuleCategory::Reference,
                "Router 'r1' in HTTP references undefined service 's1'.",
                6,
                7,
            )
            .with_data("service", "s1"),
        );
        result.update_counts();

        let output = format(&[result], false);
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        let arr = parsed.as_array().unwrap();
        assert_eq!(arr.len(), 1);

        let file_result = &arr[0];
        assert_eq!(file_result["filePath"], "dynamic.yml");
        assert_eq!(file_result["status"], "invalid");
        assert_eq!(file_result["passed"], false);
        assert_eq!(file_result["errorCount"], 1);
        assert!(file_result["lintOutput"].is_null());

        let messages = file_result["messages"].as_array().unwrap();
        assert_eq!(messages[0]["ruleId"], "TRF009");
        assert_eq!(messages[0]["line"], 6);
        assert_eq!(messages[0]["data"]["service"], "s1");
    }

    #[test]
    fn test_json_format_empty() {
        let result = LintResult::new("dynamic.yml");
        let parsed: serde_json::Value = serde_json::from_str(&format(&[result], true)).unwrap();
        assert!(parsed[0]["messages"].as_array().unwrap().is_empty());
        assert_eq!(parsed[0]["passed"], true);
    }
}
