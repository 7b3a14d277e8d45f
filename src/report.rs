//! Report rendering for validation results.
//!
//! The text report is a display convenience for terminals and logs, not a
//! machine-interchange format; its exact wording carries no stability
//! guarantee. Categories are listed alphabetically regardless of the order
//! the passes ran, because reports are diffed by humans. For programmatic
//! consumption use the `json` or `yaml` formats, which serialize the
//! [`ValidationResult`] as-is.

use std::collections::BTreeMap;

use colored::Colorize;

use crate::checks::{Issue, Severity, ValidationResult};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml
}

/// Report rendering options
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub format:  OutputFormat,
    pub colored: bool
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            format:  OutputFormat::Text,
            colored: true
        }
    }
}

/// Render a validation result according to the output options.
pub fn format_validation_result(result: &ValidationResult, opts: &ReportOptions) -> String {
    match opts.format {
        OutputFormat::Json => serde_json::to_string_pretty(result).unwrap_or_default(),
        OutputFormat::Yaml => serde_yaml::to_string(result).unwrap_or_default(),
        OutputFormat::Text => format_text_report(result, opts)
    }
}

fn format_text_report(result: &ValidationResult, opts: &ReportOptions) -> String {
    let mut lines = vec![summary_line(result, opts)];

    // Alphabetical grouping, production order within each category.
    let mut categories: BTreeMap<&str, Vec<&Issue>> = BTreeMap::new();
    for issue in &result.issues {
        categories.entry(issue.category).or_default().push(issue);
    }

    for (category, issues) in categories {
        let header = format!("\n{}:", category.to_uppercase());
        if opts.colored {
            lines.push(header.bold().to_string());
        } else {
            lines.push(header);
        }
        for issue in issues {
            lines.push(format_issue(issue, opts));
            if let Some(suggestion) = &issue.suggestion {
                lines.push(format!("     → {}", suggestion));
            }
        }
    }

    lines.join("\n")
}

fn summary_line(result: &ValidationResult, opts: &ReportOptions) -> String {
    let errors = result.error_count();
    let warnings = result.warning_count();
    let info = result.info_count();

    let line = if result.is_valid && warnings == 0 && info == 0 {
        String::from("✓ SQL validation passed - no issues found")
    } else if result.is_valid {
        format!(
            "✓ SQL validation passed - {} warning(s), {} info",
            warnings, info
        )
    } else {
        format!(
            "✗ SQL validation failed - {} error(s), {} warning(s), {} info",
            errors, warnings, info
        )
    };

    if !opts.colored {
        return line;
    }
    if result.is_valid {
        line.green().to_string()
    } else {
        line.red().to_string()
    }
}

fn format_issue(issue: &Issue, opts: &ReportOptions) -> String {
    let icon = if opts.colored {
        match issue.severity {
            Severity::Error => issue.severity.icon().red().to_string(),
            Severity::Warning => issue.severity.icon().yellow().to_string(),
            Severity::Info => issue.severity.icon().blue().to_string()
        }
    } else {
        issue.severity.icon().to_string()
    };

    let position = match (issue.line, issue.column) {
        (Some(line), Some(column)) => format!(" (line {}, column {})", line, column),
        (Some(line), None) => format!(" (line {})", line),
        _ => String::new()
    };

    format!("  {} {}{}", icon, issue.message, position)
}
