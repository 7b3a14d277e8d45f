use std::sync::LazyLock;

use regex::Regex;

use super::{
    Checker,
    extract,
    types::{Issue, ValidationResult}
};

static MIXED_CASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z][A-Z]").expect("valid regex"));

/// Identifier convention scanner. Advisory only, always `is_valid = true`.
pub struct NamingChecker;

impl Checker for NamingChecker {
    fn name(&self) -> &'static str {
        "naming"
    }

    fn check(&self, sql: &str) -> ValidationResult {
        let mut issues = Vec::new();

        for identifier in extract::anchored_identifiers(sql) {
            if MIXED_CASE.is_match(&identifier) {
                issues.push(
                    Issue::info(
                        "naming",
                        format!("Identifier '{}' uses mixed case", identifier)
                    )
                    .with_suggestion("Consider using snake_case for consistency")
                );
            }
        }

        ValidationResult {
            is_valid: true,
            issues
        }
    }
}
