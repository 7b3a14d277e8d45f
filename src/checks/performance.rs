use std::sync::LazyLock;

use regex::Regex;

use super::{
    Checker,
    patterns::PERFORMANCE_RULES,
    types::{Issue, ValidationResult}
};

static SELECT_FROM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)SELECT.+FROM").expect("valid regex"));

static LIMIT_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bLIMIT\b").expect("valid regex"));

static MUTATING_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(DELETE|UPDATE)\b").expect("valid regex"));

static WHERE_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bWHERE\b").expect("valid regex"));

/// Anti-pattern scanner plus clause-presence heuristics.
///
/// Advisory only: results always report `is_valid = true`.
pub struct PerformanceChecker;

impl Checker for PerformanceChecker {
    fn name(&self) -> &'static str {
        "performance"
    }

    fn check(&self, sql: &str) -> ValidationResult {
        let mut issues = Vec::new();

        for rule in PERFORMANCE_RULES.iter() {
            if rule.regex.is_match(sql) {
                issues.push(Issue::new(rule.severity, rule.category, rule.message));
            }
        }

        // Advisory, not a warning: unbounded result sets are often intended.
        if SELECT_FROM.is_match(sql) && !LIMIT_KEYWORD.is_match(sql) {
            issues.push(
                Issue::info("performance", "No LIMIT clause on SELECT statement")
                    .with_suggestion("Consider adding LIMIT to prevent large result sets")
            );
        }

        if MUTATING_KEYWORD.is_match(sql) && !WHERE_KEYWORD.is_match(sql) {
            issues.push(
                Issue::warning("performance", "DELETE/UPDATE without WHERE clause")
                    .with_suggestion(
                        "Ensure WHERE clause is present to avoid full table operations"
                    )
            );
        }

        ValidationResult {
            is_valid: true,
            issues
        }
    }
}
