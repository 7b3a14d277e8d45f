use std::sync::LazyLock;

use regex::Regex;

use super::{
    Checker,
    types::{Issue, ValidationResult}
};

static SELECT_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bSELECT\b").expect("valid regex"));

static FROM_KEYWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bFROM\b").expect("valid regex"));

/// Structural well-formedness pass.
///
/// Checks balanced delimiters and minimal required clauses without parsing
/// the statement. Apart from the empty-input short circuit, every check is
/// attempted even after an error has been found, so a single statement can
/// yield several syntax errors at once.
pub struct SyntaxChecker;

impl Checker for SyntaxChecker {
    fn name(&self) -> &'static str {
        "syntax"
    }

    fn check(&self, sql: &str) -> ValidationResult {
        let trimmed = sql.trim();
        if trimmed.is_empty() {
            return ValidationResult::from_issues(vec![Issue::error(
                "syntax",
                "Empty SQL statement"
            )]);
        }

        let mut issues = Vec::new();

        let open_parens = trimmed.matches('(').count();
        let close_parens = trimmed.matches(')').count();
        if open_parens != close_parens {
            issues.push(
                Issue::error(
                    "syntax",
                    format!(
                        "Unbalanced parentheses: {} open, {} close",
                        open_parens, close_parens
                    )
                )
                .with_suggestion(
                    "Ensure all opening parentheses have matching closing parentheses"
                )
            );
        }

        if unescaped_quote_count(trimmed) % 2 != 0 {
            issues.push(
                Issue::error("syntax", "Unbalanced single quotes")
                    .with_suggestion("Ensure all single quotes are properly closed")
            );
        }

        // Missing terminator is a style note, it never affects validity.
        if !trimmed.ends_with(';') {
            issues.push(
                Issue::info("syntax", "Missing semicolon at end of statement")
                    .with_suggestion("Add semicolon for better SQL standards compliance")
            );
        }

        // Heuristic: flags constant-only selects like `SELECT 1` too. That
        // noise is accepted for backward-compatible report shapes.
        if let Some(m) = SELECT_KEYWORD.find(trimmed)
            && !FROM_KEYWORD.is_match(&trimmed[m.end()..])
        {
            issues.push(
                Issue::error("syntax", "SELECT without FROM clause")
                    .with_suggestion("Check if SELECT statement is properly formed")
            );
        }

        ValidationResult::from_issues(issues)
    }
}

/// Count single quotes, skipping backslash-escaped ones.
fn unescaped_quote_count(sql: &str) -> usize {
    let mut count = 0;
    let mut prev = '\0';
    for ch in sql.chars() {
        if ch == '\'' && prev != '\\' {
            count += 1;
        }
        prev = ch;
    }
    count
}
