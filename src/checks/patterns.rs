//! Static rule catalogs for the pattern-based checkers.
//!
//! Each catalog is a process-wide table of compiled regular expressions
//! with the message, severity and category to report on a match. Catalogs
//! are built once on first use and never mutated, so they can be shared
//! freely across threads.

use std::sync::LazyLock;

use regex::Regex;

use super::types::Severity;

/// One entry of a static rule catalog.
pub struct PatternRule {
    pub regex:    Regex,
    pub message:  &'static str,
    pub severity: Severity,
    pub category: &'static str
}

fn rule(
    pattern: &str,
    message: &'static str,
    severity: Severity,
    category: &'static str
) -> PatternRule {
    PatternRule {
        regex: Regex::new(pattern).expect("valid regex"),
        message,
        severity,
        category
    }
}

/// SQL injection signatures.
///
/// Each signature is reported once per statement when it matches anywhere,
/// not once per occurrence. Catalog order is the report order.
pub static INJECTION_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule(
            r"(?i)'\s*;\s*DROP\s+TABLE",
            "Potential DROP TABLE injection",
            Severity::Error,
            "security"
        ),
        rule(
            r"(?i)'\s*;\s*DELETE\s+FROM",
            "Potential DELETE injection",
            Severity::Error,
            "security"
        ),
        rule(
            r"(?i)'\s*;\s*EXEC\s*\(",
            "Potential EXEC injection",
            Severity::Error,
            "security"
        ),
        rule(
            r"(?i)'\s*OR\s+'?\d+'?\s*=\s*'\d+",
            "Potential OR-based injection",
            Severity::Error,
            "security"
        ),
        rule(
            r"(?i)'\s*AND\s+'?\d+'?\s*=\s*'\d+",
            "Potential AND-based injection",
            Severity::Error,
            "security"
        ),
        rule(
            r"(?i)'\s*;\s*--",
            "Comment-based injection",
            Severity::Error,
            "security"
        ),
        rule(
            r"(?i)admin'--",
            "Comment-based authentication bypass",
            Severity::Error,
            "security"
        ),
        rule(
            r"(?i)admin'#",
            "Comment-based authentication bypass",
            Severity::Error,
            "security"
        ),
        rule(
            r"(?i)'\s+OR\s+1\s*=\s*1",
            "Classic tautology injection",
            Severity::Error,
            "security"
        ),
        rule(
            r"(?i)UNION\s+SELECT",
            "Potential UNION-based injection",
            Severity::Error,
            "security"
        ),
    ]
});

/// Hardcoded credential literal assigned to a password-like identifier.
///
/// Deliberately conservative: a Warning, not an Error, to avoid failing
/// legitimate references to password columns.
pub static CREDENTIAL_RULE: LazyLock<PatternRule> = LazyLock::new(|| {
    rule(
        r"(?i)(password|passwd|pwd)\s*=\s*'[^']+'",
        "Possible hardcoded password in query",
        Severity::Warning,
        "security"
    )
});

/// Performance anti-pattern signatures.
pub static PERFORMANCE_RULES: LazyLock<Vec<PatternRule>> = LazyLock::new(|| {
    vec![
        rule(
            r"(?i)SELECT\s+\*\s+FROM",
            "SELECT * can be inefficient, specify needed columns",
            Severity::Warning,
            "performance"
        ),
        rule(
            r"(?i)SELECT\s+\*\s+FROM\s+\w+\s+WHERE\s+\w+\s+LIKE\s+'%[^%]*%'",
            "Leading wildcard in LIKE prevents index use",
            Severity::Warning,
            "performance"
        ),
        rule(
            r"(?i)WHERE\s+SUBSTR\(",
            "Function on column in WHERE prevents index use",
            Severity::Warning,
            "performance"
        ),
        rule(
            r"(?i)WHERE\s+SUBSTRING\(",
            "Function on column in WHERE prevents index use",
            Severity::Warning,
            "performance"
        ),
        rule(
            r"(?i)WHERE\s+LOWER\(",
            "Function on column in WHERE prevents index use",
            Severity::Warning,
            "performance"
        ),
        rule(
            r"(?i)WHERE\s+UPPER\(",
            "Function on column in WHERE prevents index use",
            Severity::Warning,
            "performance"
        ),
        rule(
            r"(?i)ORDER\s+BY\s+\d+(?:\s*,\s*\d+)*",
            "ORDER BY ordinal position is fragile",
            Severity::Warning,
            "performance"
        ),
    ]
});
