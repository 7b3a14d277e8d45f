//! Type definitions for the validation pipeline.
//!
//! This module defines the core types shared by every checker:
//! - [`Severity`] - Issue severity levels (Info, Warning, Error)
//! - [`Issue`] - Individual finding with category, message and context
//! - [`ValidationResult`] - Immutable outcome of a validation pass

use serde::Serialize;

/// Severity level of a validation issue.
///
/// Ordered from lowest to highest severity for sorting purposes.
/// Only [`Severity::Error`] affects the validity of a statement; warnings
/// and info notes are advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Severity {
    /// Stylistic note, never affects validity or exit code
    Info,
    /// Advisory finding that may indicate a problem (exit code 1)
    Warning,
    /// Issue that makes the statement invalid (exit code 2)
    Error
}

impl Severity {
    /// Icon used when rendering text reports.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Warning => "⚠",
            Self::Error => "✗"
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR")
        }
    }
}

/// A single finding produced by a checker.
///
/// Issues are immutable once produced: checkers build them and hand them
/// to the aggregator, which only concatenates. The category is one of
/// `syntax`, `security`, `performance`, `naming`, `existence`.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// Severity level of this finding
    pub severity:   Severity,
    /// Category tag used for report grouping
    pub category:   &'static str,
    /// Human-readable description of the finding
    pub message:    String,
    /// One-based line of the finding, when known
    pub line:       Option<usize>,
    /// One-based column of the finding, when known
    pub column:     Option<usize>,
    /// Optional remediation suggestion
    pub suggestion: Option<String>
}

impl Issue {
    pub fn new(severity: Severity, category: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity,
            category,
            message: message.into(),
            line: None,
            column: None,
            suggestion: None
        }
    }

    pub fn error(category: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, category, message)
    }

    pub fn warning(category: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, category, message)
    }

    pub fn info(category: &'static str, message: impl Into<String>) -> Self {
        Self::new(Severity::Info, category, message)
    }

    /// Attach a remediation suggestion.
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attach a source position.
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.line = Some(line);
        self.column = Some(column);
        self
    }
}

/// Outcome of a validation pass or of the full pipeline.
///
/// Invariant: `is_valid` holds iff no contained issue has
/// [`Severity::Error`]. Checkers that are advisory by contract (security,
/// performance, naming) construct the result with `is_valid = true`
/// regardless of their findings; the aggregator recomputes validity over
/// the concatenated issue list and is the sole authority on it.
///
/// Issue order is a documented contract: issues appear in the order the
/// checkers ran and, within a checker, in the order patterns were tested.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationResult {
    /// Whether the statement passed validation
    pub is_valid: bool,
    /// All findings, in production order
    pub issues:   Vec<Issue>
}

impl ValidationResult {
    /// Empty result for a statement with no findings.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            issues:   Vec::new()
        }
    }

    /// Build a result deriving validity from the issue list.
    pub fn from_issues(issues: Vec<Issue>) -> Self {
        let is_valid = !issues.iter().any(|i| i.severity == Severity::Error);
        Self {
            is_valid,
            issues
        }
    }

    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Warning)
    }

    /// All error-severity issues, in production order.
    pub fn errors(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Error)
    }

    /// All warning-severity issues, in production order.
    pub fn warnings(&self) -> impl Iterator<Item = &Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity == Severity::Warning)
    }

    /// All info-severity issues, in production order.
    pub fn infos(&self) -> impl Iterator<Item = &Issue> {
        self.issues.iter().filter(|i| i.severity == Severity::Info)
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    pub fn info_count(&self) -> usize {
        self.infos().count()
    }
}
