//! Validation pipeline for SQL statements.
//!
//! This module provides the checkers and the [`Validator`] that runs them.
//! Each checker is a pure function over the raw statement text and the
//! static rule catalogs; none of them mutate shared state,
//! so the pure passes are executed in parallel with [`rayon`] while their
//! results are concatenated in a fixed, documented order.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌──────────────────┐
//! │  SQL text   │────▶│  Validator  │────▶│ ValidationResult │
//! └─────────────┘     └─────────────┘     └──────────────────┘
//!                            │
//!                     ┌──────┴──────┐
//!                     │  Checkers   │
//!                     │ (parallel)  │
//!                     └─────────────┘
//! ```
//!
//! # Passes
//!
//! | Pass | Category | Findings |
//! |------|----------|----------|
//! | syntax | `syntax` | Unbalanced delimiters, missing clauses |
//! | security | `security` | Injection signatures, credential literals |
//! | performance | `performance` | Anti-patterns, missing LIMIT/WHERE |
//! | naming | `naming` | Mixed-case identifiers |
//! | existence | `existence` | Tables absent from the schema catalog |
//!
//! The existence pass only runs when a [`SchemaCatalog`] is supplied via
//! [`Validator::with_catalog`]; a failing catalog degrades to a single
//! Warning instead of aborting the run.
//!
//! [`SchemaCatalog`]: crate::catalog::SchemaCatalog

mod extract;
pub mod existence;
mod naming;
mod patterns;
mod performance;
mod security;
mod syntax;
mod types;

use std::sync::Arc;

use rayon::prelude::*;

pub use self::{
    existence::ExistenceChecker, naming::NamingChecker, performance::PerformanceChecker,
    security::SecurityChecker, syntax::SyntaxChecker,
    types::{Issue, Severity, ValidationResult}
};
use crate::catalog::SchemaCatalog;

/// Trait implemented by every validation pass.
///
/// Checkers are stateless inspectors over the raw statement text and must
/// be `Send + Sync` for parallel execution. They are total functions:
/// malformed or pathological input produces issues (or none), never a
/// processing fault.
pub trait Checker: Send + Sync {
    /// Pass name, matching the category of the issues it produces.
    fn name(&self) -> &'static str;

    /// Inspect the statement and report any findings.
    fn check(&self, sql: &str) -> ValidationResult;
}

/// Aggregator that runs every configured pass over one statement.
///
/// Passes run in a fixed order: syntax, security, performance, naming and,
/// when a catalog was supplied, existence last. Their issue lists are
/// concatenated in that order and the overall validity is recomputed over
/// the concatenated list, never taken from the sub-results (several passes
/// always report `is_valid = true` regardless of their findings).
///
/// # Example
///
/// ```
/// use sql_statement_validator::checks::Validator;
///
/// let validator = Validator::new();
/// let result = validator.validate("SELECT id, name FROM users WHERE id = 1 LIMIT 10;");
/// assert!(result.is_valid);
/// ```
pub struct Validator {
    checkers: Vec<Box<dyn Checker>>
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator {
    /// Validator with the four pure passes.
    pub fn new() -> Self {
        let checkers: Vec<Box<dyn Checker>> = vec![
            Box::new(SyntaxChecker),
            Box::new(SecurityChecker),
            Box::new(PerformanceChecker),
            Box::new(NamingChecker),
        ];
        Self {
            checkers
        }
    }

    /// Validator that additionally verifies table existence against the
    /// given catalog, scoped to `schema`.
    pub fn with_catalog(catalog: Arc<dyn SchemaCatalog>, schema: impl Into<String>) -> Self {
        let mut validator = Self::new();
        validator
            .checkers
            .push(Box::new(ExistenceChecker::new(catalog, schema)));
        validator
    }

    /// Names of the configured passes, in execution order.
    pub fn pass_names(&self) -> Vec<&'static str> {
        self.checkers.iter().map(|c| c.name()).collect()
    }

    /// Run every pass and merge the findings.
    ///
    /// Execution is parallel but the indexed collect keeps sub-results in
    /// declaration order, so identical input yields an identical issue
    /// list on every call.
    pub fn validate(&self, sql: &str) -> ValidationResult {
        let results: Vec<ValidationResult> =
            self.checkers.par_iter().map(|c| c.check(sql)).collect();

        let issues: Vec<Issue> = results.into_iter().flat_map(|r| r.issues).collect();
        ValidationResult::from_issues(issues)
    }
}
