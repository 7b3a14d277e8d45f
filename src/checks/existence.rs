//! Table-existence pass backed by an external schema catalog.
//!
//! The only checker that can block or fail on an external dependency. It
//! issues exactly one bulk catalog lookup per statement and degrades to a
//! Warning when the lookup fails: the inability to check is not evidence
//! of a problem, so it is never escalated to an Error.

use std::sync::Arc;

use super::{
    Checker,
    extract,
    types::{Issue, ValidationResult}
};
use crate::catalog::SchemaCatalog;

/// Cross-references table names extracted from the statement against the
/// set of tables visible in the target schema.
pub struct ExistenceChecker {
    schema:  String,
    catalog: Arc<dyn SchemaCatalog>
}

impl ExistenceChecker {
    pub fn new(catalog: Arc<dyn SchemaCatalog>, schema: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            catalog
        }
    }
}

impl Checker for ExistenceChecker {
    fn name(&self) -> &'static str {
        "existence"
    }

    fn check(&self, sql: &str) -> ValidationResult {
        let tables = extract::table_refs(sql);
        if tables.is_empty() {
            return ValidationResult::valid();
        }

        let mut issues = Vec::new();
        match self.catalog.list_tables(&self.schema) {
            Ok(existing) => {
                for table in &tables {
                    if !existing.contains(table.as_str()) {
                        issues.push(
                            Issue::error(
                                "existence",
                                format!(
                                    "Table '{}' does not exist in schema '{}'",
                                    table, self.schema
                                )
                            )
                            .with_suggestion("Verify the table name or create the table first")
                        );
                    }
                }
            }
            Err(e) => {
                issues.push(
                    Issue::warning(
                        "existence",
                        format!("Could not verify table existence: {}", e)
                    )
                    .with_suggestion("Ensure the schema catalog is reachable")
                );
            }
        }

        ValidationResult::from_issues(issues)
    }
}
