//! Schema catalog collaborator.
//!
//! The existence pass needs to know which tables exist in a schema. That
//! knowledge lives behind the [`SchemaCatalog`] trait so the validator can
//! run against anything that can enumerate table names: a live database, a
//! cached snapshot, or the bundled [`DdlCatalog`] parsed from DDL files.
//!
//! The trait exposes a single bulk operation. The validator never issues
//! per-table lookups, which bounds catalog latency to one round trip per
//! statement no matter how many tables are referenced.
//!
//! # Example
//!
//! ```
//! use sql_statement_validator::catalog::{DdlCatalog, SchemaCatalog};
//!
//! let sql = r#"
//!     CREATE TABLE users (id INT PRIMARY KEY);
//!     CREATE TABLE billing.invoices (id INT);
//! "#;
//!
//! let catalog = DdlCatalog::parse(sql).unwrap();
//! assert!(catalog.list_tables("public").unwrap().contains("users"));
//! assert!(catalog.list_tables("billing").unwrap().contains("invoices"));
//! ```

use std::collections::{BTreeMap, BTreeSet};

use sqlparser::{dialect::GenericDialect, parser::Parser};

use crate::error::{AppResult, ddl_parse_error};

/// Schema used for tables whose DDL does not qualify them.
pub const DEFAULT_SCHEMA: &str = "public";

/// External collaborator that can enumerate existing table names.
///
/// Implementations may block or fail; the existence pass converts a
/// failure into a single advisory Warning and completes. Retrying is the
/// caller's responsibility, not this layer's.
pub trait SchemaCatalog: Send + Sync {
    /// List the table names visible in `schema`, lowercased.
    ///
    /// # Errors
    ///
    /// Returns an error when the catalog cannot be reached or refuses the
    /// listing (connectivity, permission, timeout).
    fn list_tables(&self, schema: &str) -> AppResult<BTreeSet<String>>;
}

/// In-memory catalog built from `CREATE TABLE` statements.
///
/// Tables are grouped by schema; a qualified name like `billing.invoices`
/// lands under `billing`, unqualified names under [`DEFAULT_SCHEMA`].
/// Names are stored lowercased to match the case-insensitive extraction
/// used by the existence pass.
#[derive(Debug, Default, Clone)]
pub struct DdlCatalog {
    schemas: BTreeMap<String, BTreeSet<String>>
}

impl DdlCatalog {
    /// Parse DDL text into a catalog.
    ///
    /// Statements other than `CREATE TABLE` are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the DDL cannot be parsed.
    pub fn parse(sql: &str) -> AppResult<Self> {
        let statements = Parser::parse_sql(&GenericDialect {}, sql)
            .map_err(|e| ddl_parse_error(e.to_string()))?;

        let mut catalog = Self::default();
        for stmt in statements {
            if let sqlparser::ast::Statement::CreateTable(create) = stmt {
                catalog.record(&create.name.to_string());
            }
        }
        Ok(catalog)
    }

    /// Number of schemas with at least one table.
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }

    fn record(&mut self, object_name: &str) {
        let mut parts: Vec<String> = object_name
            .split('.')
            .map(|p| p.trim_matches('"').to_lowercase())
            .collect();

        let table = match parts.pop() {
            Some(t) if !t.is_empty() => t,
            _ => return
        };
        let schema = match parts.pop() {
            Some(s) if !s.is_empty() => s,
            _ => DEFAULT_SCHEMA.to_string()
        };

        self.schemas.entry(schema).or_default().insert(table);
    }
}

impl SchemaCatalog for DdlCatalog {
    fn list_tables(&self, schema: &str) -> AppResult<BTreeSet<String>> {
        Ok(self
            .schemas
            .get(&schema.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}
