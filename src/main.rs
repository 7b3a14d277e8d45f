//! # SQL Statement Validator
//!
//! Fast, deterministic validation for SQL statements without executing
//! them. The validator inspects the raw text with structural checks and
//! static pattern catalogs, reporting findings across five categories:
//!
//! | Category | Pass | Examples |
//! |----------|------|----------|
//! | `syntax` | always | Unbalanced parentheses, SELECT without FROM |
//! | `security` | always | Injection signatures, hardcoded credentials |
//! | `performance` | always | `SELECT *`, missing LIMIT, DELETE without WHERE |
//! | `naming` | always | Mixed-case identifiers |
//! | `existence` | opt-in | Tables missing from the schema catalog |
//!
//! # Quick Start
//!
//! ```bash
//! # Validate a statement directly
//! sql-statement-validator validate "SELECT id FROM users WHERE id = 1 LIMIT 10;"
//!
//! # Stream from stdin
//! echo "SELECT * FROM users" | sql-statement-validator validate -
//!
//! # Verify table existence against a DDL snapshot
//! sql-statement-validator validate -q query.sql \
//!     --check-existence --catalog schema.sql --schema public
//!
//! # Machine-readable output
//! sql-statement-validator validate "DELETE FROM users" -f json
//! ```
//!
//! # Exit Codes
//!
//! The process exit code reflects the highest severity issue found:
//!
//! - `0` - Statement is valid, at most info-level notes
//! - `1` - Warnings found
//! - `2` - Errors found, statement is invalid
//!
//! The existence pass degrades gracefully: when the catalog cannot be
//! reached it reports a single warning instead of failing the run.

use std::{
    fs::read_to_string,
    io::{self, Read},
    process,
    sync::Arc
};

use clap::Parser;
use sql_statement_validator::{
    catalog::DdlCatalog,
    checks::Validator,
    cli::{Cli, Commands, Format},
    config::Config,
    error::{AppResult, config_error, file_read_error},
    report::{OutputFormat, ReportOptions, format_validation_result}
};

fn main() {
    match run() {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

fn run() -> AppResult<i32> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Validate {
            sql,
            file,
            schema,
            catalog,
            check_existence,
            output_format,
            verbose,
            no_color
        } => {
            let statement = read_statement(sql, file)?;

            let target_schema = schema.unwrap_or(config.validation.default_schema);

            let validator = if check_existence {
                let path = catalog.ok_or_else(|| {
                    config_error(
                        "--catalog is required with --check-existence (DDL file or SQL_VALIDATOR_CATALOG)"
                    )
                })?;
                let ddl = read_to_string(&path)
                    .map_err(|e| file_read_error(&path.display().to_string(), e))?;
                let parsed = DdlCatalog::parse(&ddl)?;
                Validator::with_catalog(Arc::new(parsed), target_schema)
            } else {
                Validator::new()
            };

            if verbose {
                println!("Passes: {}", validator.pass_names().join(", "));
            }

            let result = validator.validate(&statement);

            let opts = ReportOptions {
                format:  match output_format {
                    Format::Text => OutputFormat::Text,
                    Format::Json => OutputFormat::Json,
                    Format::Yaml => OutputFormat::Yaml
                },
                colored: !no_color
            };
            println!("{}", format_validation_result(&result, &opts));

            let exit_code = if result.has_errors() {
                2 // Errors found
            } else if result.has_warnings() {
                1 // Warnings found
            } else {
                0 // No issues
            };
            Ok(exit_code)
        }
    }
}

/// Resolve the statement text from the positional argument, a file, or
/// stdin (`-` in either position).
fn read_statement(sql: Option<String>, file: Option<std::path::PathBuf>) -> AppResult<String> {
    if let Some(sql) = sql {
        if sql == "-" {
            return read_stdin();
        }
        return Ok(sql);
    }

    if let Some(path) = file {
        if path.to_str() == Some("-") {
            return read_stdin();
        }
        return read_to_string(&path).map_err(|e| file_read_error(&path.display().to_string(), e));
    }

    Err(config_error(
        "Provide a SQL statement, --file, or - for stdin"
    ))
}

fn read_stdin() -> AppResult<String> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| file_read_error("stdin", e))?;
    Ok(buffer)
}
