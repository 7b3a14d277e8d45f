use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL Statement Validator - Static checks for SQL statements
#[derive(Parser, Debug)]
#[command(name = "sql-statement-validator")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a single SQL statement
    Validate {
        /// SQL statement to validate (use - for stdin)
        sql: Option<String>,

        /// Read the SQL statement from a file instead
        #[arg(short = 'q', long)]
        file: Option<PathBuf>,

        /// Target schema for existence checks (defaults to configuration)
        #[arg(short, long)]
        schema: Option<String>,

        /// DDL file describing existing tables, used as the schema catalog
        #[arg(short, long, env = "SQL_VALIDATOR_CATALOG")]
        catalog: Option<PathBuf>,

        /// Verify that referenced tables exist in the catalog
        #[arg(long)]
        check_existence: bool,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        output_format: Format,

        /// List the validation passes before the report
        #[arg(short, long)]
        verbose: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool
    }
}

#[derive(Debug, Clone, ValueEnum)]
pub enum Format {
    Text,
    Json,
    Yaml
}
