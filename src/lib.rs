//! # SQL Statement Validator Library
//!
//! Static validation library for SQL statements.

pub mod catalog;
pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
