//! Keyword-anchored identifier extraction.
//!
//! The validator never parses statements into an AST; table references are
//! pulled out of the raw text by matching the first identifier token after
//! the clause keywords that introduce one.

use std::sync::LazyLock;

use compact_str::CompactString;
use indexmap::IndexSet;
use regex::Regex;
use smallvec::SmallVec;

/// Identifier anchors inspected by the naming checker, in report order.
static NAMING_ANCHORS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)\bFROM\s+([A-Za-z_][A-Za-z0-9_]*)",
        r"(?i)\bJOIN\s+([A-Za-z_][A-Za-z0-9_]*)",
        r"(?i)\bINSERT\s+INTO\s+([A-Za-z_][A-Za-z0-9_]*)",
        r"(?i)\bUPDATE\s+([A-Za-z_][A-Za-z0-9_]*)",
        r"(?i)\bCREATE\s+TABLE\s+([A-Za-z_][A-Za-z0-9_]*)",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("valid regex"))
    .collect()
});

/// Combined anchor used for table-existence extraction.
static TABLE_REF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:FROM|JOIN|INSERT\s+INTO|UPDATE|CREATE\s+TABLE|DROP\s+TABLE)\s+([A-Za-z_][A-Za-z0-9_]*)"
    )
    .expect("valid regex")
});

/// Keywords that the anchors capture on malformed or nested statements.
const CAPTURED_KEYWORDS: [&str; 4] = ["select", "where", "order", "group"];

/// All identifiers following a naming anchor, anchor by anchor.
///
/// Order is anchor order first, match order second; duplicates are kept so
/// every occurrence is inspected.
pub fn anchored_identifiers(sql: &str) -> SmallVec<[CompactString; 4]> {
    let mut identifiers = SmallVec::new();
    for anchor in NAMING_ANCHORS.iter() {
        for capture in anchor.captures_iter(sql) {
            if let Some(m) = capture.get(1) {
                identifiers.push(CompactString::from(m.as_str()));
            }
        }
    }
    identifiers
}

/// Table references for the existence pass.
///
/// Lowercased and deduplicated case-insensitively, preserving first-seen
/// order. Clause keywords accidentally captured after an anchor (e.g. the
/// `SELECT` of a subquery) are excluded.
pub fn table_refs(sql: &str) -> IndexSet<CompactString> {
    TABLE_REF
        .captures_iter(sql)
        .filter_map(|capture| capture.get(1))
        .map(|m| CompactString::from(m.as_str().to_lowercase()))
        .filter(|name| !CAPTURED_KEYWORDS.contains(&name.as_str()))
        .collect()
}
