use sql_statement_validator::checks::{
    Checker, NamingChecker, PerformanceChecker, SecurityChecker, Severity, SyntaxChecker
};

// Syntax checker

#[test]
fn test_syntax_empty_statement() {
    let result = SyntaxChecker.check("");
    assert!(!result.is_valid);
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].category, "syntax");
    assert_eq!(result.issues[0].message, "Empty SQL statement");
}

#[test]
fn test_syntax_whitespace_only_statement() {
    let result = SyntaxChecker.check("   \n\t  ");
    assert!(!result.is_valid);
    assert_eq!(result.issues.len(), 1);
}

#[test]
fn test_syntax_unbalanced_parentheses_reports_counts() {
    let result = SyntaxChecker.check("SELECT id FROM users WHERE id IN ((1, 2;");
    assert!(!result.is_valid);
    let paren_issue = result
        .issues
        .iter()
        .find(|i| i.message.contains("parentheses"))
        .unwrap();
    assert!(paren_issue.message.contains("2 open, 0 close"));
    assert!(paren_issue.suggestion.is_some());
}

#[test]
fn test_syntax_odd_quote_count() {
    let result = SyntaxChecker.check("SELECT id FROM users WHERE name = 'broken;");
    assert!(result.issues.iter().any(|i| i.message.contains("quotes")));
    assert!(!result.is_valid);
}

#[test]
fn test_syntax_escaped_quote_not_counted() {
    let result = SyntaxChecker.check(r"SELECT id FROM logs WHERE note = 'it\'s fine';");
    assert!(!result.issues.iter().any(|i| i.message.contains("quotes")));
}

#[test]
fn test_syntax_missing_semicolon_is_info_only() {
    let result = SyntaxChecker.check("SELECT id FROM users");
    let note = result
        .issues
        .iter()
        .find(|i| i.message.contains("semicolon"))
        .unwrap();
    assert_eq!(note.severity, Severity::Info);
    // Info notes never affect validity.
    assert!(result.is_valid);
}

#[test]
fn test_syntax_select_without_from() {
    let result = SyntaxChecker.check("SELECT id, name;");
    assert!(!result.is_valid);
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.message == "SELECT without FROM clause")
    );
}

#[test]
fn test_syntax_constant_select_false_positive_is_kept() {
    // Documented heuristic noise: SELECT 1 has no FROM and is flagged.
    let result = SyntaxChecker.check("SELECT 1;");
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.message == "SELECT without FROM clause")
    );
}

#[test]
fn test_syntax_multiple_errors_in_one_call() {
    let result = SyntaxChecker.check("SELECT (id FROM users WHERE name = 'x");
    // Unbalanced parentheses and unbalanced quotes both reported.
    assert!(result.error_count() >= 2);
}

#[test]
fn test_syntax_clean_statement() {
    let result = SyntaxChecker.check("SELECT id FROM users WHERE id = 1;");
    assert!(result.is_valid);
    assert!(result.issues.is_empty());
}

// Security checker

#[test]
fn test_security_or_tautology() {
    let result = SecurityChecker.check("SELECT * FROM users WHERE name = 'admin' OR '1'='1'");
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.severity == Severity::Error && i.category == "security")
    );
}

#[test]
fn test_security_is_valid_even_with_findings() {
    // The pass never fails by design; validity is the aggregator's call.
    let result = SecurityChecker.check("SELECT * FROM users WHERE name = 'admin' OR '1'='1'");
    assert!(result.is_valid);
    assert!(result.error_count() > 0);
}

#[test]
fn test_security_stacked_drop_table() {
    let result = SecurityChecker.check("SELECT * FROM t WHERE id = ''; DROP TABLE users; --'");
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.message.contains("DROP TABLE"))
    );
}

#[test]
fn test_security_union_select() {
    let result = SecurityChecker.check("SELECT id FROM a UNION SELECT password FROM b");
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.message.contains("UNION-based"))
    );
}

#[test]
fn test_security_comment_bypass() {
    let result = SecurityChecker.check("SELECT * FROM users WHERE name = 'admin'--' AND x = 1");
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.message.contains("authentication bypass"))
    );
}

#[test]
fn test_security_suggestion_recommends_binding() {
    let result = SecurityChecker.check("SELECT * FROM t WHERE a = '' OR 1=1");
    let issue = result.issues.first().unwrap();
    assert!(issue.suggestion.as_deref().unwrap().contains("parameterized"));
}

#[test]
fn test_security_hardcoded_password_is_warning() {
    let result = SecurityChecker.check("UPDATE users SET password = 'hunter2' WHERE id = 1");
    let issue = result
        .issues
        .iter()
        .find(|i| i.message.contains("password"))
        .unwrap();
    assert_eq!(issue.severity, Severity::Warning);
}

#[test]
fn test_security_distinct_signatures_each_reported() {
    let sql = "SELECT id FROM a WHERE x = '' OR 1=1 UNION SELECT pwd FROM b";
    let result = SecurityChecker.check(sql);
    assert!(result.issues.len() >= 2);
}

#[test]
fn test_security_same_signature_reported_once() {
    // Two occurrences of the same signature still yield a single issue.
    let sql = "SELECT id FROM a UNION SELECT x FROM b UNION SELECT y FROM c";
    let result = SecurityChecker.check(sql);
    let union_count = result
        .issues
        .iter()
        .filter(|i| i.message.contains("UNION-based"))
        .count();
    assert_eq!(union_count, 1);
}

#[test]
fn test_security_clean_statement() {
    let result = SecurityChecker.check("SELECT id, name FROM users WHERE id = 1 LIMIT 10;");
    assert!(result.issues.is_empty());
}

// Performance checker

#[test]
fn test_performance_select_star_warning() {
    let result = PerformanceChecker.check("SELECT * FROM users LIMIT 10;");
    let issue = result
        .issues
        .iter()
        .find(|i| i.message.contains("SELECT *"))
        .unwrap();
    assert_eq!(issue.severity, Severity::Warning);
    assert!(result.is_valid);
}

#[test]
fn test_performance_leading_wildcard() {
    let result = PerformanceChecker.check("SELECT * FROM users WHERE name LIKE '%test%' LIMIT 5");
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.message.contains("Leading wildcard"))
    );
}

#[test]
fn test_performance_function_on_column() {
    let result =
        PerformanceChecker.check("SELECT id FROM users WHERE LOWER(email) = 'x' LIMIT 1");
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.message.contains("Function on column"))
    );
}

#[test]
fn test_performance_order_by_ordinal() {
    let result = PerformanceChecker.check("SELECT id, name FROM users ORDER BY 1, 2 LIMIT 10");
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.message.contains("ordinal"))
    );
}

#[test]
fn test_performance_missing_limit_is_info() {
    let result = PerformanceChecker.check("SELECT id FROM users WHERE id = 1;");
    let issue = result
        .issues
        .iter()
        .find(|i| i.message.contains("LIMIT"))
        .unwrap();
    assert_eq!(issue.severity, Severity::Info);
}

#[test]
fn test_performance_delete_without_where() {
    let result = PerformanceChecker.check("DELETE FROM users");
    let issue = result
        .issues
        .iter()
        .find(|i| i.message.contains("WHERE"))
        .unwrap();
    assert_eq!(issue.severity, Severity::Warning);
    assert!(issue.suggestion.as_deref().unwrap().contains("full table"));
}

#[test]
fn test_performance_update_with_where_ok() {
    let result = PerformanceChecker.check("UPDATE users SET a = 1 WHERE id = 1");
    assert!(
        !result
            .issues
            .iter()
            .any(|i| i.message.contains("DELETE/UPDATE"))
    );
}

#[test]
fn test_performance_clean_statement() {
    let result = PerformanceChecker.check("SELECT id, name FROM users WHERE id = 1 LIMIT 10;");
    assert!(result.issues.is_empty());
}

// Naming checker

#[test]
fn test_naming_mixed_case_table() {
    let result = NamingChecker.check("SELECT * FROM UserAccounts");
    let issue = result.issues.first().unwrap();
    assert_eq!(issue.severity, Severity::Info);
    assert!(issue.message.contains("UserAccounts"));
    assert!(result.is_valid);
}

#[test]
fn test_naming_snake_case_ok() {
    let result = NamingChecker.check("SELECT * FROM user_accounts JOIN order_items ON 1=1");
    assert!(result.issues.is_empty());
}

#[test]
fn test_naming_join_anchor() {
    let result = NamingChecker.check("SELECT a.id FROM users a JOIN OrderItems b ON a.id = b.id");
    assert!(
        result
            .issues
            .iter()
            .any(|i| i.message.contains("OrderItems"))
    );
}

#[test]
fn test_naming_insert_and_create_anchors() {
    let insert = NamingChecker.check("INSERT INTO AuditLog (id) VALUES (1)");
    assert!(insert.issues.iter().any(|i| i.message.contains("AuditLog")));

    let create = NamingChecker.check("CREATE TABLE TempData (id INT)");
    assert!(create.issues.iter().any(|i| i.message.contains("TempData")));
}

#[test]
fn test_naming_uppercase_only_not_flagged() {
    // ALLCAPS has no lowercase-then-uppercase transition.
    let result = NamingChecker.check("SELECT * FROM USERS");
    assert!(result.issues.is_empty());
}

#[test]
fn test_checker_names_match_categories() {
    assert_eq!(SyntaxChecker.name(), "syntax");
    assert_eq!(SecurityChecker.name(), "security");
    assert_eq!(PerformanceChecker.name(), "performance");
    assert_eq!(NamingChecker.name(), "naming");
}
