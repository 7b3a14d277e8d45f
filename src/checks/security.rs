use super::{
    Checker,
    patterns::{CREDENTIAL_RULE, INJECTION_RULES},
    types::{Issue, ValidationResult}
};

/// Injection-signature and credential-leak scanner.
///
/// The pass itself never fails: findings carry Error severity but the
/// result reports `is_valid = true`, leaving the validity decision to the
/// aggregator. Each signature is reported once per statement, however many
/// times it occurs; distinct signatures matching the same text each
/// produce their own issue.
pub struct SecurityChecker;

impl Checker for SecurityChecker {
    fn name(&self) -> &'static str {
        "security"
    }

    fn check(&self, sql: &str) -> ValidationResult {
        let mut issues = Vec::new();

        for rule in INJECTION_RULES.iter() {
            if rule.regex.is_match(sql) {
                issues.push(
                    Issue::new(rule.severity, rule.category, rule.message).with_suggestion(
                        "Use parameterized queries instead of string concatenation"
                    )
                );
            }
        }

        let credential = &*CREDENTIAL_RULE;
        if credential.regex.is_match(sql) {
            issues.push(
                Issue::new(credential.severity, credential.category, credential.message)
                    .with_suggestion("Use parameterized queries for sensitive data")
            );
        }

        ValidationResult {
            is_valid: true,
            issues
        }
    }
}
