//! Rule Engine Core - eligibility rule parsing and evaluation
//!
//! This crate parses boolean eligibility rules written as strings
//! (`"age > 30 AND department = 'Sales'"`) into ASTs, combines several
//! rules under a dominant operator, and evaluates ASTs against key/value
//! data records with type-aware comparisons.
//!
//! The grammar is deliberately loose for compatibility with existing rule
//! strings; see the [`rule`] module for the exact parsing behavior and the
//! stricter opt-in checks.

pub mod catalog;
pub mod error;
pub mod record;
pub mod rule;
pub mod store;

pub use catalog::AttributeCatalog;
pub use error::{Result, RuleEngineError};
pub use record::{DataRecord, Value};
pub use rule::{combine, evaluate, evaluate_operand, parse, validate, AstNode};
pub use store::{RuleStore, StoredRule};

use std::sync::Arc;

/// Engine facade tying the rule module to a shared attribute catalog and a
/// rule store
///
/// The catalog is built once at startup and shared read-only; everything
/// else is stateless, so one engine can serve concurrent callers without
/// locking on the hot path.
pub struct RuleEngine {
    catalog: Arc<AttributeCatalog>,
    store: RuleStore,
}

impl RuleEngine {
    pub fn new(catalog: Arc<AttributeCatalog>) -> Self {
        Self {
            catalog,
            store: RuleStore::new(),
        }
    }

    /// Engine over the built-in attribute catalog
    pub fn with_default_catalog() -> Self {
        Self::new(Arc::new(AttributeCatalog::default()))
    }

    /// Shallow structural validation of a rule string
    pub fn validate(&self, rule: &str) -> Result<()> {
        rule::validate(rule)
    }

    /// Parse a rule string into an AST
    pub fn parse(&self, rule: &str) -> Result<AstNode> {
        rule::parse(rule)
    }

    /// Combine several rule strings under the dominant operator
    pub fn combine<S: AsRef<str>>(&self, rules: &[S]) -> Result<AstNode> {
        rule::combine(rules)
    }

    /// Evaluate a parsed AST against a data record
    pub fn evaluate(&self, node: &AstNode, data: &DataRecord) -> Result<bool> {
        rule::evaluate(node, data)
    }

    /// Validate, parse (cached) and evaluate a rule string in one call
    ///
    /// Runs the pre-checks an API consumer expects before touching the
    /// evaluator: the shallow gate, catalog membership of every record
    /// key, and the referenced-field probe against the record.
    pub fn evaluate_rule(&self, rule: &str, data: &DataRecord) -> Result<bool> {
        rule::validate(rule)?;

        for key in data.keys() {
            self.catalog.validate_attribute(key)?;
        }

        let missing = rule::find_missing_fields(rule, data);
        if !missing.is_empty() {
            return Err(RuleEngineError::MissingAttribute(missing.join(", ")));
        }

        rule::check_rule(rule, data)
    }

    /// Whether the catalog admits `name`
    pub fn is_attribute_known(&self, name: &str) -> bool {
        self.catalog.contains(name)
    }

    /// Persist a rule string
    pub fn save_rule(&self, rule: &str) -> StoredRule {
        self.store.save(rule)
    }

    /// Fetch a previously saved rule
    pub fn stored_rule(&self, id: u64) -> Result<StoredRule> {
        self.store.find_by_id(id)
    }

    pub fn catalog(&self) -> &AttributeCatalog {
        &self.catalog
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::with_default_catalog()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::record;

    #[test]
    fn test_evaluate_rule_end_to_end() {
        let engine = RuleEngine::with_default_catalog();
        let data = record([
            ("age", Value::Int(35)),
            ("department", Value::from("Sales")),
        ]);

        assert!(engine
            .evaluate_rule("age > 30 AND department = 'Sales'", &data)
            .unwrap());
        assert!(!engine.evaluate_rule("age > 40", &data).unwrap());
    }

    #[test]
    fn test_evaluate_rule_rejects_unknown_record_key() {
        let engine = RuleEngine::with_default_catalog();
        let data = record([("favoriteColor", Value::from("blue"))]);

        assert!(matches!(
            engine.evaluate_rule("age > 30", &data),
            Err(RuleEngineError::UnknownAttribute(_))
        ));
    }

    #[test]
    fn test_evaluate_rule_reports_missing_fields() {
        let engine = RuleEngine::with_default_catalog();
        let data = record([("age", Value::Int(35))]);

        match engine.evaluate_rule("income > 50000", &data) {
            Err(RuleEngineError::MissingAttribute(fields)) => assert_eq!(fields, "income"),
            other => panic!("expected MissingAttribute, got {:?}", other),
        }
    }

    #[test]
    fn test_evaluate_rule_runs_the_gate() {
        let engine = RuleEngine::with_default_catalog();
        let data = record([("department", Value::from("Sales"))]);

        // Only "=" in the rule: rejected by the shallow gate before any
        // parsing happens.
        assert!(matches!(
            engine.evaluate_rule("department = 'Sales'", &data),
            Err(RuleEngineError::MissingOperator)
        ));
    }

    #[test]
    fn test_combine_and_evaluate() {
        let engine = RuleEngine::with_default_catalog();
        let combined = engine
            .combine(&["age > 30 AND income > 40000", "experience > 5 OR grade > 3"])
            .unwrap();

        let data = record([
            ("age", Value::Int(35)),
            ("income", Value::Int(50000)),
            ("experience", Value::Int(6)),
            ("grade", Value::Int(2)),
        ]);
        assert!(engine.evaluate(&combined, &data).unwrap());

        let data = record([
            ("age", Value::Int(35)),
            ("income", Value::Int(50000)),
            ("experience", Value::Int(2)),
            ("grade", Value::Int(2)),
        ]);
        assert!(!engine.evaluate(&combined, &data).unwrap());
    }

    #[test]
    fn test_save_and_fetch_rule() {
        let engine = RuleEngine::with_default_catalog();
        let saved = engine.save_rule("age > 30");
        assert_eq!(engine.stored_rule(saved.id).unwrap(), saved);
    }

    #[test]
    fn test_is_attribute_known() {
        let engine = RuleEngine::with_default_catalog();
        assert!(engine.is_attribute_known("age"));
        assert!(!engine.is_attribute_known("favoriteColor"));
    }
}
