//! Rule evaluator
//!
//! Walks an [`AstNode`] against a [`DataRecord`], reducing AND/OR nodes
//! recursively and resolving operand leaves with type-aware comparisons.

use crate::error::{Result, RuleEngineError};
use crate::record::{DataRecord, Value};
use crate::rule::ast::AstNode;

/// Evaluate an AST against a data record
///
/// AND nodes are true iff every child is true (vacuously true with no
/// children), OR nodes iff any child is true (vacuously false). Errors from
/// children propagate unchanged.
pub fn evaluate(node: &AstNode, data: &DataRecord) -> Result<bool> {
    match node {
        AstNode::And { children } => {
            for child in children {
                if !evaluate(child, data)? {
                    return Ok(false);
                }
            }
            Ok(true)
        }
        AstNode::Or { children } => {
            for child in children {
                if evaluate(child, data)? {
                    return Ok(true);
                }
            }
            Ok(false)
        }
        AstNode::Operand { value } => evaluate_operand(value, data),
    }
}

/// Resolve one `"attribute operator literal"` fragment against a record
pub fn evaluate_operand(raw: &str, data: &DataRecord) -> Result<bool> {
    let parts: Vec<&str> = raw.split(' ').collect();
    if parts.len() != 3 {
        return Err(RuleEngineError::MalformedOperand(raw.to_string()));
    }

    let attribute = parts[0].trim();
    let operator = parts[1].trim();
    let literal = parts[2].trim();

    let data_value = data
        .get(attribute)
        .ok_or_else(|| RuleEngineError::MissingAttribute(attribute.to_string()))?;

    compare_values(data_value, operator, literal)
}

/// Compare a record value with a literal token under `operator`
///
/// Priority: string data with a single-quoted literal is an equality check
/// regardless of the operator token; otherwise the comparison is numeric,
/// on `f64` when the data is a float or the literal contains a `.`, on
/// `i64` otherwise.
pub fn compare_values(data_value: &Value, operator: &str, literal: &str) -> Result<bool> {
    if let Value::Str(s) = data_value {
        if literal.len() >= 2 && literal.starts_with('\'') && literal.ends_with('\'') {
            let unquoted = &literal[1..literal.len() - 1];
            return Ok(s == unquoted);
        }
    }

    if matches!(data_value, Value::Float(_)) || literal.contains('.') {
        let lhs = as_f64(data_value)?;
        let rhs: f64 = literal
            .parse()
            .map_err(|_| RuleEngineError::InvalidDataFormat(literal.to_string()))?;
        return apply_operator(lhs, operator, rhs);
    }

    let lhs = as_i64(data_value)?;
    let rhs: i64 = literal
        .parse()
        .map_err(|_| RuleEngineError::InvalidDataFormat(literal.to_string()))?;
    apply_operator(lhs, operator, rhs)
}

// Equality on the float path is exact, no epsilon tolerance.
fn apply_operator<T: PartialOrd>(lhs: T, operator: &str, rhs: T) -> Result<bool> {
    match operator {
        ">" => Ok(lhs > rhs),
        "<" => Ok(lhs < rhs),
        "=" => Ok(lhs == rhs),
        "!=" => Ok(lhs != rhs),
        ">=" => Ok(lhs >= rhs),
        "<=" => Ok(lhs <= rhs),
        _ => Err(RuleEngineError::UnknownOperator(operator.to_string())),
    }
}

fn as_f64(value: &Value) -> Result<f64> {
    match value {
        Value::Int(i) => Ok(*i as f64),
        Value::Float(f) => Ok(*f),
        Value::Str(s) => s
            .parse()
            .map_err(|_| RuleEngineError::InvalidDataFormat(s.clone())),
    }
}

fn as_i64(value: &Value) -> Result<i64> {
    match value {
        Value::Int(i) => Ok(*i),
        Value::Float(f) => Err(RuleEngineError::InvalidDataFormat(f.to_string())),
        Value::Str(s) => s
            .parse()
            .map_err(|_| RuleEngineError::InvalidDataFormat(s.clone())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::record;
    use crate::rule::parser::parse;

    #[test]
    fn test_numeric_comparison() {
        let data = record([("age", 35)]);

        assert!(evaluate_operand("age > 30", &data).unwrap());
        assert!(!evaluate_operand("age < 30", &data).unwrap());
        assert!(evaluate_operand("age >= 35", &data).unwrap());
        assert!(evaluate_operand("age <= 35", &data).unwrap());
        assert!(evaluate_operand("age = 35", &data).unwrap());
        assert!(evaluate_operand("age != 30", &data).unwrap());
    }

    #[test]
    fn test_float_path_triggered_by_literal() {
        // Integer data, fractional literal: both sides go through f64.
        let data = record([("score", 3)]);
        assert!(!evaluate_operand("score >= 3.5", &data).unwrap());

        let data = record([("score", 4)]);
        assert!(evaluate_operand("score >= 3.5", &data).unwrap());
    }

    #[test]
    fn test_float_path_triggered_by_data() {
        let data = record([("score", 3.5)]);
        assert!(evaluate_operand("score = 3.5", &data).unwrap());
        assert!(evaluate_operand("score > 3", &data).unwrap());
    }

    #[test]
    fn test_string_data_parses_on_numeric_path() {
        // A string record value without a quoted literal is coerced
        // numerically, as the data often arrives stringified.
        let data = record([("age", "35")]);
        assert!(evaluate_operand("age > 30", &data).unwrap());

        let data = record([("age", "abc")]);
        assert!(matches!(
            evaluate_operand("age > 30", &data),
            Err(RuleEngineError::InvalidDataFormat(_))
        ));
    }

    #[test]
    fn test_quoted_string_equality() {
        let data = record([("department", "Sales")]);
        assert!(evaluate_operand("department = 'Sales'", &data).unwrap());
        assert!(!evaluate_operand("department = 'Support'", &data).unwrap());
    }

    #[test]
    fn test_quoted_string_ignores_operator() {
        // The string path only ever checks equality; the operator token is
        // not consulted.
        let data = record([("name", "Bob")]);
        assert!(evaluate_operand("name != 'Bob'", &data).unwrap());
        assert!(evaluate_operand("name > 'Bob'", &data).unwrap());
        assert!(!evaluate_operand("name != 'Alice'", &data).unwrap());
    }

    #[test]
    fn test_missing_attribute() {
        let data = record([("income", 50000)]);
        match evaluate_operand("age > 30", &data) {
            Err(RuleEngineError::MissingAttribute(name)) => assert_eq!(name, "age"),
            other => panic!("expected MissingAttribute, got {:?}", other),
        }
    }

    #[test]
    fn test_malformed_operand() {
        let data = record([("age", 35)]);
        assert!(matches!(
            evaluate_operand("age>30", &data),
            Err(RuleEngineError::MalformedOperand(_))
        ));
        assert!(matches!(
            evaluate_operand("age > 30 extra", &data),
            Err(RuleEngineError::MalformedOperand(_))
        ));
    }

    #[test]
    fn test_unknown_operator() {
        let data = record([("age", 35)]);
        match evaluate_operand("age %% 30", &data) {
            Err(RuleEngineError::UnknownOperator(op)) => assert_eq!(op, "%%"),
            other => panic!("expected UnknownOperator, got {:?}", other),
        }

        // "==" passes the validation gate but is not a comparator operator.
        assert!(matches!(
            evaluate_operand("age == 30", &data),
            Err(RuleEngineError::UnknownOperator(_))
        ));
    }

    #[test]
    fn test_and_or_evaluation() {
        let data = record([("age", 35), ("income", 50000)]);

        let ast = parse("age > 30 AND income > 40000").unwrap();
        assert!(evaluate(&ast, &data).unwrap());

        let ast = parse("age > 30 AND income > 60000").unwrap();
        assert!(!evaluate(&ast, &data).unwrap());

        let ast = parse("age > 40 OR income > 40000").unwrap();
        assert!(evaluate(&ast, &data).unwrap());

        let ast = parse("age > 40 OR income > 60000").unwrap();
        assert!(!evaluate(&ast, &data).unwrap());
    }

    #[test]
    fn test_degenerate_operator_nodes() {
        let data = record([("age", 35)]);

        // Zero children: AND is vacuously true, OR vacuously false.
        let empty_and = AstNode::And { children: vec![] };
        assert!(evaluate(&empty_and, &data).unwrap());

        let empty_or = AstNode::Or { children: vec![] };
        assert!(!evaluate(&empty_or, &data).unwrap());

        // One child: both reduce to the child's result.
        let single = AstNode::And {
            children: vec![AstNode::Operand {
                value: "age > 30".to_string(),
            }],
        };
        assert!(evaluate(&single, &data).unwrap());
    }

    #[test]
    fn test_nested_evaluation() {
        let data = record([("age", 28), ("income", 80000), ("experience", 6)]);

        let ast = parse("(age > 30 AND income > 50000) OR experience > 5").unwrap();
        assert!(evaluate(&ast, &data).unwrap());

        let data = record([("age", 28), ("income", 80000), ("experience", 3)]);
        assert!(!evaluate(&ast, &data).unwrap());
    }

    #[test]
    fn test_error_propagates_from_children() {
        let data = record([("age", 35)]);
        let ast = parse("age > 30 AND income > 50000").unwrap();
        assert!(matches!(
            evaluate(&ast, &data),
            Err(RuleEngineError::MissingAttribute(_))
        ));
    }
}
