//! Rule combinator
//!
//! Merges independently authored rules into one AST under a dominant join
//! operator chosen by majority vote over the raw rule strings.

use crate::error::{Result, RuleEngineError};
use crate::rule::ast::AstNode;
use crate::rule::parser;

/// Combine several rule strings into one AST
///
/// Every rule is parsed independently (the first failure aborts the whole
/// call), then all parsed trees become children, in input order, of one
/// node of the dominant kind. Dominance is a global heuristic: a rule
/// counts toward AND or OR when its uppercased text contains the keyword
/// anywhere, and ties go to AND.
pub fn combine<S: AsRef<str>>(rules: &[S]) -> Result<AstNode> {
    if rules.is_empty() {
        return Err(RuleEngineError::EmptyRuleList);
    }

    let children = rules
        .iter()
        .map(|rule| parser::parse(rule.as_ref()))
        .collect::<Result<Vec<_>>>()?;

    let and_count = rules
        .iter()
        .filter(|rule| rule.as_ref().to_uppercase().contains("AND"))
        .count();
    let or_count = rules
        .iter()
        .filter(|rule| rule.as_ref().to_uppercase().contains("OR"))
        .count();

    if and_count >= or_count {
        Ok(AstNode::And { children })
    } else {
        Ok(AstNode::Or { children })
    }
}
