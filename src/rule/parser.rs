//! Rule string parser
//!
//! Turns rule text like `"age > 30 AND department = 'Sales'"` into an
//! [`AstNode`] tree. The grammar is deliberately loose and must stay
//! compatible with existing rule strings: outer parentheses are stripped
//! naively by first/last character, and a bare `A` or `O` at parenthesis
//! depth zero starts an `AND`/`OR` split without checking word boundaries.
//! Callers that need stricter input checking can run
//! [`is_well_formed`](crate::rule::is_well_formed) first.

use crate::error::{Result, RuleEngineError};
use crate::rule::ast::AstNode;

/// Parse a rule string into an AST
///
/// The parse is atomic: any failure anywhere in the recursion is reported
/// as [`RuleEngineError::InvalidRuleFormat`] carrying the whole rule
/// string, never a partial diagnostic.
pub fn parse(rule: &str) -> Result<AstNode> {
    if rule.trim().is_empty() {
        return Err(RuleEngineError::EmptyRule);
    }

    parse_expression(rule).map_err(|_| RuleEngineError::InvalidRuleFormat(rule.to_string()))
}

fn parse_expression(fragment: &str) -> Result<AstNode> {
    let mut trimmed = fragment.trim();

    // Naive outer-parenthesis strip: one layer per iteration, keyed on the
    // first and last character only. Unbalanced inputs like "(a>1)OR(b>2)"
    // lose their leading "(" and trailing ")" here; the leaf strip below
    // picks up the leftovers.
    while trimmed.starts_with('(') && trimmed.ends_with(')') {
        trimmed = trimmed[1..trimmed.len() - 1].trim();
    }

    let mut depth = 0usize;
    for (idx, ch) in trimmed.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            'A' | 'O' if depth == 0 => {
                let keyword = if ch == 'A' { "AND" } else { "OR" };
                return split_on_keyword(trimmed, idx, keyword);
            }
            _ => {}
        }
    }

    // No split point at depth zero, but " OR " still present: every
    // occurrence was inside an unclosed group. Split on all of them and
    // collect the fragments under one n-ary OR.
    if trimmed.contains(" OR ") {
        let children = trimmed
            .split(" OR ")
            .map(|part| parse_expression(part.trim()))
            .collect::<Result<Vec<_>>>()?;
        return Ok(AstNode::Or { children });
    }

    // Leaf: at most one residual leading "(" and trailing ")" are removed.
    let stripped = trimmed.strip_prefix('(').unwrap_or(trimmed);
    let stripped = stripped.strip_suffix(')').unwrap_or(stripped);
    Ok(AstNode::Operand {
        value: stripped.trim().to_string(),
    })
}

/// Split `fragment` at the keyword starting (by assumption) at `idx`
///
/// The prefix before `idx` is additionally split on the first occurrence of
/// the keyword text. The keyword normally starts exactly at `idx`, leaving
/// the prefix untouched; when an earlier occurrence hides inside an
/// unclosed group, everything after it in the prefix is dropped.
fn split_on_keyword(fragment: &str, idx: usize, keyword: &str) -> Result<AstNode> {
    let prefix = &fragment[..idx];
    let left = match prefix.find(keyword) {
        Some(pos) => &prefix[..pos],
        None => prefix,
    };

    let rest = fragment
        .get(idx + keyword.len()..)
        .ok_or_else(|| RuleEngineError::InvalidRuleFormat(fragment.to_string()))?;

    let children = vec![parse_expression(left.trim())?, parse_expression(rest.trim())?];
    Ok(match keyword {
        "AND" => AstNode::And { children },
        _ => AstNode::Or { children },
    })
}
