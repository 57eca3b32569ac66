//! Structural validation of raw rule text
//!
//! The gate in [`validate`] is intentionally shallow; the helpers below it
//! cover the stricter pre-checks an API layer runs before parsing:
//! full-shape matching, referenced-attribute extraction, duplicate
//! detection and numeric input probing.

use crate::error::{Result, RuleEngineError};
use crate::record::DataRecord;
use once_cell::sync::Lazy;
use regex::Regex;

/// Full-shape pattern: `attr op literal` terms (or parenthesized groups)
/// chained with AND/OR, literals either single-quoted or integer.
static RULE_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^\s*(\(.*\)|[a-zA-Z_][a-zA-Z0-9_]*\s*(>|<|>=|<=|=|!=)\s*(?:'[^']*'|\d+))\s*(\s*(AND|OR)\s*(\(.*\)|[a-zA-Z_][a-zA-Z0-9_]*\s*(>|<|>=|<=|=|!=)\s*(?:'[^']*'|\d+)))*\s*$",
    )
    .expect("rule shape pattern is valid")
});

/// Matches one `attr op literal` occurrence; group 1 is the attribute name
static ATTRIBUTE_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([a-zA-Z_][a-zA-Z0-9_]*)\s*(>|<|>=|<=|=|!=)\s*(['"]?)([\w\s]+)(['"]?)"#)
        .expect("attribute reference pattern is valid")
});

/// Shallow validation gate for a raw rule string
///
/// Rejects empty input and input without a comparison operator. The
/// operator probe checks only the substrings `==`, `>` and `<`; `=` and
/// `!=` on their own do not pass, and `==` passes here even though the
/// comparator does not accept it. Kept as-is for compatibility with
/// existing rule strings.
pub fn validate(rule: &str) -> Result<()> {
    if rule.trim().is_empty() {
        return Err(RuleEngineError::EmptyRule);
    }

    if !rule.contains("==") && !rule.contains('>') && !rule.contains('<') {
        return Err(RuleEngineError::MissingOperator);
    }

    Ok(())
}

/// Strict structural check against the full rule grammar
///
/// Opt-in companion to [`validate`]: a `true` result means the whole string
/// is a chain of well-shaped comparison terms. The loose parser accepts
/// much more than this.
pub fn is_well_formed(rule: &str) -> bool {
    RULE_SHAPE.is_match(rule)
}

/// Attribute names referenced by comparison terms in `rule`, in order of
/// first occurrence
///
/// Best-effort extraction: the literal pattern is greedy across whitespace,
/// so a term followed by an unquoted keyword can swallow the next term.
pub fn referenced_attributes(rule: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for captures in ATTRIBUTE_REF.captures_iter(rule) {
        let name = captures[1].to_string();
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

/// Referenced attributes that are absent from `data`, in order of first
/// occurrence
pub fn find_missing_fields(rule: &str, data: &DataRecord) -> Vec<String> {
    referenced_attributes(rule)
        .into_iter()
        .filter(|name| !data.contains_key(name))
        .collect()
}

/// Rule strings (trimmed) that occur more than once in `rules`, in order of
/// first duplication
pub fn find_duplicate_rules<S: AsRef<str>>(rules: &[S]) -> Vec<String> {
    let mut unique: Vec<&str> = Vec::new();
    let mut duplicates: Vec<String> = Vec::new();

    for rule in rules {
        let trimmed = rule.as_ref().trim();
        if unique.contains(&trimmed) {
            if !duplicates.iter().any(|d| d == trimmed) {
                duplicates.push(trimmed.to_string());
            }
        } else {
            unique.push(trimmed);
        }
    }

    duplicates
}

/// Probe that a piece of input data is numeric
pub fn validate_data_format(data: &str) -> Result<()> {
    data.parse::<i64>()
        .map(|_| ())
        .map_err(|_| RuleEngineError::InvalidDataFormat(data.to_string()))
}
