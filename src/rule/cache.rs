//! Rule parsing cache
//!
//! Rule strings repeat heavily across evaluation calls, so parsed ASTs are
//! cached process-wide, keyed by the raw rule text.

use crate::error::Result;
use crate::record::DataRecord;
use crate::rule::ast::AstNode;
use crate::rule::{evaluator, parser};
use ahash::AHashMap;
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use tracing::debug;

/// Global parse cache with fast hashing (ahash)
static PARSE_CACHE: Lazy<RwLock<AHashMap<String, AstNode>>> = Lazy::new(|| {
    let map = AHashMap::with_capacity(1024);
    RwLock::new(map)
});

/// Get or parse a rule string, using the cache for repeated rules
#[inline]
pub fn get_or_parse(rule: &str) -> Result<AstNode> {
    // Fast path: check read lock first
    {
        let cache = PARSE_CACHE.read();
        if let Some(ast) = cache.get(rule) {
            return Ok(ast.clone());
        }
    }

    // Slow path: parse and cache
    debug!(rule, "parse cache miss");
    let ast = parser::parse(rule)?;

    {
        let mut cache = PARSE_CACHE.write();
        cache.insert(rule.to_string(), ast.clone());
    }

    Ok(ast)
}

/// Evaluate a rule string against a data record, using the cached AST
#[inline]
pub fn check_rule(rule: &str, data: &DataRecord) -> Result<bool> {
    let ast = get_or_parse(rule)?;
    evaluator::evaluate(&ast, data)
}

/// Clear the parse cache (useful for testing)
pub fn clear_cache() {
    let mut cache = PARSE_CACHE.write();
    cache.clear();
}

/// Number of cached rule strings
pub fn cache_size() -> usize {
    let cache = PARSE_CACHE.read();
    cache.len()
}
