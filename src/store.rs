//! In-memory rule persistence
//!
//! Durable storage is an external collaborator; this store keeps the same
//! save/find-by-id contract in process memory so the engine can be used
//! standalone and in tests.

use crate::error::{Result, RuleEngineError};
use ahash::AHashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A persisted rule: identity-generated id plus the raw rule text
///
/// Only the original rule string is durable; ASTs are rebuilt on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRule {
    pub id: u64,
    pub rule_string: String,
}

#[derive(Debug, Default)]
struct StoreInner {
    next_id: u64,
    rules: AHashMap<u64, String>,
}

/// Thread-safe in-memory rule store
#[derive(Debug, Default)]
pub struct RuleStore {
    inner: RwLock<StoreInner>,
}

impl RuleStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a rule string and return it with its assigned id
    ///
    /// Ids start at 1 and increase monotonically. The text is stored as
    /// given; callers wanting validation run it before saving.
    pub fn save(&self, rule_string: &str) -> StoredRule {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.rules.insert(id, rule_string.to_string());
        debug!(id, "rule saved");

        StoredRule {
            id,
            rule_string: rule_string.to_string(),
        }
    }

    /// Look up a stored rule by id
    pub fn find_by_id(&self, id: u64) -> Result<StoredRule> {
        let inner = self.inner.read();
        inner
            .rules
            .get(&id)
            .map(|rule_string| StoredRule {
                id,
                rule_string: rule_string.clone(),
            })
            .ok_or(RuleEngineError::RuleNotFound(id))
    }

    /// All stored rules, ordered by id
    pub fn find_all(&self) -> Vec<StoredRule> {
        let inner = self.inner.read();
        let mut rules: Vec<StoredRule> = inner
            .rules
            .iter()
            .map(|(id, rule_string)| StoredRule {
                id: *id,
                rule_string: rule_string.clone(),
            })
            .collect();
        rules.sort_by_key(|rule| rule.id);
        rules
    }

    pub fn len(&self) -> usize {
        self.inner.read().rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().rules.is_empty()
    }
}
