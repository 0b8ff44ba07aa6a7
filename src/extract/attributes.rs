//! Per-node attribute accumulator.
//!
//! Attributes, enum literals and operation signatures share one key space.
//! A classifier handler owns one `AttributeMap` and lends it mutably to its
//! feature handlers; it is turned into the node's attributes once all
//! features have run.

use indexmap::IndexMap;
use indexmap::map::Entry;

use super::error::ExtractError;
use super::options::AttributeCollision;

pub struct AttributeMap {
    node: String,
    policy: AttributeCollision,
    entries: IndexMap<String, String>,
}

impl AttributeMap {
    pub fn new(node: impl Into<String>, policy: AttributeCollision) -> Self {
        Self {
            node: node.into(),
            policy,
            entries: IndexMap::new(),
        }
    }

    /// Insert an entry, applying the collision policy if `key` is taken.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Result<(), ExtractError> {
        let key = key.into();
        let value = value.into();

        let occupied = match self.entries.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(value);
                return Ok(());
            }
            Entry::Occupied(slot) => slot,
        };

        match self.policy {
            AttributeCollision::LastWins => {
                tracing::warn!(
                    node = %self.node,
                    key = %occupied.key(),
                    "attribute key declared twice, keeping the last value"
                );
                *occupied.into_mut() = value;
                Ok(())
            }
            AttributeCollision::Error => Err(ExtractError::DuplicateAttribute {
                node: self.node.clone(),
                key: occupied.key().clone(),
            }),
            AttributeCollision::Suffix => {
                let base = occupied.key().clone();
                let key = (2..)
                    .map(|n| format!("{base} ({n})"))
                    .find(|candidate| !self.entries.contains_key(candidate))
                    .unwrap_or_default();
                tracing::warn!(
                    node = %self.node,
                    key = %base,
                    renamed = %key,
                    "attribute key declared twice, renaming"
                );
                self.entries.insert(key, value);
                Ok(())
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> IndexMap<String, String> {
        self.entries
    }
}
