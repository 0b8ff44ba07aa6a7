//! Edge identifier generation.
//!
//! Edges have no identity in the source model, so every edge gets a
//! generated id. The generator is passed into the extraction instead of
//! being called ambiently, which keeps test output reproducible.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Produces globally unique edge ids.
///
/// Shared across parallel traversal branches, hence `Send + Sync`.
pub trait EdgeIdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Random v4 UUIDs.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidEdgeIds;

impl EdgeIdGenerator for UuidEdgeIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// `e0`, `e1`, `e2`, ... (with a configurable prefix).
#[derive(Debug)]
pub struct SequentialEdgeIds {
    prefix: String,
    next: AtomicU64,
}

impl SequentialEdgeIds {
    pub fn new() -> Self {
        Self::with_prefix("e")
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }
}

impl Default for SequentialEdgeIds {
    fn default() -> Self {
        Self::new()
    }
}

impl EdgeIdGenerator for SequentialEdgeIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}{}", self.prefix, n)
    }
}
