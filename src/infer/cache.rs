//! Inference memo caches
//!
//! Completion and hover re-probe the same source positions constantly, so
//! results are memoized by raw expression text. Entries are idempotent
//! (same text, same registry state, same answer), which makes last-write
//! races harmless; no per-entry invalidation exists. The host wipes both
//! maps wholesale whenever the document or registry changes materially.

use crate::catalog::TypeName;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// The two independent memo maps: simple expressions and full chains
#[derive(Debug, Default)]
pub struct InferenceCaches {
    simple: RwLock<FxHashMap<String, TypeName>>,
    chain: RwLock<FxHashMap<String, TypeName>>,
}

impl InferenceCaches {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_simple(&self, text: &str) -> Option<TypeName> {
        self.simple.read().get(text).cloned()
    }

    pub fn put_simple(&self, text: &str, result: TypeName) {
        self.simple.write().insert(text.to_string(), result);
    }

    pub fn get_chain(&self, text: &str) -> Option<TypeName> {
        self.chain.read().get(text).cloned()
    }

    pub fn put_chain(&self, text: &str, result: TypeName) {
        self.chain.write().insert(text.to_string(), result);
    }

    /// Wipe both maps
    pub fn clear(&self) {
        self.simple.write().clear();
        self.chain.write().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.simple.read().is_empty() && self.chain.read().is_empty()
    }
}
