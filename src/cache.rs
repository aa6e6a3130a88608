//! Memoization of analysis results keyed by input snapshot

use crate::registry::{Member, Relationship};
use std::collections::hash_map::DefaultHasher;
use std::collections::HashMap;
use std::hash::{Hash, Hasher};

/// Identity of a (members, relationships) snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnapshotKey {
    digest: u64,
    members: usize,
    relationships: usize,
}

impl SnapshotKey {
    pub fn of(members: &[Member], relationships: &[Relationship]) -> Self {
        let mut hasher = DefaultHasher::new();
        members.hash(&mut hasher);
        relationships.hash(&mut hasher);
        Self {
            digest: hasher.finish(),
            members: members.len(),
            relationships: relationships.len(),
        }
    }
}

/// A cached value together with the snapshot it was computed from
#[derive(Debug)]
struct CachedSnapshot<V> {
    members: Vec<Member>,
    relationships: Vec<Relationship>,
    value: V,
}

impl<V> CachedSnapshot<V> {
    fn matches(&self, members: &[Member], relationships: &[Relationship]) -> bool {
        self.members == members && self.relationships == relationships
    }
}

/// Bounded memo table. A hit returns exactly what recomputation would.
///
/// Keys are hashes, so each entry keeps its snapshot and a hit is only
/// served when the stored snapshot equals the requested one.
#[derive(Debug)]
pub struct AnalysisCache<V> {
    entries: HashMap<SnapshotKey, CachedSnapshot<V>>,
    capacity: usize,
    hits: u64,
    misses: u64,
}

impl<V: Clone> AnalysisCache<V> {
    /// Create a cache holding at most `capacity` snapshots
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            capacity: capacity.max(1),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached value for the snapshot, computing it on a miss
    pub fn get_or_compute<F>(&mut self, members: &[Member], relationships: &[Relationship], compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        let key = SnapshotKey::of(members, relationships);
        match self.entries.get(&key) {
            Some(entry) if entry.matches(members, relationships) => {
                self.hits += 1;
                log::debug!("Analysis cache hit ({} hits)", self.hits);
                return entry.value.clone();
            }
            Some(_) => log::debug!("Analysis cache key collision, recomputing"),
            None => {}
        }

        self.misses += 1;
        let value = compute();
        if self.entries.len() >= self.capacity && !self.entries.contains_key(&key) {
            // Evict everything once full
            self.entries.clear();
        }
        self.entries.insert(
            key,
            CachedSnapshot {
                members: members.to_vec(),
                relationships: relationships.to_vec(),
                value: value.clone(),
            },
        );
        value
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
