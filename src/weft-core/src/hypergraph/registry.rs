//! Entity registry.
//!
//! Allocates monotonically increasing identities and owns the entity stored
//! under each one. Deleted identities are never handed out again, so a stale
//! id held by a caller can only ever miss, never alias a newer entity.

use std::collections::BTreeMap;

use common_error::{WeftError, WeftResult};

use super::identifiers::EntityId;

/// Identity allocator and owner of per-entity values.
#[derive(Debug, Clone)]
pub struct Registry<I, T> {
    next: u64,
    entries: BTreeMap<I, T>,
}

impl<I: EntityId, T> Default for Registry<I, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: EntityId, T> Registry<I, T> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            next: 0,
            entries: BTreeMap::new(),
        }
    }

    /// Allocate a fresh identity and store `value` under it.
    ///
    /// The value is built from the new id so entities can record their own
    /// identity.
    pub fn create_with(&mut self, value: impl FnOnce(I) -> T) -> I {
        let id = I::from_raw(self.next);
        self.next += 1;
        self.entries.insert(id, value(id));
        id
    }

    /// Whether `id` is currently registered.
    pub fn exists(&self, id: I) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn get(&self, id: I) -> Option<&T> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: I) -> Option<&mut T> {
        self.entries.get_mut(&id)
    }

    /// Look up `id`, failing with `UnknownId` if it is not registered.
    pub fn lookup(&self, id: I) -> WeftResult<&T> {
        self.entries
            .get(&id)
            .ok_or_else(|| WeftError::unknown_id(I::KIND, id.raw()))
    }

    /// Mutable variant of [`lookup`](Self::lookup).
    pub fn lookup_mut(&mut self, id: I) -> WeftResult<&mut T> {
        self.entries
            .get_mut(&id)
            .ok_or_else(|| WeftError::unknown_id(I::KIND, id.raw()))
    }

    /// Fail with `UnknownId` unless `id` is registered.
    pub fn require(&self, id: I) -> WeftResult<()> {
        self.lookup(id).map(|_| ())
    }

    /// Delete `id` and return the value it owned.
    pub fn delete(&mut self, id: I) -> WeftResult<T> {
        self.entries
            .remove(&id)
            .ok_or_else(|| WeftError::unknown_id(I::KIND, id.raw()))
    }

    /// Number of live entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Live identities in creation order.
    pub fn ids(&self) -> impl Iterator<Item = I> + '_ {
        self.entries.keys().copied()
    }

    /// Live entries in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (I, &T)> + '_ {
        self.entries.iter().map(|(id, value)| (*id, value))
    }

    /// Number of identities allocated so far, including deleted ones.
    pub fn allocated(&self) -> u64 {
        self.next
    }
}
