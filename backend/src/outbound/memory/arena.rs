//! Index-addressed record storage shared by the in-memory stores.
//!
//! Records live in a dense `Vec`; a hash index maps each key to its slot.
//! Removal swaps the last record into the freed slot and repoints its index
//! entry, so deletes are O(1) and iteration order is insertion order only
//! until the first delete.

use std::collections::HashMap;
use std::hash::Hash;

#[derive(Debug)]
pub(crate) struct Arena<K, V> {
    slots: Vec<(K, V)>,
    index: HashMap<K, usize>,
}

impl<K, V> Default for Arena<K, V> {
    fn default() -> Self {
        Self {
            slots: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K, V> Arena<K, V>
where
    K: Copy + Eq + Hash,
{
    /// Insert `value` under a key that is not yet present.
    ///
    /// Returns `false` and leaves the arena unchanged when the key exists.
    pub(crate) fn insert(&mut self, key: K, value: V) -> bool {
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.slots.len());
        self.slots.push((key, value));
        true
    }

    pub(crate) fn get(&self, key: &K) -> Option<&V> {
        let slot = *self.index.get(key)?;
        self.slots.get(slot).map(|(_, value)| value)
    }

    pub(crate) fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let slot = *self.index.get(key)?;
        self.slots.get_mut(slot).map(|(_, value)| value)
    }

    /// Remove and return the record under `key`.
    pub(crate) fn remove(&mut self, key: &K) -> Option<V> {
        let slot = self.index.remove(key)?;
        let (_, removed) = self.slots.swap_remove(slot);
        if let Some((moved_key, _)) = self.slots.get(slot) {
            self.index.insert(*moved_key, slot);
        }
        Some(removed)
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &V> {
        self.slots.iter().map(|(_, value)| value)
    }

    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }
}
