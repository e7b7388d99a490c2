//! Opaque object table.
//!
//! Host objects (buffers, textures, typed arrays) cross into Rust as
//! `GlValue::Handle` ids. Entries are scoped to one call: take a
//! [`HandleTable::checkpoint`] before converting the arguments and
//! [`HandleTable::rewind`] to it once the result has been converted back.
//! Every object the call introduced is dropped then, so the table never
//! outlives a call's worth of host objects.

use std::collections::BTreeMap;

#[derive(Debug)]
pub struct HandleTable<T> {
    next: u32,
    entries: BTreeMap<u32, T>,
}

impl<T> Default for HandleTable<T> {
    fn default() -> Self {
        Self {
            next: 1,
            entries: BTreeMap::new(),
        }
    }
}

impl<T> HandleTable<T> {
    /// Stores `value` and returns its id.
    pub fn insert(&mut self, value: T) -> u32 {
        let id = self.next;
        self.next += 1;
        self.entries.insert(id, value);
        id
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.entries.get(&id)
    }

    /// Marks the current position; pass it to [`HandleTable::rewind`].
    pub fn checkpoint(&self) -> u32 {
        self.next
    }

    /// Drops every entry inserted since `mark` and reuses their ids.
    pub fn rewind(&mut self, mark: u32) {
        drop(self.entries.split_off(&mark));
        self.next = self.next.min(mark);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
