//! In-memory `RecordStore` implementation.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::{Record, RecordStore};

/// Insertion-ordered in-memory store.
///
/// Listing walks an order vector so callers see records in the order
/// they were first inserted; replacing a record keeps its slot. Reads
/// hand out clones, so a returned record is a snapshot, not a live view.
pub struct MemoryStore<T: Record> {
    inner: RwLock<Inner<T>>,
}

struct Inner<T: Record> {
    order: Vec<T::Id>,
    records: HashMap<T::Id, T>,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                order: Vec::new(),
                records: HashMap::new(),
            }),
        }
    }

    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let store = Self::new();
        for record in records {
            store.put(record);
        }
        store
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .order
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Record> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> RecordStore<T> for MemoryStore<T> {
    fn get(&self, id: &T::Id) -> Option<T> {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .records
            .get(id)
            .cloned()
    }

    fn list(&self) -> Vec<T> {
        let inner = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        inner
            .order
            .iter()
            .filter_map(|id| inner.records.get(id).cloned())
            .collect()
    }

    fn put(&self, record: T) {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        let id = record.id().clone();
        if inner.records.insert(id.clone(), record).is_none() {
            inner.order.push(id);
        }
    }

    fn delete(&self, id: &T::Id) -> bool {
        let mut inner = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if inner.records.remove(id).is_some() {
            inner.order.retain(|existing| existing != id);
            true
        } else {
            false
        }
    }
}
