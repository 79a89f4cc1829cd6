use std::collections::BTreeMap;

use serde_json::Value;

use crate::types::{SeedError, SeedResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    pub collection: String,
    pub id: String,
}

impl DocumentRef {
    pub fn new(collection: &str, id: &str) -> Self {
        Self { collection: collection.to_owned(), id: id.to_owned() }
    }
}

/// Blocking document store: one call at a time, no transactions across documents.
pub trait DocumentStore {
    /// Up to `limit` references from `collection`, in whatever order the store enumerates them.
    fn fetch_page(&mut self, collection: &str, limit: usize) -> SeedResult<Vec<DocumentRef>>;

    fn delete(&mut self, doc: &DocumentRef) -> SeedResult<()>;

    /// Create-or-replace: an existing document with the same id is overwritten.
    fn write(&mut self, collection: &str, id: &str, record: &Value) -> SeedResult<()>;
}

/// In-process store, mostly for tests. Counts every call and can be told to fail.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: BTreeMap<String, BTreeMap<String, Value>>,
    pub fetch_calls: usize,
    pub delete_calls: usize,
    pub write_calls: usize,
    fail_delete_at: Option<usize>,
    fail_write_at: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill `collection` with `count` placeholder documents, ids `"1"..=count`.
    pub fn with_documents(collection: &str, count: usize) -> Self {
        let mut store = Self::new();
        let docs = store.collections.entry(collection.to_owned()).or_default();
        for i in 1..=count {
            docs.insert(i.to_string(), Value::Null);
        }
        store
    }

    /// The `n`-th delete (1-based, counted from now) fails.
    pub fn fail_delete_at(&mut self, n: usize) {
        self.fail_delete_at = Some(self.delete_calls + n);
    }

    /// The `n`-th write (1-based, counted from now) fails.
    pub fn fail_write_at(&mut self, n: usize) {
        self.fail_write_at = Some(self.write_calls + n);
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections.get(collection).map_or(0, BTreeMap::len)
    }

    pub fn is_empty(&self, collection: &str) -> bool {
        self.len(collection) == 0
    }

    pub fn get(&self, collection: &str, id: &str) -> Option<&Value> {
        self.collections.get(collection)?.get(id)
    }

    /// Documents of `collection` in id order.
    pub fn documents(&self, collection: &str) -> Vec<(&str, &Value)> {
        self.collections
            .get(collection)
            .map(|docs| docs.iter().map(|(id, value)| (id.as_str(), value)).collect())
            .unwrap_or_default()
    }
}

impl DocumentStore for MemoryStore {
    fn fetch_page(&mut self, collection: &str, limit: usize) -> SeedResult<Vec<DocumentRef>> {
        self.fetch_calls += 1;

        Ok(self
            .collections
            .get(collection)
            .map(|docs| docs.keys().take(limit).map(|id| DocumentRef::new(collection, id)).collect())
            .unwrap_or_default())
    }

    fn delete(&mut self, doc: &DocumentRef) -> SeedResult<()> {
        self.delete_calls += 1;
        if self.fail_delete_at == Some(self.delete_calls) {
            return Err(SeedError::StoreOperation(format!("delete of {}/{} rejected", doc.collection, doc.id)));
        }

        if let Some(docs) = self.collections.get_mut(&doc.collection) {
            docs.remove(&doc.id);
        }
        Ok(())
    }

    fn write(&mut self, collection: &str, id: &str, record: &Value) -> SeedResult<()> {
        self.write_calls += 1;
        if self.fail_write_at == Some(self.write_calls) {
            return Err(SeedError::StoreOperation(format!("write of {collection}/{id} rejected")));
        }

        self.collections.entry(collection.to_owned()).or_default().insert(id.to_owned(), record.clone());
        Ok(())
    }
}
