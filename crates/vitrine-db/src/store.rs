//! Named document collections with automatic serialization.

use crate::DbError;
use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::sync::{Arc, RwLock};

type Documents = Arc<RwLock<HashMap<String, serde_json::Value>>>;

/// A document database holding named collections.
///
/// Each collection is an independent map of JSON documents keyed by a
/// string id. All handles to the same `Store` share the underlying
/// collections, so a `Store` can be cloned freely across request
/// handlers.
#[derive(Debug, Clone, Default)]
pub struct Store {
    collections: Arc<RwLock<HashMap<String, Documents>>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a typed handle to a named collection, creating it on first use.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let store = Store::new();
    /// let products: Collection<Product> = store.collection("products");
    /// ```
    pub fn collection<T>(&self, name: &str) -> Collection<T> {
        let mut collections = match self.collections.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let docs = collections
            .entry(name.to_string())
            .or_insert_with(Documents::default)
            .clone();
        Collection {
            name: name.to_string(),
            docs,
            _marker: PhantomData,
        }
    }
}

/// A typed handle to one collection of JSON documents.
///
/// Any type implementing `Serialize` and `DeserializeOwned` can be
/// stored; documents are kept as JSON values, so schema changes only
/// surface at read time. Writes replace the whole document atomically
/// under a single write guard.
pub struct Collection<T> {
    name: String,
    docs: Documents,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for Collection<T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            docs: self.docs.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T> std::fmt::Debug for Collection<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Collection").field("name", &self.name).finish()
    }
}

impl<T: Serialize + DeserializeOwned> Collection<T> {
    /// Collection name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Insert or replace the document stored under `key`.
    pub fn put(&self, key: &str, doc: &T) -> Result<(), DbError> {
        let value = serde_json::to_value(doc)?;
        let mut docs = self.docs.write().map_err(|_| DbError::Lock)?;
        docs.insert(key.to_string(), value);
        Ok(())
    }

    /// Replace the document under `key` only if it already exists.
    ///
    /// Serialization happens before the write guard is taken, so the
    /// existence check and the replace are one atomic step. Returns
    /// `false` when no document was stored under `key`.
    pub fn replace(&self, key: &str, doc: &T) -> Result<bool, DbError> {
        let value = serde_json::to_value(doc)?;
        let mut docs = self.docs.write().map_err(|_| DbError::Lock)?;
        match docs.get_mut(key) {
            Some(slot) => {
                *slot = value;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Fetch the document stored under `key`.
    pub fn get(&self, key: &str) -> Result<Option<T>, DbError> {
        let docs = self.docs.read().map_err(|_| DbError::Lock)?;
        match docs.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Remove the document under `key`. Returns `false` if it was absent.
    pub fn remove(&self, key: &str) -> Result<bool, DbError> {
        let mut docs = self.docs.write().map_err(|_| DbError::Lock)?;
        Ok(docs.remove(key).is_some())
    }

    /// Check whether a document exists under `key`.
    pub fn contains(&self, key: &str) -> Result<bool, DbError> {
        let docs = self.docs.read().map_err(|_| DbError::Lock)?;
        Ok(docs.contains_key(key))
    }

    /// All document keys.
    pub fn keys(&self) -> Result<Vec<String>, DbError> {
        let docs = self.docs.read().map_err(|_| DbError::Lock)?;
        Ok(docs.keys().cloned().collect())
    }

    /// All documents, deserialized.
    pub fn values(&self) -> Result<Vec<T>, DbError> {
        let docs = self.docs.read().map_err(|_| DbError::Lock)?;
        docs.values()
            .map(|value| serde_json::from_value(value.clone()).map_err(DbError::from))
            .collect()
    }

    /// Number of documents in the collection.
    pub fn len(&self) -> Result<usize, DbError> {
        let docs = self.docs.read().map_err(|_| DbError::Lock)?;
        Ok(docs.len())
    }

    /// Check whether the collection is empty.
    pub fn is_empty(&self) -> Result<bool, DbError> {
        Ok(self.len()? == 0)
    }

    /// Remove every document in the collection.
    pub fn clear(&self) -> Result<(), DbError> {
        let mut docs = self.docs.write().map_err(|_| DbError::Lock)?;
        docs.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Doc {
        id: String,
        value: i64,
    }

    fn doc(id: &str, value: i64) -> Doc {
        Doc {
            id: id.to_string(),
            value,
        }
    }

    #[test]
    fn test_put_and_get() {
        let store = Store::new();
        let docs: Collection<Doc> = store.collection("docs");

        docs.put("a", &doc("a", 1)).unwrap();
        assert_eq!(docs.get("a").unwrap(), Some(doc("a", 1)));
        assert_eq!(docs.get("missing").unwrap(), None);
    }

    #[test]
    fn test_put_replaces_existing() {
        let store = Store::new();
        let docs: Collection<Doc> = store.collection("docs");

        docs.put("a", &doc("a", 1)).unwrap();
        docs.put("a", &doc("a", 2)).unwrap();
        assert_eq!(docs.get("a").unwrap(), Some(doc("a", 2)));
        assert_eq!(docs.len().unwrap(), 1);
    }

    #[test]
    fn test_replace_requires_existing() {
        let store = Store::new();
        let docs: Collection<Doc> = store.collection("docs");

        assert!(!docs.replace("a", &doc("a", 1)).unwrap());
        docs.put("a", &doc("a", 1)).unwrap();
        assert!(docs.replace("a", &doc("a", 9)).unwrap());
        assert_eq!(docs.get("a").unwrap(), Some(doc("a", 9)));
    }

    #[test]
    fn test_remove() {
        let store = Store::new();
        let docs: Collection<Doc> = store.collection("docs");

        docs.put("a", &doc("a", 1)).unwrap();
        assert!(docs.remove("a").unwrap());
        assert!(!docs.remove("a").unwrap());
        assert!(docs.is_empty().unwrap());
    }

    #[test]
    fn test_collections_are_shared_between_handles() {
        let store = Store::new();
        let writer: Collection<Doc> = store.collection("docs");
        let reader: Collection<Doc> = store.collection("docs");

        writer.put("a", &doc("a", 7)).unwrap();
        assert_eq!(reader.get("a").unwrap(), Some(doc("a", 7)));
    }

    #[test]
    fn test_collections_are_isolated_by_name() {
        let store = Store::new();
        let left: Collection<Doc> = store.collection("left");
        let right: Collection<Doc> = store.collection("right");

        left.put("a", &doc("a", 1)).unwrap();
        assert_eq!(right.get("a").unwrap(), None);
    }
}
