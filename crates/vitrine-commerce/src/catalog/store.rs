//! Product store backed by a document collection.

use crate::catalog::product::Product;
use crate::catalog::service::ProductStore;
use crate::ids::ProductId;
use vitrine_db::{Collection, DbError, Store};

/// [`ProductStore`] over a `vitrine-db` collection named "products".
#[derive(Debug, Clone)]
pub struct DocumentProductStore {
    products: Collection<Product>,
}

impl DocumentProductStore {
    /// Open the product collection in the given store.
    pub fn new(store: &Store) -> Self {
        Self {
            products: store.collection("products"),
        }
    }
}

impl ProductStore for DocumentProductStore {
    fn insert(&self, product: &Product) -> Result<(), DbError> {
        self.products.put(product.id.as_str(), product)
    }

    fn get(&self, id: &ProductId) -> Result<Option<Product>, DbError> {
        self.products.get(id.as_str())
    }

    fn replace(&self, product: &Product) -> Result<bool, DbError> {
        self.products.replace(product.id.as_str(), product)
    }

    fn delete(&self, id: &ProductId) -> Result<bool, DbError> {
        self.products.remove(id.as_str())
    }

    fn all(&self) -> Result<Vec<Product>, DbError> {
        self.products.values()
    }
}
