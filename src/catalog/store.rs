//! Catalog store.
//!
//! Injectable container for the product list. Reads come from the seeded
//! or locally edited catalog; lookups return `Option` because a missing
//! product renders as an empty state, never as a failure. Mutations are
//! full-record replacement keyed by id and persist synchronously.

use std::sync::Arc;

use uuid::Uuid;

use crate::storage::{CATALOG_KEY, StoragePort};

use super::{
    errors::CatalogError,
    fixtures,
    models::{NewProduct, Product},
};

/// Catalog state container.
#[derive(Debug)]
pub struct CatalogStore<S> {
    products: Vec<Product>,
    storage: Arc<S>,
}

impl<S: StoragePort> CatalogStore<S> {
    /// Load the catalog from storage, seeding from the embedded fixture
    /// when no device-local edits exist.
    ///
    /// A corrupt persisted catalog is logged and replaced with the seed.
    ///
    /// # Errors
    ///
    /// Returns a [`CatalogError`] when storage cannot be read or the seed
    /// fixture fails to parse.
    pub fn open(storage: Arc<S>) -> Result<Self, CatalogError> {
        let products = match storage.load(CATALOG_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(products) => products,
                Err(error) => {
                    tracing::warn!(%error, "discarding corrupt catalog state, reseeding");
                    fixtures::seed_products()?
                }
            },
            None => fixtures::seed_products()?,
        };

        Ok(Self { products, storage })
    }

    /// All products, in catalog order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    pub fn get(&self, id: Uuid) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// Look up a product by its unique slug.
    pub fn get_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.slug == slug)
    }

    /// Products flagged for the featured rail.
    pub fn featured(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.featured)
            .collect()
    }

    /// Products in the given category.
    pub fn by_category(&self, category: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| product.category == category)
            .collect()
    }

    /// Create a product, assigning it a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::SlugTaken`] when another product already
    /// uses the slug, or a storage/serialization error from persisting.
    pub fn create(&mut self, product: NewProduct) -> Result<Product, CatalogError> {
        if self.get_by_slug(&product.slug).is_some() {
            return Err(CatalogError::SlugTaken);
        }

        let product = product.into_product(Uuid::now_v7());

        self.products.push(product.clone());
        self.persist()?;

        Ok(product)
    }

    /// Replace the product with the given id wholesale, keeping the id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id,
    /// [`CatalogError::SlugTaken`] when the new slug collides with a
    /// different product, or a storage/serialization error.
    pub fn update(&mut self, id: Uuid, update: NewProduct) -> Result<Product, CatalogError> {
        if self
            .products
            .iter()
            .any(|other| other.slug == update.slug && other.id != id)
        {
            return Err(CatalogError::SlugTaken);
        }

        let existing = self
            .products
            .iter_mut()
            .find(|product| product.id == id)
            .ok_or(CatalogError::NotFound)?;

        *existing = update.into_product(id);
        let updated = existing.clone();

        self.persist()?;

        Ok(updated)
    }

    /// Delete the product with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::NotFound`] for an unknown id, or a
    /// storage/serialization error from persisting.
    pub fn delete(&mut self, id: Uuid) -> Result<(), CatalogError> {
        let before = self.products.len();

        self.products.retain(|product| product.id != id);

        if self.products.len() == before {
            return Err(CatalogError::NotFound);
        }

        self.persist()
    }

    fn persist(&self) -> Result<(), CatalogError> {
        let raw = serde_json::to_string(&self.products)?;

        self.storage.save(CATALOG_KEY, &raw)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::storage::MemoryStorage;

    use super::*;

    fn new_product(slug: &str) -> NewProduct {
        NewProduct {
            title: "Test Candle".to_string(),
            slug: slug.to_string(),
            category: "candles".to_string(),
            base_price: 10_000,
            variants: Vec::new(),
            colors: Vec::new(),
            scents: Vec::new(),
            stock: 10,
            featured: false,
        }
    }

    #[test]
    fn fresh_store_loads_the_seed_catalog() -> TestResult {
        let catalog = CatalogStore::open(Arc::new(MemoryStorage::new()))?;

        assert!(!catalog.list().is_empty(), "expected seeded products");
        assert!(catalog.get_by_slug("amber-glow-candle").is_some());

        Ok(())
    }

    #[test]
    fn lookups_return_none_for_unknown_products() -> TestResult {
        let catalog = CatalogStore::open(Arc::new(MemoryStorage::new()))?;

        assert!(catalog.get(Uuid::now_v7()).is_none());
        assert!(catalog.get_by_slug("no-such-product").is_none());

        Ok(())
    }

    #[test]
    fn create_persists_and_survives_reopening() -> TestResult {
        let storage = Arc::new(MemoryStorage::new());

        let created = CatalogStore::open(Arc::clone(&storage))?
            .create(new_product("test-candle"))?;

        let reopened = CatalogStore::open(storage)?;
        let found = reopened.get(created.id);

        assert_eq!(found, Some(&created));

        Ok(())
    }

    #[test]
    fn create_rejects_duplicate_slugs() -> TestResult {
        let mut catalog = CatalogStore::open(Arc::new(MemoryStorage::new()))?;

        catalog.create(new_product("test-candle"))?;
        let result = catalog.create(new_product("test-candle"));

        assert!(
            matches!(result, Err(CatalogError::SlugTaken)),
            "expected SlugTaken, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn update_replaces_the_whole_record() -> TestResult {
        let mut catalog = CatalogStore::open(Arc::new(MemoryStorage::new()))?;

        let created = catalog.create(new_product("test-candle"))?;

        let mut update = new_product("test-candle");
        update.title = "Renamed Candle".to_string();
        update.stock = 2;

        let updated = catalog.update(created.id, update)?;

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Renamed Candle");
        assert_eq!(updated.stock, 2);

        Ok(())
    }

    #[test]
    fn update_unknown_id_returns_not_found() -> TestResult {
        let mut catalog = CatalogStore::open(Arc::new(MemoryStorage::new()))?;

        let result = catalog.update(Uuid::now_v7(), new_product("test-candle"));

        assert!(
            matches!(result, Err(CatalogError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn update_rejects_slug_collision_with_another_product() -> TestResult {
        let mut catalog = CatalogStore::open(Arc::new(MemoryStorage::new()))?;

        catalog.create(new_product("first"))?;
        let second = catalog.create(new_product("second"))?;

        let result = catalog.update(second.id, new_product("first"));

        assert!(
            matches!(result, Err(CatalogError::SlugTaken)),
            "expected SlugTaken, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn delete_removes_the_product() -> TestResult {
        let mut catalog = CatalogStore::open(Arc::new(MemoryStorage::new()))?;

        let created = catalog.create(new_product("test-candle"))?;

        catalog.delete(created.id)?;

        assert!(catalog.get(created.id).is_none());

        Ok(())
    }

    #[test]
    fn delete_unknown_id_returns_not_found() -> TestResult {
        let mut catalog = CatalogStore::open(Arc::new(MemoryStorage::new()))?;

        let result = catalog.delete(Uuid::now_v7());

        assert!(
            matches!(result, Err(CatalogError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[test]
    fn corrupt_catalog_state_falls_back_to_the_seed() -> TestResult {
        let storage = Arc::new(MemoryStorage::new());

        storage.save(CATALOG_KEY, "not json")?;

        let catalog = CatalogStore::open(storage)?;

        assert!(catalog.get_by_slug("amber-glow-candle").is_some());

        Ok(())
    }
}
