//! Catalog seed fixture.
//!
//! The static product list shipped with the storefront, embedded as YAML.
//! It is the initial catalog state and the fallback whenever no
//! device-local catalog edits exist.

use super::models::Product;

const SEED_YAML: &str = include_str!("seed.yml");

/// Parse the embedded seed catalog.
///
/// # Errors
///
/// Returns a parse error when the embedded fixture is malformed; this is a
/// build-time defect, not a runtime condition.
pub fn seed_products() -> Result<Vec<Product>, serde_norway::Error> {
    serde_norway::from_str(SEED_YAML)
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn seed_parses() -> TestResult {
        let products = seed_products()?;

        assert!(!products.is_empty(), "seed catalog should not be empty");

        Ok(())
    }

    #[test]
    fn seed_slugs_and_ids_are_unique() -> TestResult {
        let products = seed_products()?;

        let slugs: FxHashSet<_> = products.iter().map(|product| &product.slug).collect();
        let ids: FxHashSet<_> = products.iter().map(|product| product.id).collect();

        assert_eq!(slugs.len(), products.len(), "duplicate slug in seed");
        assert_eq!(ids.len(), products.len(), "duplicate id in seed");

        Ok(())
    }

    #[test]
    fn seed_variant_and_color_ids_are_unique_within_products() -> TestResult {
        for product in seed_products()? {
            let variant_ids: FxHashSet<_> =
                product.variants.iter().map(|variant| &variant.id).collect();
            let color_ids: FxHashSet<_> = product.colors.iter().map(|color| &color.id).collect();

            assert_eq!(
                variant_ids.len(),
                product.variants.len(),
                "duplicate variant id in {}",
                product.slug
            );
            assert_eq!(
                color_ids.len(),
                product.colors.len(),
                "duplicate color id in {}",
                product.slug
            );
        }

        Ok(())
    }

    #[test]
    fn seed_contains_a_low_stock_product() -> TestResult {
        let products = seed_products()?;

        assert!(
            products.iter().any(|product| product.stock < 5),
            "seed should exercise the low-stock report"
        );

        Ok(())
    }
}
