//! Catalog Models

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Product Model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub category: String,
    /// Price in minor units, charged when the product has no variants.
    pub base_price: u64,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(default)]
    pub colors: Vec<ColorVariant>,
    #[serde(default)]
    pub scents: Vec<String>,
    pub stock: u32,
    #[serde(default)]
    pub featured: bool,
}

impl Product {
    /// Look up a variant by its id.
    pub fn variant(&self, id: &str) -> Option<&ProductVariant> {
        self.variants.iter().find(|variant| variant.id == id)
    }

    /// Look up a colour/finish by its id.
    pub fn color(&self, id: &str) -> Option<&ColorVariant> {
        self.colors.iter().find(|color| color.id == id)
    }
}

/// A purchasable size/format option with its own absolute price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Unique within the product.
    pub id: String,
    pub label: String,
    /// Absolute price in minor units, not a delta on the base price.
    pub price: u64,
}

/// A cosmetic colour/finish option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorVariant {
    /// Unique within the product.
    pub id: String,
    pub label: String,
    /// Image reference for the finish swatch.
    pub image: String,
    /// Optional surcharge in minor units, added to the variant price.
    #[serde(default)]
    pub price_delta: Option<u64>,
}

/// New Product Data
///
/// Everything a [`Product`] carries except the id, which the catalog store
/// assigns on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    pub title: String,
    pub slug: String,
    pub category: String,
    pub base_price: u64,
    #[serde(default)]
    pub variants: Vec<ProductVariant>,
    #[serde(default)]
    pub colors: Vec<ColorVariant>,
    #[serde(default)]
    pub scents: Vec<String>,
    pub stock: u32,
    #[serde(default)]
    pub featured: bool,
}

impl NewProduct {
    pub(crate) fn into_product(self, id: Uuid) -> Product {
        Product {
            id,
            title: self.title,
            slug: self.slug,
            category: self.category,
            base_price: self.base_price,
            variants: self.variants,
            colors: self.colors,
            scents: self.scents,
            stock: self.stock,
            featured: self.featured,
        }
    }
}
