//! Product catalog
//!
//! The catalog is a fixed, ordered list of sellable products, loaded once at
//! startup. Ordering matters: the per-product bulk discount scans products in
//! catalog order and stops at the first qualifying one.

use serde::{Deserialize, Serialize};

/// A catalog entry: product name and unit price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product name
    pub name: String,

    /// Non-negative unit price
    pub price: f64,
}

impl Product {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

/// Ordered list of products available for purchase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Iterates products in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    /// The store's standard three-product catalog.
    fn default() -> Self {
        Self::new(vec![
            Product::new("Product A", 20.0),
            Product::new("Product B", 40.0),
            Product::new("Product C", 50.0),
        ])
    }
}
