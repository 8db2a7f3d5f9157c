//! # Catalog
//!
//! The product collection. It is built once at startup and is read-only from then on:
//! nothing in the crate hands out a mutable reference to a [`Product`].
//!
//! The built-in collection lives in [`Catalog::builtin`]. Its authored order is the
//! "featured" order, so the order of the entries below is significant.

use crate::error::{Result, ShelfError};
use crate::model::{Category, Product, ProductId};
use std::collections::HashSet;

#[derive(Debug, Clone)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from an authored list. Ids must be unique.
    pub fn new(products: Vec<Product>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id) {
                return Err(ShelfError::DuplicateProduct(product.id.0));
            }
        }
        Ok(Self { products })
    }

    /// The twelve products shipped with shelf.
    pub fn builtin() -> Self {
        use Category::{Electronics, Fashion};

        let products = vec![
            Product::new(1, "Cosmic Headphones", Electronics, 299, "🎧", 4.8, true),
            Product::new(2, "Neon Backpack", Fashion, 89, "🎒", 4.5, true),
            Product::new(3, "Smart Watch Pro", Electronics, 449, "⌚", 4.9, false),
            Product::new(4, "Urban Sneakers", Fashion, 129, "👟", 4.6, true),
            Product::new(5, "Wireless Speaker", Electronics, 179, "🔊", 4.7, true),
            Product::new(6, "Designer Sunglasses", Fashion, 199, "🕶️", 4.4, true),
            Product::new(7, "Gaming Mouse", Electronics, 79, "🖱️", 4.8, true),
            Product::new(8, "Leather Jacket", Fashion, 349, "🧥", 4.9, false),
            Product::new(9, "Camera Drone", Electronics, 699, "📷", 4.7, true),
            Product::new(10, "Sports Cap", Fashion, 39, "🧢", 4.3, true),
            Product::new(11, "Mechanical Keyboard", Electronics, 159, "⌨️", 4.8, true),
            Product::new(12, "Vintage Watch", Fashion, 599, "⏰", 4.9, true),
        ];

        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}
