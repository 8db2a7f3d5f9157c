use crate::error::{Result, ShelfError};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The closed set of product categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Electronics,
    Fashion,
}

impl Category {
    /// All categories, in the order they are offered to the user.
    pub const ALL: [Category; 2] = [Category::Electronics, Category::Fashion];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ShelfError;

    fn from_str(s: &str) -> Result<Self> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ShelfError::UnknownCategory(s.to_string()))
    }
}

/// A catalog entry. Products are built once when the catalog loads and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    /// Whole currency units.
    pub price: u32,
    /// Display token shown on the card (an emoji, not a URL).
    pub depiction: String,
    /// In [0, 5].
    pub rating: f32,
    pub in_stock: bool,
}

impl Product {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        category: Category,
        price: u32,
        depiction: impl Into<String>,
        rating: f32,
        in_stock: bool,
    ) -> Self {
        Self {
            id: ProductId(id),
            name: name.into(),
            category,
            price,
            depiction: depiction.into(),
            rating: rating.clamp(0.0, 5.0),
            in_stock,
        }
    }
}
